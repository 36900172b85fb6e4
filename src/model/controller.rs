//! Controller roster domain models and parameters.

use chrono::{DateTime, Utc};

/// A controller on the facility roster.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct Controller {
    /// Network certificate id, assigned by the parent organization.
    pub cid: i32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Facility-unique two-letter identifier.
    pub operating_initials: String,
    /// When the controller joined the facility.
    pub joined_at: DateTime<Utc>,
}

impl Controller {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Controller` - The converted domain model
    pub fn from_entity(entity: entity::controller::Model) -> Self {
        Self {
            cid: entity.cid,
            first_name: entity.first_name,
            last_name: entity.last_name,
            operating_initials: entity.operating_initials,
            joined_at: entity.joined_at,
        }
    }
}

/// Parameters for adding a controller to the roster.
///
/// Operating initials are not part of the request; the roster service assigns
/// them from the currently unused pool.
#[derive(Debug, Clone)]
pub struct AddControllerParam {
    /// Network certificate id.
    pub cid: i32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Parameters for inserting a controller row with assigned initials.
#[derive(Debug, Clone)]
pub struct CreateControllerParam {
    /// Network certificate id.
    pub cid: i32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Assigned operating initials.
    pub operating_initials: String,
}
