//! Controller data repository for database operations.
//!
//! This module provides the `ControllerRepository` for managing roster records in the
//! database, including the operating-initials pool queries used when new controllers
//! join the facility.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::model::controller::{Controller, CreateControllerParam};

/// Repository providing database operations for the facility roster.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating and querying controller records.
pub struct ControllerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ControllerRepository<'a> {
    /// Creates a new ControllerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ControllerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new controller on the roster.
    ///
    /// Inserts a controller row with initials already assigned by the roster
    /// service. The unique index on operating initials backs the service's
    /// uniqueness guarantee.
    ///
    /// # Arguments
    /// - `param` - Create parameters including the assigned operating initials
    ///
    /// # Returns
    /// - `Ok(Controller)` - The created controller
    /// - `Err(DbErr)` - Database error during insert (including initials collisions)
    pub async fn create(&self, param: CreateControllerParam) -> Result<Controller, DbErr> {
        let entity = entity::controller::ActiveModel {
            cid: ActiveValue::Set(param.cid),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            operating_initials: ActiveValue::Set(param.operating_initials),
            joined_at: ActiveValue::Set(chrono::Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Controller::from_entity(entity))
    }

    /// Finds a controller by CID.
    ///
    /// # Arguments
    /// - `cid` - Network certificate id
    ///
    /// # Returns
    /// - `Ok(Some(Controller))` - Controller found
    /// - `Ok(None)` - No controller with that CID on the roster
    /// - `Err(DbErr)` - Database error during query
    #[allow(dead_code)]
    pub async fn find_by_cid(&self, cid: i32) -> Result<Option<Controller>, DbErr> {
        let entity = entity::prelude::Controller::find_by_id(cid)
            .one(self.db)
            .await?;

        Ok(entity.map(Controller::from_entity))
    }

    /// Gets every operating-initials pair currently assigned.
    ///
    /// Used to build the used set the initials generator draws against.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Assigned initials, ordered alphabetically
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_operating_initials(&self) -> Result<Vec<String>, DbErr> {
        let entities = entity::prelude::Controller::find()
            .order_by_asc(entity::controller::Column::OperatingInitials)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| entity.operating_initials)
            .collect())
    }
}
