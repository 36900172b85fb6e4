//! Roster service for adding controllers to the facility.
//!
//! This module provides the `RosterService` for placing new controllers on the
//! facility roster. Joining the roster assigns the controller a pair of
//! operating initials, unique within the facility, derived from their name
//! where possible and from bounded random probing otherwise.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::{
    data::controller::ControllerRepository,
    error::{roster::RosterError, AppError},
    model::controller::{AddControllerParam, Controller, CreateControllerParam},
    util::initials::generate_operating_initials,
};

/// Service for managing the facility controller roster.
pub struct RosterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterService<'a> {
    /// Creates a new RosterService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RosterService` - New service instance
    #[allow(dead_code)]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a controller to the roster with freshly assigned operating initials.
    ///
    /// Loads the initials already in use, generates an unused pair from the
    /// controller's name (falling back to bounded random probing), and inserts
    /// the roster row. The facility has 676 possible pairs; if none can be
    /// found the controller is not added.
    ///
    /// # Arguments
    /// - `param` - The controller's CID and name
    ///
    /// # Returns
    /// - `Ok(Controller)` - The created roster entry with assigned initials
    /// - `Err(AppError::RosterErr(InitialsExhausted))` - No unused pair found
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    #[allow(dead_code)]
    pub async fn add_controller(&self, param: AddControllerParam) -> Result<Controller, AppError> {
        let controller_repo = ControllerRepository::new(self.db);

        let used: HashSet<String> = controller_repo
            .get_all_operating_initials()
            .await?
            .into_iter()
            .collect();

        let mut rng = rand::rng();
        let operating_initials =
            generate_operating_initials(&mut rng, &param.first_name, &param.last_name, &used)
                .ok_or(RosterError::InitialsExhausted { cid: param.cid })?;

        let controller = controller_repo
            .create(CreateControllerParam {
                cid: param.cid,
                first_name: param.first_name,
                last_name: param.last_name,
                operating_initials,
            })
            .await?;

        tracing::info!(
            "Added controller {} ({} {}) to the roster as {}",
            controller.cid,
            controller.first_name,
            controller.last_name,
            controller.operating_initials
        );

        Ok(controller)
    }
}
