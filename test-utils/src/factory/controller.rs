//! Controller factory for creating test roster entities.
//!
//! This module provides factory methods for creating controller entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test controllers with customizable fields.
///
/// Provides a builder pattern for creating controller entities with default
/// values that can be overridden as needed. Default operating initials are
/// derived from the test ID counter so repeated inserts never collide with
/// the unique initials constraint.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::controller::ControllerFactory;
///
/// let controller = ControllerFactory::new(&db)
///     .first_name("Jordan")
///     .last_name("Meyer")
///     .operating_initials("JM")
///     .build()
///     .await?;
/// ```
pub struct ControllerFactory<'a> {
    db: &'a DatabaseConnection,
    cid: i32,
    first_name: String,
    last_name: String,
    operating_initials: String,
}

impl<'a> ControllerFactory<'a> {
    /// Creates a new ControllerFactory with default values.
    ///
    /// Defaults:
    /// - cid: unique value derived from the test ID counter
    /// - first_name: `"Test"`
    /// - last_name: `"Controller {id}"` where id is auto-incremented
    /// - operating_initials: unique two-letter pair derived from the counter
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ControllerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            cid: 1_400_000 + id as i32,
            first_name: "Test".to_string(),
            last_name: format!("Controller {}", id),
            operating_initials: initials_for(id),
        }
    }

    /// Sets the controller CID.
    ///
    /// # Arguments
    /// - `cid` - Network certificate ID
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn cid(mut self, cid: i32) -> Self {
        self.cid = cid;
        self
    }

    /// Sets the controller first name.
    ///
    /// # Arguments
    /// - `first_name` - Given name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the controller last name.
    ///
    /// # Arguments
    /// - `last_name` - Family name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the operating initials.
    ///
    /// # Arguments
    /// - `operating_initials` - Two-letter initials, unique within the facility
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn operating_initials(mut self, operating_initials: impl Into<String>) -> Self {
        self.operating_initials = operating_initials.into();
        self
    }

    /// Builds and inserts the controller entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::controller::Model)` - Created controller entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::controller::Model, DbErr> {
        entity::controller::ActiveModel {
            cid: ActiveValue::Set(self.cid),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            operating_initials: ActiveValue::Set(self.operating_initials),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Maps a counter value onto a two-letter pair, wrapping after 676 values.
fn initials_for(id: u64) -> String {
    let first = (b'A' + ((id / 26) % 26) as u8) as char;
    let second = (b'A' + (id % 26) as u8) as char;
    format!("{}{}", first, second)
}

/// Creates a controller with default values.
///
/// Shorthand for `ControllerFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::controller::Model)` - Created controller entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let controller = create_controller(&db).await?;
/// ```
pub async fn create_controller(
    db: &DatabaseConnection,
) -> Result<entity::controller::Model, DbErr> {
    ControllerFactory::new(db).build().await
}
