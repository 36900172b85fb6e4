//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! in bulk.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates several training sessions that have not been reconciled yet.
///
/// Each session is created with default values and no VATUSA record id,
/// which is the state local sessions are in before a sync pass runs.
/// Useful for seeding match-candidate pools in sync tests.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of sessions to create
///
/// # Returns
/// - `Ok(Vec<Model>)` - Created session entities in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_unsynced_sessions(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::training_session::Model>, DbErr> {
    let mut sessions = Vec::with_capacity(count);

    for _ in 0..count {
        let session = crate::factory::training_session::create_training_session(db).await?;
        sessions.push(session);
    }

    Ok(sessions)
}
