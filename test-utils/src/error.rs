use thiserror::Error;

/// Errors that can occur during test environment setup.
///
/// Covers failures while connecting to the in-memory SQLite database or
/// creating the tables a test asked for.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database connection or schema creation failure.
    #[error("Test database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
