//! Error types for the sync worker.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors; `main`
//! logs it and sets the process exit code. Per-record failures inside a sync
//! run are logged and skipped rather than propagated.

pub mod config;
pub mod internal;
pub mod roster;
pub mod sync;
pub mod vatusa;

use thiserror::Error;

use crate::error::{
    config::ConfigError, internal::InternalError, roster::RosterError, sync::SyncError,
    vatusa::VatusaError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. All
/// variants use `#[from]` for automatic error conversion, so the `?` operator
/// lifts domain errors into `AppError` at the service and startup boundaries.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal; the run cannot proceed without required configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// VATUSA training record API error.
    ///
    /// A fetch failure aborts the run before any local records are touched.
    #[error(transparent)]
    VatusaErr(#[from] VatusaError),

    /// Reconciliation consistency violation.
    #[error(transparent)]
    SyncErr(#[from] SyncError),

    /// Facility roster operation error.
    #[error(transparent)]
    RosterErr(#[from] RosterError),

    /// Internal error indicating unexpected data or a possible bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}
