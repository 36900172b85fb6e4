//! VATUSA training record API access.
//!
//! The sync run talks to VATUSA through the `VatusaClient` trait so tests can
//! substitute stub implementations. `HttpVatusaClient` is the production
//! implementation; it is constructed in `main` and injected into the service.

pub mod client;

pub use client::HttpVatusaClient;

use async_trait::async_trait;

use crate::{error::vatusa::VatusaError, model::vatusa::VatusaTrainingRecord};

/// Client for the VATUSA training record API.
#[async_trait]
pub trait VatusaClient: Send + Sync {
    /// Fetches all training records visible to the configured API key.
    ///
    /// Records are returned unfiltered; the caller applies the facility scope
    /// filter.
    ///
    /// # Returns
    /// - `Ok(Vec<VatusaTrainingRecord>)` - Records as returned by the API
    /// - `Err(VatusaError)` - Request, status, or decode failure
    async fn fetch_training_records(&self) -> Result<Vec<VatusaTrainingRecord>, VatusaError>;
}
