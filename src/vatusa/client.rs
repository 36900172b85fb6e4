use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    error::vatusa::VatusaError, model::vatusa::VatusaTrainingRecord, vatusa::VatusaClient,
};

/// Response envelope the API wraps record lists in.
#[derive(Debug, Deserialize)]
struct TrainingRecordsResponse {
    data: Vec<VatusaTrainingRecord>,
}

/// Production VATUSA API client over HTTP.
///
/// Authenticates every request with the facility's API key. Constructed in
/// `main` once the key is known to be configured.
pub struct HttpVatusaClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpVatusaClient {
    /// Creates a new HttpVatusaClient instance.
    ///
    /// # Arguments
    /// - `base_url` - API base, e.g. `https://api.vatusa.net/v2`
    /// - `api_key` - Facility API key used as the bearer token
    ///
    /// # Returns
    /// - `HttpVatusaClient` - New client instance
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl VatusaClient for HttpVatusaClient {
    async fn fetch_training_records(&self) -> Result<Vec<VatusaTrainingRecord>, VatusaError> {
        let url = format!("{}/training/records", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(VatusaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let envelope: TrainingRecordsResponse = serde_json::from_str(&body)?;

        Ok(envelope.data)
    }
}
