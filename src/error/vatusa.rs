use thiserror::Error;

/// Errors from the VATUSA training record API.
#[derive(Error, Debug)]
pub enum VatusaError {
    /// Transport-level request failure (connection, timeout, TLS).
    #[error("VATUSA API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("VATUSA API returned {status}: {message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Response body, as returned by the API
        message: String,
    },

    /// The response body could not be decoded into training records.
    #[error("Failed to decode VATUSA API response: {0}")]
    Decode(#[from] serde_json::Error),
}
