use crate::error::{config::ConfigError, AppError};

const VATUSA_API_URL: &str = "https://api.vatusa.net/v2";

pub struct Config {
    pub database_url: String,

    pub facility_code: String,

    pub vatusa_api_url: String,
    // Absent key means the facility has not enabled training record sync;
    // the run short-circuits instead of erroring.
    pub vatusa_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            facility_code: std::env::var("FACILITY_CODE")
                .map_err(|_| ConfigError::MissingEnvVar("FACILITY_CODE".to_string()))?,
            vatusa_api_url: std::env::var("VATUSA_API_URL")
                .unwrap_or_else(|_| VATUSA_API_URL.to_string()),
            vatusa_api_key: std::env::var("VATUSA_API_KEY").ok(),
        })
    }
}
