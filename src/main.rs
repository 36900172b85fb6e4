mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod util;
mod vatusa;

use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    config::Config, error::AppError, service::vatusa_sync::VatusaSyncService,
    vatusa::HttpVatusaClient,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!("Training record sync failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let api_key = match &config.vatusa_api_key {
        Some(key) => key.clone(),
        None => {
            tracing::info!("VATUSA_API_KEY not set, skipping training record sync");
            return Ok(());
        }
    };

    let db = startup::connect_to_database(&config).await?;

    let client = HttpVatusaClient::new(config.vatusa_api_url, api_key);
    let service = VatusaSyncService::new(&db, &client, config.facility_code);

    service.run().await?;

    Ok(())
}
