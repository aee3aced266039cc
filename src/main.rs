//! Binary entrypoint for the Rajapaksha Foods backend.

use std::sync::Arc;

use rajapaksha_foods::{
    api::{self, AppState},
    config::{database, menu as menu_seed, settings::AppConfig},
    errors::Result,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenvy::dotenv().ok();

    // 3. Load the application configuration
    let config = AppConfig::load()?;
    info!("Configuration loaded");

    // 4. Initialize the database
    let db = database::create_connection(&config.database_url)
        .await
        .inspect(|_| info!("Database connected"))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;

    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database schema ready"))
        .inspect_err(|e| error!("Failed to create database schema: {e}"))?;

    // 5. Seed the initial menu when a seed file is present
    match menu_seed::load_config(&config.menu_seed_path) {
        Ok(seed) => menu_seed::seed_initial_menu(&db, &seed.menu)
            .await
            .inspect_err(|e| error!("Failed to seed menu: {e}"))?,
        Err(e) => warn!("No usable menu seed ({e}); starting with a closed menu"),
    }

    // 6. Serve the API
    let state = AppState::new(db, Arc::new(config));
    api::serve(state).await
}
