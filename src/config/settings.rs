//! Application settings loaded from environment variables.
//!
//! `.env` loading happens in `main` before this module runs, so deployments
//! can supply the same variables either way. Missing optional values fall
//! back to logged defaults; only a malformed value is fatal.

use crate::errors::{Error, Result};
use std::{env, fmt::Display, str::FromStr};
use tracing::{info, warn};

/// Runtime configuration for the service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the HTTP server binds to
    pub port: u16,
    /// `SeaORM` database URL
    pub database_url: String,
    /// Identity-provider webhook signing secret (`whsec_...`); webhook
    /// deliveries are rejected when unset
    pub webhook_secret: Option<String>,
    /// Path of the TOML file holding the initial menu seed
    pub menu_seed_path: String,
}

impl AppConfig {
    /// Loads the configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if a present variable fails to parse.
    pub fn load() -> Result<Self> {
        Ok(Self {
            port: try_load("PORT", "5000")?,
            database_url: var_or_default(
                "DATABASE_URL",
                "sqlite://data/rajapaksha_foods.sqlite?mode=rwc",
            ),
            webhook_secret: optional_var("CLERK_WEBHOOK_SECRET"),
            menu_seed_path: var_or_default("MENU_SEED_PATH", "config.toml"),
        })
    }
}

fn optional_var(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => {
            warn!("{key} not set; dependent features are disabled");
            None
        }
    }
}

fn var_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    var_or_default(key, default)
        .parse()
        .map_err(|e| Error::Config {
            message: format!("Invalid {key} value: {e}"),
        })
}
