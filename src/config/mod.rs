/// Database connection and table/index creation
pub mod database;

/// Initial menu seeding from config.toml
pub mod menu;

/// Application settings loaded from environment variables
pub mod settings;
