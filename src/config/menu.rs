//! Initial menu seeding from config.toml.
//!
//! On first start the menu table is empty; the seed file supplies the
//! opening menu so the storefront is not blank until an admin edits it.
//! Seeding never overwrites an existing menu row.

use crate::errors::{Error, Result};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::{collections::BTreeMap, path::Path};
use tracing::info;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// The initial menu to publish
    pub menu: MenuSeed,
}

/// Initial menu configuration
#[derive(Debug, Deserialize, Clone)]
pub struct MenuSeed {
    /// Names of the dishes on the opening menu
    pub menu_items: Vec<String>,
    /// Price of a full portion in rupees
    pub price_full: f64,
    /// Price of a half portion in rupees
    pub price_half: f64,
    /// Add-ons as a map of name → enabled
    #[serde(default)]
    pub add_ons: BTreeMap<String, bool>,
    /// Whether ordering opens immediately
    #[serde(default)]
    pub is_ordering_enabled: bool,
    /// Message shown while ordering is closed
    #[serde(default)]
    pub order_window_message: Option<String>,
}

/// Loads the seed configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML fails to parse.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read menu seed file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse menu seed file: {e}"),
    })
}

/// Publishes the seed menu when no menu row exists yet.
///
/// # Errors
/// Returns an error if a database operation fails or the seed values fail
/// menu validation.
pub async fn seed_initial_menu(db: &DatabaseConnection, seed: &MenuSeed) -> Result<()> {
    use crate::entities::Menu;
    use sea_orm::{EntityTrait, PaginatorTrait};

    if Menu::find().count(db).await? > 0 {
        info!("Menu already present, skipping seed");
        return Ok(());
    }

    crate::core::menu::upsert_menu(
        db,
        seed.menu_items.clone(),
        seed.price_full,
        seed.price_half,
        seed.add_ons.clone(),
    )
    .await?;

    crate::core::menu::set_order_window(
        db,
        seed.is_ordering_enabled,
        seed.order_window_message.clone(),
    )
    .await?;

    info!(
        "Seeded initial menu with {} items (ordering {})",
        seed.menu_items.len(),
        if seed.is_ordering_enabled {
            "open"
        } else {
            "closed"
        }
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[test]
    fn test_parse_menu_seed() {
        let toml_str = r#"
            [menu]
            menu_items = ["Chicken Rice & Curry", "Dhal Curry"]
            price_full = 850.0
            price_half = 550.0
            is_ordering_enabled = true

            [menu.add_ons]
            "Extra Papadam" = true
            "Fried Egg" = false
        "#;

        let config: SeedConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.menu.menu_items.len(), 2);
        assert_eq!(config.menu.price_full, 850.0);
        assert!(config.menu.is_ordering_enabled);
        assert_eq!(config.menu.add_ons.get("Extra Papadam"), Some(&true));
        assert_eq!(config.menu.order_window_message, None);
    }

    #[test]
    fn test_parse_rejects_missing_prices() {
        let toml_str = r#"
            [menu]
            menu_items = ["Kottu"]
        "#;

        assert!(toml::from_str::<SeedConfig>(toml_str).is_err());
    }

    #[tokio::test]
    async fn test_seed_only_when_empty() -> Result<()> {
        let db = setup_test_db().await?;

        let seed = MenuSeed {
            menu_items: vec!["Chicken Rice & Curry".to_string()],
            price_full: 850.0,
            price_half: 550.0,
            add_ons: BTreeMap::new(),
            is_ordering_enabled: true,
            order_window_message: None,
        };

        seed_initial_menu(&db, &seed).await?;

        let menu = crate::core::menu::get_or_create_menu(&db).await?;
        assert!(menu.is_ordering_enabled);
        assert_eq!(menu.price_full, 850.0);

        // A second seed run leaves the live menu alone
        let altered = MenuSeed {
            price_full: 999.0,
            ..seed
        };
        seed_initial_menu(&db, &altered).await?;

        let menu = crate::core::menu::get_or_create_menu(&db).await?;
        assert_eq!(menu.price_full, 850.0);

        Ok(())
    }
}
