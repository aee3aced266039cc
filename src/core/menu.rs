//! Menu business logic - The keyed singleton daily menu.
//!
//! The menu is one configuration row under a fixed key with explicit
//! get-or-create and upsert operations; nothing relies on the table
//! happening to hold a single row. The order window lives here too: a flag
//! plus customer-facing message that gates order placement.

use crate::{
    entities::{Menu, menu},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use std::collections::BTreeMap;

/// Fixed key of the daily menu configuration row.
pub const MENU_KEY: &str = "main";

const DEFAULT_WINDOW_MESSAGE: &str = "Ordering is currently closed. Please check back soon.";

/// Retrieves the menu row, creating a closed default if none exists yet.
///
/// The default has no dishes and ordering disabled, so a freshly deployed
/// instance refuses orders until an admin publishes a menu.
pub async fn get_or_create_menu(db: &DatabaseConnection) -> Result<menu::Model> {
    let existing = Menu::find()
        .filter(menu::Column::Key.eq(MENU_KEY))
        .one(db)
        .await?;

    if let Some(menu) = existing {
        return Ok(menu);
    }

    let model = menu::ActiveModel {
        key: Set(MENU_KEY.to_string()),
        menu_items: Set(serde_json::Value::Array(Vec::new())),
        price_full: Set(0.0),
        price_half: Set(0.0),
        add_ons: Set(serde_json::Value::Object(serde_json::Map::new())),
        is_ordering_enabled: Set(false),
        order_window_message: Set(DEFAULT_WINDOW_MESSAGE.to_string()),
        updated_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Replaces the menu's dishes, prices, and add-ons, keeping the order
/// window settings untouched.
///
/// # Errors
/// Returns an error if a price is negative or not finite, a dish name is
/// empty, or the database write fails.
pub async fn upsert_menu(
    db: &DatabaseConnection,
    menu_items: Vec<String>,
    price_full: f64,
    price_half: f64,
    add_ons: BTreeMap<String, bool>,
) -> Result<menu::Model> {
    for price in [price_full, price_half] {
        if price < 0.0 || !price.is_finite() {
            return Err(Error::InvalidAmount { amount: price });
        }
    }

    if menu_items.iter().any(|item| item.trim().is_empty()) {
        return Err(Error::Validation {
            message: "Menu item names cannot be empty".to_string(),
        });
    }

    let current = get_or_create_menu(db).await?;

    let mut active_model: menu::ActiveModel = current.into();
    active_model.menu_items = Set(serde_json::json!(menu_items));
    active_model.price_full = Set(price_full);
    active_model.price_half = Set(price_half);
    active_model.add_ons = Set(serde_json::json!(add_ons));
    active_model.updated_at = Set(chrono::Utc::now());

    active_model.update(db).await.map_err(Into::into)
}

/// Opens or closes the order window, optionally replacing the message
/// customers see while it is closed.
pub async fn set_order_window(
    db: &DatabaseConnection,
    enabled: bool,
    message: Option<String>,
) -> Result<menu::Model> {
    let current = get_or_create_menu(db).await?;

    let mut active_model: menu::ActiveModel = current.into();
    active_model.is_ordering_enabled = Set(enabled);
    if let Some(message) = message {
        active_model.order_window_message = Set(message);
    }
    active_model.updated_at = Set(chrono::Utc::now());

    active_model.update(db).await.map_err(Into::into)
}
