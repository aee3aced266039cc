//! Menu entity - The keyed singleton menu configuration.
//!
//! The restaurant serves a single daily menu, stored as one keyed
//! configuration row (key = `"main"`) with an explicit upsert operation
//! rather than an implicit only-one-row-in-the-table invariant. The order
//! window flag gates whether new orders are accepted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Menu database model - keyed configuration row
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menus")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Configuration key; always `"main"` for the daily menu
    #[sea_orm(unique)]
    pub key: String,
    /// Names of the dishes on today's menu (JSON list of strings)
    pub menu_items: Json,
    /// Price of a full portion in rupees
    pub price_full: f64,
    /// Price of a half portion in rupees
    pub price_half: f64,
    /// Available add-ons as a JSON map of name → enabled
    pub add_ons: Json,
    /// Whether new orders are currently accepted
    pub is_ordering_enabled: bool,
    /// Message shown to customers when ordering is closed
    pub order_window_message: String,
    /// When the menu was last modified
    pub updated_at: DateTimeUtc,
}

/// Menu has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
