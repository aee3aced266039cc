//! Inventory item entity - Stock-tracked ingredients and supplies.
//!
//! Each item carries a current stock level plus configured minimum and
//! maximum thresholds. The stock classification (`stock_status`) and the
//! total value are derived on read and never stored. Items are soft-deleted
//! via the `is_active` flag.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Inventory item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    /// Unique identifier for the inventory item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the item (e.g., "Basmati Rice", "Chicken")
    pub name: String,
    /// Category for organization and filtering
    pub category: InventoryCategory,
    /// Current stock level in `unit`s, never below zero
    pub current_stock: f64,
    /// Threshold at or below which the item counts as low stock
    pub min_stock_level: f64,
    /// Threshold at or above which the item counts as overstocked
    pub max_stock_level: f64,
    /// Unit of measure for stock quantities
    pub unit: InventoryUnit,
    /// Cost per unit in rupees
    pub cost_per_unit: f64,
    /// Soft delete flag - if false, item is hidden but data is preserved
    pub is_active: bool,
    /// When the item was created
    pub created_at: DateTimeUtc,
    /// When the item was last modified
    pub updated_at: DateTimeUtc,
}

/// Inventory category, a closed set
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum InventoryCategory {
    /// Fresh vegetables
    #[sea_orm(string_value = "vegetables")]
    Vegetables,
    /// Meat and poultry
    #[sea_orm(string_value = "meat")]
    Meat,
    /// Fish and seafood
    #[sea_orm(string_value = "seafood")]
    Seafood,
    /// Rice, flour, and other grains
    #[sea_orm(string_value = "grains")]
    Grains,
    /// Spices and condiments
    #[sea_orm(string_value = "spices")]
    Spices,
    /// Milk, curd, and other dairy
    #[sea_orm(string_value = "dairy")]
    Dairy,
    /// Drinks and drink ingredients
    #[sea_orm(string_value = "beverages")]
    Beverages,
    /// Boxes, bags, and other packaging
    #[sea_orm(string_value = "packaging")]
    Packaging,
    /// Anything that fits no other category
    #[sea_orm(string_value = "other")]
    Other,
}

/// Unit of measure for stock quantities
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum InventoryUnit {
    /// Kilograms
    #[sea_orm(string_value = "kg")]
    Kg,
    /// Grams
    #[sea_orm(string_value = "g")]
    G,
    /// Liters
    #[sea_orm(string_value = "l")]
    L,
    /// Milliliters
    #[sea_orm(string_value = "ml")]
    Ml,
    /// Individual pieces
    #[sea_orm(string_value = "pieces")]
    Pieces,
    /// Packs
    #[sea_orm(string_value = "packs")]
    Packs,
}

/// Derived stock classification of an inventory item.
///
/// Computed from `current_stock` against the configured thresholds; out of
/// stock takes precedence over low stock, and low stock over overstocked,
/// so degenerate threshold configurations still classify deterministically.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// No usable stock remains (current stock ≤ 0)
    OutOfStock,
    /// Stock at or below the configured minimum
    LowStock,
    /// Stock between the thresholds
    InStock,
    /// Stock at or above the configured maximum
    Overstocked,
}

impl Model {
    /// Classifies this item's stock level against its thresholds.
    #[must_use]
    pub fn stock_status(&self) -> StockStatus {
        if self.current_stock <= 0.0 {
            StockStatus::OutOfStock
        } else if self.current_stock <= self.min_stock_level {
            StockStatus::LowStock
        } else if self.current_stock >= self.max_stock_level {
            StockStatus::Overstocked
        } else {
            StockStatus::InStock
        }
    }

    /// Total value of the stock on hand: `current_stock` × `cost_per_unit`.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.current_stock * self.cost_per_unit
    }
}

/// Defines relationships between `InventoryItem` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One inventory item has many stock ledger records
    #[sea_orm(has_many = "super::stock_update::Entity")]
    StockUpdates,
}

impl Related<super::stock_update::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StockUpdates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
