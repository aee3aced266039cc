//! Stock update entity - The append-only stock ledger.
//!
//! Every stock-level change appends one record capturing the operation type,
//! the absolute quantity moved, and the before/after stock values. Records
//! are never mutated or deleted by the system.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stock ledger database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stock_updates")]
pub struct Model {
    /// Unique identifier for the ledger record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the inventory item this record belongs to
    pub inventory_item_id: i64,
    /// Kind of stock movement this record captures
    pub update_type: StockUpdateType,
    /// Absolute quantity moved, always ≥ 0
    pub quantity: f64,
    /// Stock level before the change
    pub previous_stock: f64,
    /// Stock level after the change
    pub new_stock: f64,
    /// Optional free-form note about the change
    pub note: Option<String>,
    /// Who performed the change (admin identifier)
    pub updated_by: Option<String>,
    /// When the record was appended
    pub created_at: DateTimeUtc,
}

/// Kind of stock movement recorded in the ledger
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockUpdateType {
    /// Stock was added (delivery, restock)
    #[sea_orm(string_value = "ADD_STOCK")]
    AddStock,
    /// Stock was consumed (kitchen use, wastage)
    #[sea_orm(string_value = "USE_STOCK")]
    UseStock,
    /// Stock level was corrected directly through an item edit
    #[sea_orm(string_value = "ADJUSTMENT")]
    Adjustment,
}

/// Defines relationships between `StockUpdate` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each ledger record belongs to one inventory item
    #[sea_orm(
        belongs_to = "super::inventory_item::Entity",
        from = "Column::InventoryItemId",
        to = "super::inventory_item::Column::Id"
    )]
    InventoryItem,
}

impl Related<super::inventory_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InventoryItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
