//! Review entity - Customer reviews of completed orders.
//!
//! One review per order, enforced by a unique index on `order_id`. Each
//! review snapshots the order's items and total so that later menu or order
//! changes never alter what the review describes.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    /// Unique identifier for the review
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Identity-provider id of the reviewer
    pub user_id: String,
    /// ID of the reviewed order; unique - one review per order
    #[sea_orm(unique)]
    pub order_id: i64,
    /// Star rating, 1 through 5
    pub rating: i32,
    /// Free-form review text
    pub comment: String,
    /// Display name of the reviewer at review time
    pub user_name: String,
    /// Snapshot of the order's menu items (JSON list of strings)
    pub order_items: Json,
    /// Snapshot of the order's total in rupees
    pub order_total: f64,
    /// When the review was created
    pub created_at: DateTimeUtc,
    /// When the review was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Review and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each review belongs to one order
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
