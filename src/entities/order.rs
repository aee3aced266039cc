//! Order entity - Customer orders and their lifecycle.
//!
//! Each order snapshots the selected menu items, portion, and delivery
//! details at placement time. The status field is a closed enum and the
//! server enforces the transition table in [`OrderStatus::can_transition_to`];
//! arbitrary status overwrites are rejected.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Identity-provider id of the customer who placed the order
    pub user_id: String,
    /// Names of the ordered dishes (JSON list of strings)
    pub menu_items: Json,
    /// Portion size selected for the order
    pub selected_portion: PortionSize,
    /// Selected add-on, if any
    pub selected_add_on: Option<String>,
    /// Order total in rupees
    pub total: f64,
    /// Street address for delivery
    pub delivery_address: String,
    /// City for delivery
    pub delivery_city: String,
    /// Postal code for delivery, if provided
    pub delivery_postal_code: Option<String>,
    /// Contact phone number for the delivery
    pub contact_phone: String,
    /// Current lifecycle status
    pub status: OrderStatus,
    /// When the order was placed
    pub created_at: DateTimeUtc,
}

/// Portion size of an order
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum PortionSize {
    /// Full portion
    #[sea_orm(string_value = "full")]
    Full,
    /// Half portion
    #[sea_orm(string_value = "half")]
    Half,
}

/// Lifecycle status of an order.
///
/// The happy path runs pending → `in_progress` → `on_the_way` → completed;
/// cancelled is reachable from any non-terminal state. Completed and
/// cancelled are terminal.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, not yet picked up by the kitchen
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Being prepared
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    /// Out for delivery
    #[sea_orm(string_value = "on_the_way")]
    OnTheWay,
    /// Delivered; terminal
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Cancelled; terminal
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl OrderStatus {
    /// Whether this status admits a transition to `next`.
    ///
    /// Self-transitions are rejected like any other illegal edge.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::InProgress | Self::Cancelled)
                | (Self::InProgress, Self::OnTheWay | Self::Cancelled)
                | (Self::OnTheWay, Self::Completed | Self::Cancelled)
        )
    }

    /// Whether no further transitions are possible from this status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// The wire representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::OnTheWay => "on_the_way",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One order has at most one review (unique index on the review side)
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
