//! Order business logic - Placement, lifecycle transitions, and dashboard
//! grouping.
//!
//! Placement is gated by the menu's order window. Status changes go through
//! the transition table on [`OrderStatus`]; arbitrary overwrites are
//! rejected. Placement has no side effects beyond the insert - in
//! particular, no inventory decrement is tied to an order.

use crate::{
    entities::{
        Order,
        order::{self, OrderStatus, PortionSize},
    },
    errors::{Error, Result},
};
use chrono::{DateTime, Timelike, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Serialize;

/// Delivery details captured at placement time.
#[derive(Debug, Clone)]
pub struct DeliveryDetails {
    /// Street address
    pub address: String,
    /// City
    pub city: String,
    /// Postal code, if provided
    pub postal_code: Option<String>,
    /// Contact phone number
    pub phone: String,
}

/// Operational meal window an order falls into, derived from its placement
/// time. The admin dashboard groups orders this way rather than by status.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MealWindow {
    /// Placed before 11:00
    Breakfast,
    /// Placed between 11:00 and 15:59
    Lunch,
    /// Placed at 16:00 or later
    Dinner,
}

impl MealWindow {
    /// Classifies a placement timestamp into its meal window.
    #[must_use]
    pub fn classify(placed_at: DateTime<Utc>) -> Self {
        match placed_at.hour() {
            0..=10 => Self::Breakfast,
            11..=15 => Self::Lunch,
            _ => Self::Dinner,
        }
    }
}

/// Per-meal-window order counts for the admin dashboard.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MealWindowSummary {
    /// Orders placed in the breakfast window
    pub breakfast: u64,
    /// Orders placed in the lunch window
    pub lunch: u64,
    /// Orders placed in the dinner window
    pub dinner: u64,
    /// All orders counted
    pub total: u64,
}

/// Places a new order in `pending` status.
///
/// # Errors
/// Returns an error if:
/// - The order window is closed (the configured message is surfaced)
/// - The user id, item list, or a delivery field is empty
/// - The total is not strictly positive and finite
/// - The database insert fails
pub async fn place_order(
    db: &DatabaseConnection,
    user_id: String,
    menu_items: Vec<String>,
    selected_portion: PortionSize,
    selected_add_on: Option<String>,
    total: f64,
    delivery: DeliveryDetails,
) -> Result<order::Model> {
    let menu = crate::core::menu::get_or_create_menu(db).await?;
    if !menu.is_ordering_enabled {
        return Err(Error::OrderingClosed {
            message: menu.order_window_message,
        });
    }

    if user_id.trim().is_empty() {
        return Err(Error::Validation {
            message: "Order must carry a user id".to_string(),
        });
    }

    if menu_items.is_empty() || menu_items.iter().any(|item| item.trim().is_empty()) {
        return Err(Error::Validation {
            message: "Order must contain at least one menu item".to_string(),
        });
    }

    if total <= 0.0 || !total.is_finite() {
        return Err(Error::InvalidAmount { amount: total });
    }

    for (field, value) in [
        ("delivery address", &delivery.address),
        ("delivery city", &delivery.city),
        ("contact phone", &delivery.phone),
    ] {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                message: format!("Order is missing the {field}"),
            });
        }
    }

    let model = order::ActiveModel {
        user_id: Set(user_id),
        menu_items: Set(serde_json::json!(menu_items)),
        selected_portion: Set(selected_portion),
        selected_add_on: Set(selected_add_on),
        total: Set(total),
        delivery_address: Set(delivery.address),
        delivery_city: Set(delivery.city),
        delivery_postal_code: Set(delivery.postal_code),
        contact_phone: Set(delivery.phone),
        status: Set(OrderStatus::Pending),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Finds an order by its unique ID.
pub async fn get_order_by_id(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<Option<order::Model>> {
    Order::find_by_id(order_id).one(db).await.map_err(Into::into)
}

/// Retrieves all orders placed by a user, newest first.
pub async fn get_orders_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<order::Model>> {
    Order::find()
        .filter(order::Column::UserId.eq(user_id))
        .order_by_desc(order::Column::CreatedAt)
        .order_by_desc(order::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every order, newest first. Used by the admin dashboard.
pub async fn get_all_orders(db: &DatabaseConnection) -> Result<Vec<order::Model>> {
    Order::find()
        .order_by_desc(order::Column::CreatedAt)
        .order_by_desc(order::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Moves an order to a new status, enforcing the transition table.
///
/// # Errors
/// Returns an error if the order does not exist, the transition is not a
/// legal edge (including self-transitions and anything out of a terminal
/// state), or the database update fails.
pub async fn update_order_status(
    db: &DatabaseConnection,
    order_id: i64,
    next: OrderStatus,
) -> Result<order::Model> {
    let order = get_order_by_id(db, order_id)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;

    if !order.status.can_transition_to(next) {
        return Err(Error::InvalidStatusTransition {
            from: order.status,
            to: next,
        });
    }

    let mut active_model: order::ActiveModel = order.into();
    active_model.status = Set(next);
    active_model.update(db).await.map_err(Into::into)
}

/// Counts all orders per meal window for the admin dashboard.
pub async fn summarize_orders_by_meal_window(
    db: &DatabaseConnection,
) -> Result<MealWindowSummary> {
    let orders = Order::find().all(db).await?;

    let mut summary = MealWindowSummary::default();
    for order in &orders {
        match MealWindow::classify(order.created_at) {
            MealWindow::Breakfast => summary.breakfast += 1,
            MealWindow::Lunch => summary.lunch += 1,
            MealWindow::Dinner => summary.dinner += 1,
        }
    }
    summary.total = summary.breakfast + summary.lunch + summary.dinner;

    Ok(summary)
}
