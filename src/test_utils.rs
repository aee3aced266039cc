//! Shared test utilities for the Rajapaksha Foods backend.
//!
//! This module provides common helper functions for setting up test
//! databases and creating test entities with sensible defaults.

use crate::{
    core::{employee, inventory, order, user},
    entities::{
        self,
        employee::EmployeePosition,
        inventory_item::{InventoryCategory, InventoryUnit},
        order::{OrderStatus, PortionSize},
    },
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Test database with the order window already open, for order and review
/// tests that need placement to succeed.
pub async fn setup_test_db_with_open_menu() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    crate::core::menu::set_order_window(&db, true, None).await?;
    Ok(db)
}

/// Creates a test employee with sensible defaults.
///
/// # Defaults
/// * `phone`: "0771234567"
/// * `position`: chef
/// * `salary`: 85000.0
/// * `hire_date`: 2024-01-15
pub async fn create_test_employee(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
) -> Result<entities::employee::Model> {
    employee::create_employee(
        db,
        name.to_string(),
        email.to_string(),
        "0771234567".to_string(),
        EmployeePosition::Chef,
        85_000.0,
        chrono::NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
    )
    .await
}

/// Sets up a complete test environment with one employee.
/// Returns (db, employee) for common test scenarios.
pub async fn setup_with_employee() -> Result<(DatabaseConnection, entities::employee::Model)> {
    let db = setup_test_db().await?;
    let employee = create_test_employee(&db, "Kasun Perera", "kasun@rajapakshafoods.lk").await?;
    Ok((db, employee))
}

/// Creates a test inventory item with sensible defaults.
///
/// # Defaults
/// * `category`: grains
/// * `current_stock`: 20.0, `min`: 5.0, `max`: 50.0
/// * `unit`: kg
/// * `cost_per_unit`: 250.0
pub async fn create_test_inventory_item(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::inventory_item::Model> {
    inventory::create_item(
        db,
        name.to_string(),
        InventoryCategory::Grains,
        20.0,
        5.0,
        50.0,
        InventoryUnit::Kg,
        250.0,
    )
    .await
}

/// Creates a test inventory item with custom parameters.
/// Use this when thresholds or units matter to the test.
#[allow(clippy::too_many_arguments)]
pub async fn create_custom_inventory_item(
    db: &DatabaseConnection,
    name: &str,
    category: InventoryCategory,
    current_stock: f64,
    min_stock_level: f64,
    max_stock_level: f64,
    unit: InventoryUnit,
    cost_per_unit: f64,
) -> Result<entities::inventory_item::Model> {
    inventory::create_item(
        db,
        name.to_string(),
        category,
        current_stock,
        min_stock_level,
        max_stock_level,
        unit,
        cost_per_unit,
    )
    .await
}

/// Sets up a complete test environment with one inventory item.
/// Returns (db, item) for stock-related tests.
pub async fn setup_with_inventory_item()
-> Result<(DatabaseConnection, entities::inventory_item::Model)> {
    let db = setup_test_db().await?;
    let item = create_test_inventory_item(&db, "Basmati Rice").await?;
    Ok((db, item))
}

/// Standard delivery details used by order tests.
pub fn test_delivery_details() -> order::DeliveryDetails {
    order::DeliveryDetails {
        address: "12 Temple Road".to_string(),
        city: "Kandy".to_string(),
        postal_code: Some("20000".to_string()),
        phone: "0771234567".to_string(),
    }
}

/// Creates a test order with sensible defaults. The order window must be
/// open (see [`setup_test_db_with_open_menu`]).
///
/// # Defaults
/// * `menu_items`: ["Chicken Rice & Curry"]
/// * `portion`: full
/// * `total`: 850.0
pub async fn create_test_order(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entities::order::Model> {
    order::place_order(
        db,
        user_id.to_string(),
        vec!["Chicken Rice & Curry".to_string()],
        PortionSize::Full,
        None,
        850.0,
        test_delivery_details(),
    )
    .await
}

/// Walks an order through the full lifecycle to `completed`.
pub async fn complete_order(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<entities::order::Model> {
    order::update_order_status(db, order_id, OrderStatus::InProgress).await?;
    order::update_order_status(db, order_id, OrderStatus::OnTheWay).await?;
    order::update_order_status(db, order_id, OrderStatus::Completed).await
}

/// Creates a mirrored test user with sensible defaults.
///
/// # Defaults
/// * `name`: "Test User"
/// * `email`: derived from the clerk id
pub async fn create_test_user(
    db: &DatabaseConnection,
    clerk_id: &str,
) -> Result<entities::user::Model> {
    user::upsert_from_identity(
        db,
        clerk_id.to_string(),
        "Test User".to_string(),
        format!("{clerk_id}@example.com"),
    )
    .await
}
