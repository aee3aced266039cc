//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Tables
//! are generated from the entity definitions via
//! `Schema::create_table_from_entity`, so the database schema always matches
//! the Rust struct definitions without manual SQL. The composite unique
//! index on attendance is created separately - column-level `unique`
//! attributes cover the single-column constraints, but the one-record-per-
//! employee-per-day rule spans two columns.

use crate::entities::{
    Attendance, ContactMessage, Employee, InventoryItem, Menu, Order, Review, StockUpdate, User,
    attendance,
};
use crate::errors::Result;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, Schema,
    sea_query::Index,
};

/// Establishes a connection to the database named by `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all tables and indexes from the entity definitions.
///
/// Statements carry `IF NOT EXISTS`, so calling this on every start is safe
/// and the first start bootstraps the schema.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut employee_table = schema.create_table_from_entity(Employee);
    let mut attendance_table = schema.create_table_from_entity(Attendance);
    let mut inventory_table = schema.create_table_from_entity(InventoryItem);
    let mut stock_update_table = schema.create_table_from_entity(StockUpdate);
    let mut menu_table = schema.create_table_from_entity(Menu);
    let mut order_table = schema.create_table_from_entity(Order);
    let mut review_table = schema.create_table_from_entity(Review);
    let mut user_table = schema.create_table_from_entity(User);
    let mut contact_table = schema.create_table_from_entity(ContactMessage);

    db.execute(builder.build(employee_table.if_not_exists())).await?;
    db.execute(builder.build(attendance_table.if_not_exists())).await?;
    db.execute(builder.build(inventory_table.if_not_exists())).await?;
    db.execute(builder.build(stock_update_table.if_not_exists())).await?;
    db.execute(builder.build(menu_table.if_not_exists())).await?;
    db.execute(builder.build(order_table.if_not_exists())).await?;
    db.execute(builder.build(review_table.if_not_exists())).await?;
    db.execute(builder.build(user_table.if_not_exists())).await?;
    db.execute(builder.build(contact_table.if_not_exists())).await?;

    // One attendance record per employee per day
    let attendance_unique = Index::create()
        .name("idx_attendance_employee_date")
        .table(Attendance)
        .col(attendance::Column::EmployeeId)
        .col(attendance::Column::Date)
        .unique()
        .if_not_exists()
        .to_owned();
    db.execute(builder.build(&attendance_unique)).await?;

    Ok(())
}
