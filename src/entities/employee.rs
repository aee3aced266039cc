//! Employee entity - Represents restaurant staff records.
//!
//! Each employee has contact details, a position from a closed set, a salary,
//! and an employment status. Email addresses are unique across all employees.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Employee database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Unique identifier for the employee
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Full name of the employee
    pub name: String,
    /// Contact email, unique across all employees
    #[sea_orm(unique)]
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Job position within the restaurant
    pub position: EmployeePosition,
    /// Monthly salary in rupees
    pub salary: f64,
    /// Date the employee was hired
    pub hire_date: Date,
    /// Current employment status
    pub status: EmployeeStatus,
}

/// Job positions available in the restaurant
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum EmployeePosition {
    /// Kitchen chef
    #[sea_orm(string_value = "chef")]
    Chef,
    /// Kitchen helper / prep staff
    #[sea_orm(string_value = "kitchen_helper")]
    KitchenHelper,
    /// Front-counter cashier
    #[sea_orm(string_value = "cashier")]
    Cashier,
    /// Delivery driver
    #[sea_orm(string_value = "delivery_driver")]
    DeliveryDriver,
    /// Shift or store manager
    #[sea_orm(string_value = "manager")]
    Manager,
    /// Cleaning staff
    #[sea_orm(string_value = "cleaner")]
    Cleaner,
}

/// Employment status of an employee
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed and working
    #[sea_orm(string_value = "active")]
    Active,
    /// Employed but not currently working (e.g., extended leave)
    #[sea_orm(string_value = "inactive")]
    Inactive,
    /// No longer employed
    #[sea_orm(string_value = "terminated")]
    Terminated,
}

/// Defines relationships between Employee and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One employee has many attendance records
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
