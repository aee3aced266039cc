//! Employee business logic - Handles all staff-related operations.
//!
//! Provides functions for creating, retrieving, updating, and removing
//! employees. Email uniqueness is checked up front with the database's
//! unique index as the backstop; deleting an employee also removes its
//! attendance records inside a single transaction.

use crate::{
    entities::{
        Attendance, Employee, attendance,
        employee::{self, EmployeePosition, EmployeeStatus},
    },
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Retrieves all employees, ordered alphabetically by name.
pub async fn get_all_employees(db: &DatabaseConnection) -> Result<Vec<employee::Model>> {
    Employee::find()
        .order_by_asc(employee::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an employee by its unique ID.
pub async fn get_employee_by_id(
    db: &DatabaseConnection,
    employee_id: i64,
) -> Result<Option<employee::Model>> {
    Employee::find_by_id(employee_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new employee with the specified parameters, performing input validation.
///
/// The email must be well-formed and not already in use; the salary must be
/// non-negative and finite. New employees start with `active` status.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or the email is malformed
/// - The salary is negative or not finite
/// - Another employee already uses the email (conflict)
/// - The database insert fails
pub async fn create_employee(
    db: &DatabaseConnection,
    name: String,
    email: String,
    phone: String,
    position: EmployeePosition,
    salary: f64,
    hire_date: NaiveDate,
) -> Result<employee::Model> {
    // Validate inputs
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Employee name cannot be empty".to_string(),
        });
    }

    if !super::email_is_valid(&email) {
        return Err(Error::Validation {
            message: format!("Invalid email address: {email}"),
        });
    }

    if salary < 0.0 || !salary.is_finite() {
        return Err(Error::InvalidAmount { amount: salary });
    }

    // Pre-check for a friendlier error; the unique index is the backstop
    // under concurrent creates.
    let existing = Employee::find()
        .filter(employee::Column::Email.eq(email.as_str()))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::DuplicateEmail { email });
    }

    let model = employee::ActiveModel {
        name: Set(name.trim().to_string()),
        email: Set(email),
        phone: Set(phone),
        position: Set(position),
        salary: Set(salary),
        hire_date: Set(hire_date),
        status: Set(EmployeeStatus::Active),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Updates an existing employee, applying only the provided fields.
///
/// # Errors
/// Returns an error if the employee does not exist, a provided salary is
/// invalid, or the database update fails.
pub async fn update_employee(
    db: &DatabaseConnection,
    employee_id: i64,
    name: Option<String>,
    phone: Option<String>,
    position: Option<EmployeePosition>,
    salary: Option<f64>,
    status: Option<EmployeeStatus>,
) -> Result<employee::Model> {
    let employee = Employee::find_by_id(employee_id)
        .one(db)
        .await?
        .ok_or(Error::EmployeeNotFound { id: employee_id })?;

    if let Some(salary) = salary {
        if salary < 0.0 || !salary.is_finite() {
            return Err(Error::InvalidAmount { amount: salary });
        }
    }

    if let Some(ref name) = name {
        if name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Employee name cannot be empty".to_string(),
            });
        }
    }

    let mut active_model: employee::ActiveModel = employee.into();
    if let Some(name) = name {
        active_model.name = Set(name.trim().to_string());
    }
    if let Some(phone) = phone {
        active_model.phone = Set(phone);
    }
    if let Some(position) = position {
        active_model.position = Set(position);
    }
    if let Some(salary) = salary {
        active_model.salary = Set(salary);
    }
    if let Some(status) = status {
        active_model.status = Set(status);
    }

    active_model.update(db).await.map_err(Into::into)
}

/// Deletes an employee together with all of its attendance records.
///
/// The cascade is application-level, not database-enforced, so both deletes
/// run inside one transaction.
///
/// # Errors
/// Returns an error if the employee does not exist or a delete fails.
pub async fn delete_employee(db: &DatabaseConnection, employee_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let employee = Employee::find_by_id(employee_id)
        .one(&txn)
        .await?
        .ok_or(Error::EmployeeNotFound { id: employee_id })?;

    Attendance::delete_many()
        .filter(attendance::Column::EmployeeId.eq(employee_id))
        .exec(&txn)
        .await?;

    employee.delete(&txn).await?;

    txn.commit().await?;
    Ok(())
}
