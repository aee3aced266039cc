//! Employee and attendance endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Response,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    api::{AppState, response::{ApiResponse, message_only}},
    core,
    entities::{
        attendance::AttendanceStatus,
        employee::{EmployeePosition, EmployeeStatus},
    },
    errors::{Error, Result},
};

/// Request contract for creating an employee.
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Full name
    pub name: String,
    /// Contact email, unique
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Job position
    pub position: EmployeePosition,
    /// Monthly salary in rupees
    pub salary: f64,
    /// Hire date
    pub hire_date: NaiveDate,
}

/// Request contract for updating an employee; absent fields stay unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    /// New name
    #[serde(default)]
    pub name: Option<String>,
    /// New phone
    #[serde(default)]
    pub phone: Option<String>,
    /// New position
    #[serde(default)]
    pub position: Option<EmployeePosition>,
    /// New salary
    #[serde(default)]
    pub salary: Option<f64>,
    /// New employment status
    #[serde(default)]
    pub status: Option<EmployeeStatus>,
}

/// Request contract for marking attendance.
#[derive(Debug, Deserialize)]
pub struct MarkAttendanceRequest {
    /// Employee being marked
    pub employee_id: i64,
    /// Calendar day
    pub date: NaiveDate,
    /// Attendance status for the day
    pub status: AttendanceStatus,
    /// Check-in time as "HH:MM"
    #[serde(default)]
    pub check_in_time: Option<String>,
    /// Check-out time as "HH:MM"
    #[serde(default)]
    pub check_out_time: Option<String>,
    /// Who is marking the record
    #[serde(default)]
    pub marked_by: Option<String>,
}

/// Query contract for the attendance listing.
#[derive(Debug, Deserialize)]
pub struct AttendanceQuery {
    /// Restrict to one employee's history
    #[serde(default)]
    pub employee_id: Option<i64>,
    /// Restrict to one calendar day
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// `GET /api/employees`
pub async fn list_employees(State(state): State<AppState>) -> Result<Response> {
    let employees = core::employee::get_all_employees(&state.db).await?;
    Ok(ApiResponse::ok(employees))
}

/// `GET /api/employees/:id`
pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Response> {
    let employee = core::employee::get_employee_by_id(&state.db, employee_id)
        .await?
        .ok_or(Error::EmployeeNotFound { id: employee_id })?;
    Ok(ApiResponse::ok(employee))
}

/// `POST /api/employees`
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<Response> {
    let employee = core::employee::create_employee(
        &state.db,
        request.name,
        request.email,
        request.phone,
        request.position,
        request.salary,
        request.hire_date,
    )
    .await?;

    Ok(ApiResponse::created(employee))
}

/// `PUT /api/employees/:id`
pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
    Json(request): Json<UpdateEmployeeRequest>,
) -> Result<Response> {
    let employee = core::employee::update_employee(
        &state.db,
        employee_id,
        request.name,
        request.phone,
        request.position,
        request.salary,
        request.status,
    )
    .await?;

    Ok(ApiResponse::ok(employee))
}

/// `DELETE /api/employees/:id`
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<Response> {
    core::employee::delete_employee(&state.db, employee_id).await?;
    Ok(message_only("Employee and attendance records removed"))
}

/// `POST /api/employees/attendance`
pub async fn mark_attendance(
    State(state): State<AppState>,
    Json(request): Json<MarkAttendanceRequest>,
) -> Result<Response> {
    let record = core::attendance::mark_attendance(
        &state.db,
        request.employee_id,
        request.date,
        request.status,
        request.check_in_time,
        request.check_out_time,
        request.marked_by,
    )
    .await?;

    Ok(ApiResponse::created(record))
}

/// `GET /api/employees/attendance?employee_id=&date=`
pub async fn list_attendance(
    State(state): State<AppState>,
    Query(query): Query<AttendanceQuery>,
) -> Result<Response> {
    let records = match (query.employee_id, query.date) {
        (Some(employee_id), date) => {
            let mut records =
                core::attendance::get_attendance_for_employee(&state.db, employee_id).await?;
            if let Some(date) = date {
                records.retain(|record| record.date == date);
            }
            records
        }
        (None, Some(date)) => core::attendance::get_attendance_by_date(&state.db, date).await?,
        (None, None) => {
            return Err(Error::Validation {
                message: "Provide employee_id and/or date to filter attendance".to_string(),
            });
        }
    };

    Ok(ApiResponse::ok(records))
}
