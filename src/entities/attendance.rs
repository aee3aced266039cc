//! Attendance entity - Daily attendance records for employees.
//!
//! One record exists per employee per calendar day, enforced by a composite
//! unique index created alongside the tables. `hours_worked` is derived from
//! the check-in/check-out times when the status is `present`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Attendance database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    /// Unique identifier for the attendance record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the employee this record belongs to
    pub employee_id: i64,
    /// Calendar day the record covers
    pub date: Date,
    /// Attendance status for the day
    pub status: AttendanceStatus,
    /// Check-in time as "HH:MM", if recorded
    pub check_in_time: Option<String>,
    /// Check-out time as "HH:MM", if recorded
    pub check_out_time: Option<String>,
    /// Hours worked, derived from check-in/out when status is `present`
    pub hours_worked: Option<f64>,
    /// Who marked this record (admin identifier)
    pub marked_by: Option<String>,
}

/// Attendance status for a single day
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    /// Worked a full day
    #[sea_orm(string_value = "present")]
    Present,
    /// Did not come to work
    #[sea_orm(string_value = "absent")]
    Absent,
    /// Arrived late
    #[sea_orm(string_value = "late")]
    Late,
    /// Worked half a day
    #[sea_orm(string_value = "half-day")]
    HalfDay,
    /// Absent on sick leave
    #[sea_orm(string_value = "sick-leave")]
    SickLeave,
    /// Absent on vacation
    #[sea_orm(string_value = "vacation")]
    Vacation,
}

/// Defines relationships between Attendance and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each attendance record belongs to one employee
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
