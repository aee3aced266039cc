//! Attendance business logic - Daily attendance marking for staff.
//!
//! One record per employee per calendar day. Marking validates that the
//! employee exists and is active, and that no record already exists for the
//! day; the composite unique index on (`employee_id`, date) is the backstop
//! under concurrent requests. Hours worked are derived from the "HH:MM"
//! check-in/check-out strings only for `present` days.

use crate::{
    entities::{
        Attendance, Employee,
        attendance::{self, AttendanceStatus},
        employee::EmployeeStatus,
    },
    errors::{Error, Result},
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Derives hours worked from check-in/check-out times.
///
/// Returns a value only when the status is `present`, both times parse as
/// "HH:MM", and the check-out is strictly after the check-in; anything else
/// yields `None` rather than an error, matching how the original treats
/// partial time data.
#[must_use]
pub fn compute_hours_worked(
    status: AttendanceStatus,
    check_in: Option<&str>,
    check_out: Option<&str>,
) -> Option<f64> {
    if status != AttendanceStatus::Present {
        return None;
    }

    let check_in = NaiveTime::parse_from_str(check_in?, "%H:%M").ok()?;
    let check_out = NaiveTime::parse_from_str(check_out?, "%H:%M").ok()?;

    if check_out <= check_in {
        return None;
    }

    let minutes = check_out.signed_duration_since(check_in).num_minutes();
    // Minutes per day fit f64 exactly
    #[allow(clippy::cast_precision_loss)]
    let hours = minutes as f64 / 60.0;
    Some(hours)
}

/// Marks attendance for an employee on a given date.
///
/// # Errors
/// Returns an error if:
/// - The employee does not exist
/// - The employee is not active
/// - A record already exists for this employee and date (conflict)
/// - The database insert fails
pub async fn mark_attendance(
    db: &DatabaseConnection,
    employee_id: i64,
    date: NaiveDate,
    status: AttendanceStatus,
    check_in_time: Option<String>,
    check_out_time: Option<String>,
    marked_by: Option<String>,
) -> Result<attendance::Model> {
    let employee = Employee::find_by_id(employee_id)
        .one(db)
        .await?
        .ok_or(Error::EmployeeNotFound { id: employee_id })?;

    if employee.status != EmployeeStatus::Active {
        return Err(Error::EmployeeInactive { id: employee_id });
    }

    // Pre-check for a friendlier error; the composite unique index is the
    // backstop under concurrent requests.
    let existing = Attendance::find()
        .filter(attendance::Column::EmployeeId.eq(employee_id))
        .filter(attendance::Column::Date.eq(date))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::AttendanceAlreadyMarked { employee_id, date });
    }

    let hours_worked =
        compute_hours_worked(status, check_in_time.as_deref(), check_out_time.as_deref());

    let model = attendance::ActiveModel {
        employee_id: Set(employee_id),
        date: Set(date),
        status: Set(status),
        check_in_time: Set(check_in_time),
        check_out_time: Set(check_out_time),
        hours_worked: Set(hours_worked),
        marked_by: Set(marked_by),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Retrieves all attendance records for an employee, newest first.
pub async fn get_attendance_for_employee(
    db: &DatabaseConnection,
    employee_id: i64,
) -> Result<Vec<attendance::Model>> {
    Attendance::find()
        .filter(attendance::Column::EmployeeId.eq(employee_id))
        .order_by_desc(attendance::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all attendance records for a calendar day.
pub async fn get_attendance_by_date(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<Vec<attendance::Model>> {
    Attendance::find()
        .filter(attendance::Column::Date.eq(date))
        .order_by_asc(attendance::Column::EmployeeId)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::{core::employee::update_employee, test_utils::*};

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn test_compute_hours_worked_present() {
        let hours =
            compute_hours_worked(AttendanceStatus::Present, Some("09:00"), Some("17:30"));
        assert_eq!(hours, Some(8.5));

        let hours =
            compute_hours_worked(AttendanceStatus::Present, Some("08:15"), Some("12:15"));
        assert_eq!(hours, Some(4.0));
    }

    #[test]
    fn test_compute_hours_worked_non_present_statuses() {
        for status in [
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
            AttendanceStatus::HalfDay,
            AttendanceStatus::SickLeave,
            AttendanceStatus::Vacation,
        ] {
            assert_eq!(
                compute_hours_worked(status, Some("09:00"), Some("17:00")),
                None
            );
        }
    }

    #[test]
    fn test_compute_hours_worked_bad_times() {
        // Checkout before checkin
        assert_eq!(
            compute_hours_worked(AttendanceStatus::Present, Some("17:00"), Some("09:00")),
            None
        );
        // Checkout equal to checkin
        assert_eq!(
            compute_hours_worked(AttendanceStatus::Present, Some("09:00"), Some("09:00")),
            None
        );
        // Missing or malformed times
        assert_eq!(
            compute_hours_worked(AttendanceStatus::Present, None, Some("17:00")),
            None
        );
        assert_eq!(
            compute_hours_worked(AttendanceStatus::Present, Some("9 am"), Some("17:00")),
            None
        );
    }

    #[tokio::test]
    async fn test_mark_attendance_integration() -> Result<()> {
        let (db, employee) = setup_with_employee().await?;

        let record = mark_attendance(
            &db,
            employee.id,
            june(2),
            AttendanceStatus::Present,
            Some("09:00".to_string()),
            Some("17:30".to_string()),
            Some("admin".to_string()),
        )
        .await?;

        assert_eq!(record.employee_id, employee.id);
        assert_eq!(record.status, AttendanceStatus::Present);
        assert_eq!(record.hours_worked, Some(8.5));
        assert_eq!(record.marked_by, Some("admin".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn test_mark_attendance_twice_same_day_rejected() -> Result<()> {
        let (db, employee) = setup_with_employee().await?;

        mark_attendance(
            &db,
            employee.id,
            june(2),
            AttendanceStatus::Present,
            Some("09:00".to_string()),
            Some("17:00".to_string()),
            None,
        )
        .await?;

        // Second mark for the same day fails, regardless of status
        let result = mark_attendance(
            &db,
            employee.id,
            june(2),
            AttendanceStatus::Late,
            None,
            None,
            None,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::AttendanceAlreadyMarked { .. }
        ));

        // A different day is fine
        let next_day = mark_attendance(
            &db,
            employee.id,
            june(3),
            AttendanceStatus::Absent,
            None,
            None,
            None,
        )
        .await?;
        assert_eq!(next_day.hours_worked, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_mark_attendance_inactive_employee_rejected() -> Result<()> {
        let (db, employee) = setup_with_employee().await?;

        update_employee(
            &db,
            employee.id,
            None,
            None,
            None,
            None,
            Some(EmployeeStatus::Terminated),
        )
        .await?;

        let result = mark_attendance(
            &db,
            employee.id,
            june(2),
            AttendanceStatus::Present,
            None,
            None,
            None,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::EmployeeInactive { .. }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_mark_attendance_unknown_employee() -> Result<()> {
        let db = setup_test_db().await?;

        let result = mark_attendance(
            &db,
            999,
            june(2),
            AttendanceStatus::Present,
            None,
            None,
            None,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::EmployeeNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_attendance_queries() -> Result<()> {
        let db = setup_test_db().await?;

        let kasun = create_test_employee(&db, "Kasun Perera", "kasun@rajapakshafoods.lk").await?;
        let nimal = create_test_employee(&db, "Nimal Silva", "nimal@rajapakshafoods.lk").await?;

        mark_attendance(&db, kasun.id, june(2), AttendanceStatus::Present, None, None, None)
            .await?;
        mark_attendance(&db, kasun.id, june(3), AttendanceStatus::Late, None, None, None).await?;
        mark_attendance(&db, nimal.id, june(2), AttendanceStatus::Absent, None, None, None)
            .await?;

        // Per-employee history, newest first
        let history = get_attendance_for_employee(&db, kasun.id).await?;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].date, june(3));
        assert_eq!(history[1].date, june(2));

        // Per-day view covers both employees
        let day = get_attendance_by_date(&db, june(2)).await?;
        assert_eq!(day.len(), 2);

        Ok(())
    }
}
