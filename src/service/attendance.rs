//! Attendance recording and queries.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::access::{ATTENDANCE_MANAGERS, Caller};
use crate::error::{HrError, HrResult};
use crate::models::{
    AttendanceRecord, AttendanceStatus, AttendanceUpdate, DateRange, NewAttendance,
};
use crate::store::{AttendanceStore, DepartmentStore, EmployeeStore};

/// Records attendance and answers attendance queries.
#[derive(Clone)]
pub struct AttendanceService {
    attendance: Arc<dyn AttendanceStore>,
    employees: Arc<dyn EmployeeStore>,
    departments: Arc<dyn DepartmentStore>,
}

fn validate_overtime(hours: Option<Decimal>) -> HrResult<()> {
    match hours {
        Some(h) if h < Decimal::ZERO => Err(HrError::InvalidAttendance {
            message: format!("overtime hours must not be negative, got {}", h),
        }),
        _ => Ok(()),
    }
}

impl AttendanceService {
    /// Creates the service over the given stores.
    pub fn new(
        attendance: Arc<dyn AttendanceStore>,
        employees: Arc<dyn EmployeeStore>,
        departments: Arc<dyn DepartmentStore>,
    ) -> Self {
        Self {
            attendance,
            employees,
            departments,
        }
    }

    async fn require_employee(&self, employee_id: &str) -> HrResult<()> {
        if self.employees.exists(employee_id).await? {
            Ok(())
        } else {
            Err(HrError::EmployeeNotFound {
                id: employee_id.to_string(),
            })
        }
    }

    /// Records one employee's attendance for one day.
    ///
    /// Only ADMIN and HR may record attendance. Overtime on statuses other
    /// than PRESENT is stored as zero.
    ///
    /// # Errors
    ///
    /// - [`HrError::Forbidden`] for other roles
    /// - [`HrError::InvalidAttendance`] for negative overtime
    /// - [`HrError::EmployeeNotFound`]
    /// - [`HrError::AttendanceAlreadyExists`] if the day is already recorded
    pub async fn create_attendance(
        &self,
        caller: &Caller,
        attendance: NewAttendance,
    ) -> HrResult<AttendanceRecord> {
        caller.require_any_role(ATTENDANCE_MANAGERS, "record attendance")?;
        validate_overtime(attendance.overtime_hours)?;
        self.require_employee(&attendance.employee_id).await?;

        match self.attendance.insert(attendance).await {
            Ok(record) => {
                info!(
                    attendance_id = record.id,
                    employee_id = %record.employee_id,
                    date = %record.date,
                    status = %record.status,
                    recorded_by = %caller.employee_id,
                    "Attendance recorded"
                );
                Ok(record)
            }
            Err(err) => {
                warn!(error = %err, "Failed to record attendance");
                Err(err)
            }
        }
    }

    /// Corrects the status or overtime of an existing entry.
    ///
    /// Moving to a status other than PRESENT zeroes the overtime.
    pub async fn update_attendance(
        &self,
        caller: &Caller,
        id: u64,
        update: AttendanceUpdate,
    ) -> HrResult<AttendanceRecord> {
        caller.require_any_role(ATTENDANCE_MANAGERS, "update attendance")?;
        validate_overtime(update.overtime_hours)?;

        let mut record =
            self.attendance
                .find_by_id(id)
                .await?
                .ok_or_else(|| HrError::AttendanceNotFound {
                    reference: format!("id {}", id),
                })?;
        update.apply_to(&mut record);

        let record = self.attendance.update(record).await?;
        info!(
            attendance_id = record.id,
            status = %record.status,
            overtime_hours = %record.overtime_hours,
            updated_by = %caller.employee_id,
            "Attendance updated"
        );
        Ok(record)
    }

    /// Lists every entry on a date.
    pub async fn get_attendance_by_date(&self, date: NaiveDate) -> HrResult<Vec<AttendanceRecord>> {
        debug!(date = %date, "Listing attendance by date");
        self.attendance.find_by_date(date).await
    }

    /// Gets one employee's entry on one date.
    pub async fn get_attendance_by_employee_and_date(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> HrResult<AttendanceRecord> {
        self.require_employee(employee_id).await?;
        self.attendance
            .find_by_employee_and_date(employee_id, date)
            .await?
            .ok_or_else(|| HrError::AttendanceNotFound {
                reference: format!("employee id {} on date {}", employee_id, date),
            })
    }

    /// Lists entries on a date with the given status.
    pub async fn get_attendance_by_date_and_status(
        &self,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> HrResult<Vec<AttendanceRecord>> {
        debug!(date = %date, status = %status, "Listing attendance by date and status");
        self.attendance.find_by_date_and_status(date, status).await
    }

    /// Lists entries on a date for the employees of one department.
    pub async fn get_attendance_by_date_and_department(
        &self,
        date: NaiveDate,
        department_id: &str,
    ) -> HrResult<Vec<AttendanceRecord>> {
        if self.departments.find_by_id(department_id).await?.is_none() {
            return Err(HrError::DepartmentNotFound {
                id: department_id.to_string(),
            });
        }

        let members: HashSet<String> = self
            .employees
            .find_by_department(department_id)
            .await?
            .into_iter()
            .map(|e| e.id)
            .collect();

        let records = self.attendance.find_by_date(date).await?;
        Ok(records
            .into_iter()
            .filter(|r| members.contains(&r.employee_id))
            .collect())
    }

    /// Lists an employee's entries with `start <= date <= end`.
    pub async fn get_attendance_by_employee_and_range(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> HrResult<Vec<AttendanceRecord>> {
        self.require_employee(employee_id).await?;
        let range = DateRange::new(start, end)?;
        self.attendance
            .find_by_employee_and_range(employee_id, range.start_date, range.end_date)
            .await
    }

    /// Lists an employee's entries in a range that have the given status.
    pub async fn get_attendance_by_employee_range_and_status(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        status: AttendanceStatus,
    ) -> HrResult<Vec<AttendanceRecord>> {
        self.require_employee(employee_id).await?;
        let range = DateRange::new(start, end)?;
        self.attendance
            .find_by_employee_range_and_status(
                employee_id,
                range.start_date,
                range.end_date,
                status,
            )
            .await
    }
}
