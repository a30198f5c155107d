//! Attendance records and statuses.
//!
//! An attendance record classifies one employee-day and carries any
//! overtime worked on that day.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of a single employee-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    /// A full working day.
    Present,
    /// Half a working day; incurs the half-day deduction.
    HalfDay,
    /// Paid leave; no deduction.
    Leave,
    /// Unpaid absence; incurs the no-pay deduction.
    NoPay,
}

impl AttendanceStatus {
    /// Every status, in declaration order.
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::HalfDay,
        AttendanceStatus::Leave,
        AttendanceStatus::NoPay,
    ];

    /// Returns the wire name of the status (e.g. `"HALF_DAY"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "PRESENT",
            AttendanceStatus::HalfDay => "HALF_DAY",
            AttendanceStatus::Leave => "LEAVE",
            AttendanceStatus::NoPay => "NO_PAY",
        }
    }

    /// Returns the human-readable label shown on reports.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::HalfDay => "Half_day",
            AttendanceStatus::Leave => "Leave(absent)",
            AttendanceStatus::NoPay => "No-pay",
        }
    }

    /// Returns true if overtime may be recorded against this status.
    ///
    /// Creating an entry with any other status stores zero overtime, as
    /// does updating an entry to another status. An update that supplies
    /// only overtime hours is applied whatever the stored status.
    pub fn allows_overtime(&self) -> bool {
        matches!(self, AttendanceStatus::Present)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted attendance entry for one employee on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Store-assigned identifier.
    pub id: u64,
    /// The employee this entry belongs to.
    pub employee_id: String,
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
    /// Overtime hours worked on the day (never negative).
    pub overtime_hours: Decimal,
}

/// Input for creating an attendance entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendance {
    /// The employee the entry is for.
    pub employee_id: String,
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// The attendance status for the day.
    pub status: AttendanceStatus,
    /// Overtime hours; defaults to zero when omitted.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
}

impl NewAttendance {
    /// Returns the overtime that will actually be stored.
    ///
    /// Statuses other than `PRESENT` always store zero overtime, and an
    /// omitted value is treated as zero.
    ///
    /// # Example
    ///
    /// ```
    /// use hr_payroll::models::{AttendanceStatus, NewAttendance};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let entry = NewAttendance {
    ///     employee_id: "ENGI1".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
    ///     status: AttendanceStatus::HalfDay,
    ///     overtime_hours: Some(Decimal::new(3, 0)),
    /// };
    /// assert_eq!(entry.effective_overtime_hours(), Decimal::ZERO);
    /// ```
    pub fn effective_overtime_hours(&self) -> Decimal {
        if self.status.allows_overtime() {
            self.overtime_hours.unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        }
    }
}

/// Partial update of an attendance entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceUpdate {
    /// Replacement status, if any.
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
    /// Replacement overtime hours, if any.
    #[serde(default)]
    pub overtime_hours: Option<Decimal>,
}

impl AttendanceUpdate {
    /// Applies the update to an existing record.
    ///
    /// A new status that disallows overtime zeroes the overtime regardless
    /// of any supplied value. Without a new status, supplied hours replace
    /// the stored ones even on a LEAVE, HALF_DAY or NO_PAY entry.
    pub fn apply_to(&self, record: &mut AttendanceRecord) {
        if let Some(status) = self.status {
            record.status = status;
        }

        match self.status {
            Some(status) if !status.allows_overtime() => {
                record.overtime_hours = Decimal::ZERO;
            }
            _ => {
                if let Some(hours) = self.overtime_hours {
                    record.overtime_hours = hours;
                }
            }
        }
    }
}
