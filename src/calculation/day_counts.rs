//! Attendance day tallies.
//!
//! This module partitions the attendance entries of a salary window by
//! status. The tallies feed both the deduction rule and the salary snapshot.

use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, AttendanceStatus, AuditStep};

/// Number of attendance entries per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCounts {
    /// PRESENT entries.
    pub present: u32,
    /// LEAVE entries.
    pub leave: u32,
    /// HALF_DAY entries.
    pub half_day: u32,
    /// NO_PAY entries.
    pub no_pay: u32,
}

impl DayCounts {
    /// Returns the count for a single status.
    pub fn get(&self, status: AttendanceStatus) -> u32 {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Leave => self.leave,
            AttendanceStatus::HalfDay => self.half_day,
            AttendanceStatus::NoPay => self.no_pay,
        }
    }

    /// Sum over every status.
    pub fn total(&self) -> u32 {
        self.present + self.leave + self.half_day + self.no_pay
    }

    fn record(&mut self, status: AttendanceStatus) {
        let slot = match status {
            AttendanceStatus::Present => &mut self.present,
            AttendanceStatus::Leave => &mut self.leave,
            AttendanceStatus::HalfDay => &mut self.half_day,
            AttendanceStatus::NoPay => &mut self.no_pay,
        };
        *slot += 1;
    }
}

/// The result of tallying attendance, including the audit step.
#[derive(Debug, Clone)]
pub struct DayCountResult {
    /// Entries per status.
    pub counts: DayCounts,
    /// The audit step recording this tally.
    pub audit_step: AuditStep,
}

/// Counts attendance entries per status.
///
/// Every entry lands in exactly one bucket, so `counts.total()` always
/// equals `records.len()`.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::tally_attendance;
/// use hr_payroll::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records: Vec<AttendanceRecord> = [AttendanceStatus::Present, AttendanceStatus::NoPay]
///     .into_iter()
///     .enumerate()
///     .map(|(i, status)| AttendanceRecord {
///         id: i as u64 + 1,
///         employee_id: "ENGI1".to_string(),
///         date: NaiveDate::from_ymd_opt(2025, 1, i as u32 + 1).unwrap(),
///         status,
///         overtime_hours: Decimal::ZERO,
///     })
///     .collect();
///
/// let result = tally_attendance(&records, 1);
/// assert_eq!(result.counts.present, 1);
/// assert_eq!(result.counts.no_pay, 1);
/// assert_eq!(result.counts.total(), 2);
/// ```
pub fn tally_attendance(records: &[AttendanceRecord], step_number: u32) -> DayCountResult {
    let mut counts = DayCounts::default();
    for record in records {
        counts.record(record.status);
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "attendance_tally".to_string(),
        rule_name: "Attendance Day Tally".to_string(),
        input: serde_json::json!({
            "entries": records.len()
        }),
        output: serde_json::json!({
            "days_present": counts.present,
            "days_leave": counts.leave,
            "days_half_day": counts.half_day,
            "days_no_pay": counts.no_pay
        }),
        reasoning: format!(
            "{} entries: {} present, {} leave, {} half day, {} no pay",
            records.len(),
            counts.present,
            counts.leave,
            counts.half_day,
            counts.no_pay
        ),
    };

    DayCountResult { counts, audit_step }
}
