//! Salary requests and salary snapshots.
//!
//! A [`SalaryRecord`] is an immutable, point-in-time result of one salary
//! computation. Recomputing for the same employee and range produces a new
//! record rather than updating an old one.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DateRange;
use crate::error::HrResult;

/// Input to a salary computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// The employee to compute salary for.
    pub employee_id: String,
    /// The department whose pay parameters apply.
    pub department_id: String,
    /// First date of the aggregation window (inclusive).
    pub start_date: NaiveDate,
    /// Last date of the aggregation window (inclusive).
    pub end_date: NaiveDate,
    /// Caller-supplied bonus in whole currency units.
    #[serde(default)]
    pub bonus: i64,
}

impl SalaryRequest {
    /// Validates and returns the aggregation window.
    pub fn date_range(&self) -> HrResult<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// A fully computed salary that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryDraft {
    /// The employee the salary is for.
    pub employee_id: String,
    /// The department whose pay parameters were applied.
    pub department_id: String,
    /// First date of the aggregation window.
    pub start_date: NaiveDate,
    /// Last date of the aggregation window.
    pub end_date: NaiveDate,
    /// Department base salary at computation time.
    pub base_salary: i64,
    /// Number of PRESENT days.
    pub days_present: u32,
    /// Number of LEAVE days.
    pub days_leave: u32,
    /// Number of HALF_DAY days.
    pub days_half_day: u32,
    /// Number of NO_PAY days.
    pub days_no_pay: u32,
    /// Overtime hours summed over every entry in the window.
    pub overtime_hours: Decimal,
    /// Department overtime rate at computation time.
    pub overtime_rate: i64,
    /// Overtime pay, truncated to whole currency units.
    pub overtime_pay: i64,
    /// Total deduction for HALF_DAY and NO_PAY days.
    pub deduction: i64,
    /// Caller-supplied bonus.
    pub bonus: i64,
    /// `base_salary - deduction + overtime_pay + bonus`.
    pub total_salary: i64,
    /// When the computation ran.
    pub computed_at: DateTime<Utc>,
}

impl SalaryDraft {
    /// Attaches the store-assigned id.
    pub fn into_record(self, id: u64) -> SalaryRecord {
        SalaryRecord {
            id,
            employee_id: self.employee_id,
            department_id: self.department_id,
            start_date: self.start_date,
            end_date: self.end_date,
            base_salary: self.base_salary,
            days_present: self.days_present,
            days_leave: self.days_leave,
            days_half_day: self.days_half_day,
            days_no_pay: self.days_no_pay,
            overtime_hours: self.overtime_hours,
            overtime_rate: self.overtime_rate,
            overtime_pay: self.overtime_pay,
            deduction: self.deduction,
            bonus: self.bonus,
            total_salary: self.total_salary,
            computed_at: self.computed_at,
        }
    }
}

/// A persisted salary snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Store-assigned identifier.
    pub id: u64,
    /// The employee the salary is for.
    pub employee_id: String,
    /// The department whose pay parameters were applied.
    pub department_id: String,
    /// First date of the aggregation window.
    pub start_date: NaiveDate,
    /// Last date of the aggregation window.
    pub end_date: NaiveDate,
    /// Department base salary at computation time.
    pub base_salary: i64,
    /// Number of PRESENT days.
    pub days_present: u32,
    /// Number of LEAVE days.
    pub days_leave: u32,
    /// Number of HALF_DAY days.
    pub days_half_day: u32,
    /// Number of NO_PAY days.
    pub days_no_pay: u32,
    /// Overtime hours summed over every entry in the window.
    pub overtime_hours: Decimal,
    /// Department overtime rate at computation time.
    pub overtime_rate: i64,
    /// Overtime pay, truncated to whole currency units.
    pub overtime_pay: i64,
    /// Total deduction for HALF_DAY and NO_PAY days.
    pub deduction: i64,
    /// Caller-supplied bonus.
    pub bonus: i64,
    /// `base_salary - deduction + overtime_pay + bonus`.
    pub total_salary: i64,
    /// When the computation ran.
    pub computed_at: DateTime<Utc>,
}

impl SalaryRecord {
    /// Returns the aggregation window of this snapshot.
    pub fn period(&self) -> DateRange {
        DateRange {
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    /// Total number of attendance entries that were tallied.
    pub fn days_recorded(&self) -> u32 {
        self.days_present + self.days_leave + self.days_half_day + self.days_no_pay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_draft() -> SalaryDraft {
        SalaryDraft {
            employee_id: "ENGI1".to_string(),
            department_id: "ENGI".to_string(),
            start_date: date(2025, 1, 1),
            end_date: date(2025, 1, 5),
            base_salary: 40000,
            days_present: 3,
            days_leave: 0,
            days_half_day: 1,
            days_no_pay: 1,
            overtime_hours: Decimal::new(25, 1),
            overtime_rate: 170,
            overtime_pay: 425,
            deduction: 3700,
            bonus: 1000,
            total_salary: 37725,
            computed_at: Utc::now(),
        }
    }

    #[test]
    fn test_deserialize_request_defaults_bonus_to_zero() {
        let json = r#"{
            "employee_id": "ENGI1",
            "department_id": "ENGI",
            "start_date": "2025-01-01",
            "end_date": "2025-01-31"
        }"#;
        let request: SalaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.bonus, 0);
        assert_eq!(request.date_range().unwrap().day_count(), 31);
    }

    #[test]
    fn test_request_with_reversed_dates_is_invalid() {
        let request = SalaryRequest {
            employee_id: "ENGI1".to_string(),
            department_id: "ENGI".to_string(),
            start_date: date(2025, 2, 1),
            end_date: date(2025, 1, 1),
            bonus: 0,
        };
        assert!(request.date_range().is_err());
    }

    #[test]
    fn test_into_record_keeps_every_field() {
        let draft = create_draft();
        let record = draft.clone().into_record(9);
        assert_eq!(record.id, 9);
        assert_eq!(record.total_salary, draft.total_salary);
        assert_eq!(record.overtime_hours, draft.overtime_hours);
        assert_eq!(record.computed_at, draft.computed_at);
        assert_eq!(record.days_recorded(), 5);
        assert_eq!(record.period().day_count(), 5);
    }

    #[test]
    fn test_serialize_record_uses_string_hours() {
        let record = create_draft().into_record(1);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"overtime_hours\":\"2.5\""));
        assert!(json.contains("\"total_salary\":37725"));
        assert!(json.contains("\"start_date\":\"2025-01-01\""));
    }
}
