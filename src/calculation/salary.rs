//! Full salary calculation for one aggregation window.
//!
//! [`calculate_salary`] chains the individual rules in order and collects
//! their audit steps into an [`AuditTrace`]. It is pure: the caller fetches
//! the attendance and department data and persists the result.

use std::time::Instant;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::{
    DayCounts, DeductionPolicy, calculate_deduction, calculate_overtime_pay,
    calculate_total_salary, tally_attendance, total_overtime_hours,
};
use crate::error::HrResult;
use crate::models::{
    AttendanceRecord, AuditStep, AuditTrace, AuditWarning, DateRange, DepartmentPayConfig,
    SalaryDraft,
};

/// Warning code for overtime logged on a day whose status does not allow it.
pub const OVERTIME_ON_NON_PRESENT_DAY: &str = "OVERTIME_ON_NON_PRESENT_DAY";

/// Every figure that goes into a salary snapshot.
#[derive(Debug, Clone)]
pub struct SalaryBreakdown {
    /// Department base salary.
    pub base_salary: i64,
    /// Department overtime rate.
    pub overtime_rate: i64,
    /// Attendance entries per status.
    pub counts: DayCounts,
    /// Overtime hours summed over every entry.
    pub overtime_hours: Decimal,
    /// Truncated overtime pay.
    pub overtime_pay: i64,
    /// Deduction for HALF_DAY and NO_PAY entries.
    pub deduction: i64,
    /// Caller-supplied bonus.
    pub bonus: i64,
    /// Final salary.
    pub total_salary: i64,
    /// How each figure was reached.
    pub audit_trace: AuditTrace,
}

impl SalaryBreakdown {
    /// Builds the snapshot to persist for the given employee and window.
    pub fn into_draft(
        self,
        employee_id: &str,
        department_id: &str,
        period: DateRange,
        computed_at: DateTime<Utc>,
    ) -> SalaryDraft {
        SalaryDraft {
            employee_id: employee_id.to_string(),
            department_id: department_id.to_string(),
            start_date: period.start_date,
            end_date: period.end_date,
            base_salary: self.base_salary,
            days_present: self.counts.present,
            days_leave: self.counts.leave,
            days_half_day: self.counts.half_day,
            days_no_pay: self.counts.no_pay,
            overtime_hours: self.overtime_hours,
            overtime_rate: self.overtime_rate,
            overtime_pay: self.overtime_pay,
            deduction: self.deduction,
            bonus: self.bonus,
            total_salary: self.total_salary,
            computed_at,
        }
    }
}

/// Calculates a salary from the attendance entries of one window.
///
/// `records` must already be restricted to the employee and window being
/// paid. Overtime is summed over every entry regardless of status; entries
/// whose status does not allow overtime but still carry hours produce an
/// [`OVERTIME_ON_NON_PRESENT_DAY`] warning.
///
/// # Errors
///
/// Returns [`crate::error::HrError::CalculationError`] if any figure
/// overflows.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::{DeductionPolicy, calculate_salary};
/// use hr_payroll::models::DepartmentPayConfig;
///
/// let pay = DepartmentPayConfig {
///     department_id: "ENGI".to_string(),
///     base_salary: 40000,
///     overtime_rate: 170,
/// };
/// let breakdown = calculate_salary(&[], &pay, 1000, &DeductionPolicy::default()).unwrap();
/// assert_eq!(breakdown.total_salary, 41000);
/// assert_eq!(breakdown.counts.total(), 0);
/// ```
pub fn calculate_salary(
    records: &[AttendanceRecord],
    pay: &DepartmentPayConfig,
    bonus: i64,
    policy: &DeductionPolicy,
) -> HrResult<SalaryBreakdown> {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    steps.push(AuditStep {
        step_number,
        rule_id: "department_pay".to_string(),
        rule_name: "Department Pay Lookup".to_string(),
        input: serde_json::json!({
            "department_id": pay.department_id
        }),
        output: serde_json::json!({
            "base_salary": pay.base_salary,
            "overtime_rate": pay.overtime_rate
        }),
        reasoning: format!(
            "Department {} pays base {} and overtime rate {}",
            pay.department_id, pay.base_salary, pay.overtime_rate
        ),
    });
    step_number += 1;

    let tally = tally_attendance(records, step_number);
    let counts = tally.counts;
    steps.push(tally.audit_step);
    step_number += 1;

    let overtime_hours = total_overtime_hours(records)?;
    let overtime = calculate_overtime_pay(overtime_hours, pay.overtime_rate, step_number)?;
    steps.push(overtime.audit_step);
    step_number += 1;

    let deduction = calculate_deduction(&counts, policy, step_number)?;
    steps.push(deduction.audit_step);
    step_number += 1;

    let total = calculate_total_salary(
        pay.base_salary,
        deduction.deduction,
        overtime.overtime_pay,
        bonus,
        step_number,
    )?;
    steps.push(total.audit_step);

    let warnings = records
        .iter()
        .filter(|r| !r.status.allows_overtime() && !r.overtime_hours.is_zero())
        .map(|r| AuditWarning {
            code: OVERTIME_ON_NON_PRESENT_DAY.to_string(),
            message: format!(
                "{} hours of overtime recorded on {} with status {}",
                r.overtime_hours.normalize(),
                r.date,
                r.status
            ),
        })
        .collect();

    Ok(SalaryBreakdown {
        base_salary: pay.base_salary,
        overtime_rate: pay.overtime_rate,
        counts,
        overtime_hours: overtime.overtime_hours,
        overtime_pay: overtime.overtime_pay,
        deduction: deduction.deduction,
        bonus,
        total_salary: total.total_salary,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}
