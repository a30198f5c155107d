//! Total salary calculation.

use crate::error::{HrError, HrResult};
use crate::models::AuditStep;

/// The result of a total salary calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct TotalSalaryResult {
    /// `base_salary - deduction + overtime_pay + bonus`.
    pub total_salary: i64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates `base_salary - deduction + overtime_pay + bonus`.
///
/// The total may be negative when deductions exceed the base salary; it is
/// reported as computed.
///
/// # Errors
///
/// Returns [`HrError::CalculationError`] if any intermediate sum overflows.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::calculate_total_salary;
///
/// let result = calculate_total_salary(40000, 3700, 425, 1000, 1).unwrap();
/// assert_eq!(result.total_salary, 37725);
/// ```
pub fn calculate_total_salary(
    base_salary: i64,
    deduction: i64,
    overtime_pay: i64,
    bonus: i64,
    step_number: u32,
) -> HrResult<TotalSalaryResult> {
    let total_salary = base_salary
        .checked_sub(deduction)
        .and_then(|v| v.checked_add(overtime_pay))
        .and_then(|v| v.checked_add(bonus))
        .ok_or_else(|| HrError::CalculationError {
            message: format!(
                "total salary overflows: {} - {} + {} + {}",
                base_salary, deduction, overtime_pay, bonus
            ),
        })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "total_salary".to_string(),
        rule_name: "Total Salary".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary,
            "deduction": deduction,
            "overtime_pay": overtime_pay,
            "bonus": bonus
        }),
        output: serde_json::json!({
            "total_salary": total_salary
        }),
        reasoning: format!(
            "{} - {} + {} + {} = {}",
            base_salary, deduction, overtime_pay, bonus, total_salary
        ),
    };

    Ok(TotalSalaryResult {
        total_salary,
        audit_step,
    })
}
