//! Attendance deduction calculation.
//!
//! This module provides the flat per-day penalties charged for NO_PAY and
//! HALF_DAY attendance. PRESENT and LEAVE days are never penalised.

use serde::{Deserialize, Serialize};

use super::DayCounts;
use crate::error::{HrError, HrResult};
use crate::models::AuditStep;

/// Penalty charged per NO_PAY day.
pub const NO_PAY_PENALTY: i64 = 2500;

/// Penalty charged per HALF_DAY day.
pub const HALF_DAY_PENALTY: i64 = 1200;

/// Per-day penalties applied when computing a salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionPolicy {
    /// Amount deducted for each NO_PAY day.
    #[serde(default = "default_no_pay_penalty")]
    pub no_pay_penalty: i64,
    /// Amount deducted for each HALF_DAY day.
    #[serde(default = "default_half_day_penalty")]
    pub half_day_penalty: i64,
}

fn default_no_pay_penalty() -> i64 {
    NO_PAY_PENALTY
}

fn default_half_day_penalty() -> i64 {
    HALF_DAY_PENALTY
}

impl Default for DeductionPolicy {
    fn default() -> Self {
        Self {
            no_pay_penalty: NO_PAY_PENALTY,
            half_day_penalty: HALF_DAY_PENALTY,
        }
    }
}

/// The result of a deduction calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct DeductionResult {
    /// Total deduction in whole currency units.
    pub deduction: i64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates `no_pay * no_pay_penalty + half_day * half_day_penalty`.
///
/// # Errors
///
/// Returns [`HrError::CalculationError`] if the deduction overflows.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::{DayCounts, DeductionPolicy, calculate_deduction};
///
/// let counts = DayCounts { present: 3, leave: 0, half_day: 1, no_pay: 1 };
/// let result = calculate_deduction(&counts, &DeductionPolicy::default(), 1).unwrap();
/// assert_eq!(result.deduction, 3700);
/// ```
pub fn calculate_deduction(
    counts: &DayCounts,
    policy: &DeductionPolicy,
    step_number: u32,
) -> HrResult<DeductionResult> {
    let no_pay_amount = policy.no_pay_penalty.checked_mul(i64::from(counts.no_pay));
    let half_day_amount = policy
        .half_day_penalty
        .checked_mul(i64::from(counts.half_day));

    let deduction = no_pay_amount
        .zip(half_day_amount)
        .and_then(|(a, b)| a.checked_add(b))
        .ok_or_else(|| HrError::CalculationError {
            message: format!(
                "deduction overflows for {} no pay and {} half day entries",
                counts.no_pay, counts.half_day
            ),
        })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "attendance_deduction".to_string(),
        rule_name: "Attendance Deduction".to_string(),
        input: serde_json::json!({
            "days_no_pay": counts.no_pay,
            "days_half_day": counts.half_day,
            "no_pay_penalty": policy.no_pay_penalty,
            "half_day_penalty": policy.half_day_penalty
        }),
        output: serde_json::json!({
            "deduction": deduction
        }),
        reasoning: format!(
            "{} no pay x {} + {} half day x {} = {}",
            counts.no_pay,
            policy.no_pay_penalty,
            counts.half_day,
            policy.half_day_penalty,
            deduction
        ),
    };

    Ok(DeductionResult {
        deduction,
        audit_step,
    })
}
