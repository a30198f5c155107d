//! Overtime pay calculation.
//!
//! Overtime hours are summed across every attendance entry in the window,
//! whatever its status, and paid at the department's overtime rate. The
//! product is truncated to whole currency units.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{HrError, HrResult};
use crate::models::{AttendanceRecord, AuditStep};

/// The result of an overtime pay calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct OvertimePayResult {
    /// Total overtime hours the pay was computed from.
    pub overtime_hours: Decimal,
    /// Overtime pay in whole currency units.
    pub overtime_pay: i64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sums overtime hours across all entries, regardless of status.
///
/// # Errors
///
/// Returns [`HrError::CalculationError`] if the sum overflows.
pub fn total_overtime_hours(records: &[AttendanceRecord]) -> HrResult<Decimal> {
    records.iter().try_fold(Decimal::ZERO, |total, r| {
        total
            .checked_add(r.overtime_hours)
            .ok_or_else(|| HrError::CalculationError {
                message: format!("overtime hours overflow at entry dated {}", r.date),
            })
    })
}

/// Calculates overtime pay as `trunc(overtime_hours * overtime_rate)`.
///
/// # Errors
///
/// Returns [`HrError::CalculationError`] if the hours are negative or the
/// pay does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use hr_payroll::calculation::calculate_overtime_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_overtime_pay(Decimal::from_str("2.5").unwrap(), 170, 1).unwrap();
/// assert_eq!(result.overtime_pay, 425);
///
/// // 1.3 * 155 = 201.5, truncated
/// let result = calculate_overtime_pay(Decimal::from_str("1.3").unwrap(), 155, 1).unwrap();
/// assert_eq!(result.overtime_pay, 201);
/// ```
pub fn calculate_overtime_pay(
    overtime_hours: Decimal,
    overtime_rate: i64,
    step_number: u32,
) -> HrResult<OvertimePayResult> {
    if overtime_hours.is_sign_negative() && !overtime_hours.is_zero() {
        return Err(HrError::CalculationError {
            message: format!("negative overtime hours: {}", overtime_hours),
        });
    }

    let overflow = || HrError::CalculationError {
        message: format!(
            "overtime pay overflows for {} hours at rate {}",
            overtime_hours, overtime_rate
        ),
    };

    let exact = overtime_hours
        .checked_mul(Decimal::from(overtime_rate))
        .ok_or_else(overflow)?;
    let overtime_pay = exact.trunc().to_i64().ok_or_else(overflow)?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        input: serde_json::json!({
            "overtime_hours": overtime_hours.normalize().to_string(),
            "overtime_rate": overtime_rate
        }),
        output: serde_json::json!({
            "overtime_pay": overtime_pay
        }),
        reasoning: format!(
            "{} hours x {} = {}, truncated to {}",
            overtime_hours.normalize(),
            overtime_rate,
            exact.normalize(),
            overtime_pay
        ),
    };

    Ok(OvertimePayResult {
        overtime_hours,
        overtime_pay,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_record(day: u32, status: AttendanceStatus, hours: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: day as u64,
            employee_id: "ENGI1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            status,
            overtime_hours: dec(hours),
        }
    }

    /// OT-001: hours on any status are summed
    #[test]
    fn test_total_hours_counts_every_status() {
        let records = vec![
            create_record(1, AttendanceStatus::Present, "2.5"),
            create_record(2, AttendanceStatus::Leave, "1"),
            create_record(3, AttendanceStatus::NoPay, "0.25"),
        ];
        assert_eq!(total_overtime_hours(&records).unwrap(), dec("3.75"));
    }

    #[test]
    fn test_total_hours_overflow_is_reported() {
        let records = vec![
            create_record(1, AttendanceStatus::Present, "50000000000000000000000000000"),
            create_record(2, AttendanceStatus::Present, "50000000000000000000000000000"),
        ];
        let err = total_overtime_hours(&records).unwrap_err();
        assert!(matches!(err, HrError::CalculationError { .. }));
    }

    /// OT-002: exact product needs no truncation
    #[test]
    fn test_exact_product() {
        let result = calculate_overtime_pay(dec("2.5"), 170, 1).unwrap();
        assert_eq!(result.overtime_pay, 425);
        assert_eq!(result.overtime_hours, dec("2.5"));
    }

    /// OT-003: fractional product is truncated, not rounded
    #[test]
    fn test_fractional_product_is_truncated() {
        let result = calculate_overtime_pay(dec("0.99"), 100, 1).unwrap();
        assert_eq!(result.overtime_pay, 99);

        let result = calculate_overtime_pay(dec("0.333"), 10, 1).unwrap();
        assert_eq!(result.overtime_pay, 3);
    }

    /// OT-004: decimal hours avoid binary drift (0.29 x 100 is exactly 29)
    #[test]
    fn test_decimal_hours_are_exact() {
        let result = calculate_overtime_pay(dec("0.29"), 100, 1).unwrap();
        assert_eq!(result.overtime_pay, 29);
    }

    #[test]
    fn test_zero_hours_pays_nothing() {
        let result = calculate_overtime_pay(Decimal::ZERO, 170, 1).unwrap();
        assert_eq!(result.overtime_pay, 0);
    }

    #[test]
    fn test_negative_hours_rejected() {
        let err = calculate_overtime_pay(dec("-1"), 170, 1).unwrap_err();
        assert!(matches!(err, HrError::CalculationError { .. }));
    }

    #[test]
    fn test_overflow_is_reported() {
        let err = calculate_overtime_pay(dec("1000000000000"), i64::MAX, 1).unwrap_err();
        assert!(matches!(err, HrError::CalculationError { .. }));
    }

    #[test]
    fn test_audit_step_explains_truncation() {
        let result = calculate_overtime_pay(dec("1.3"), 155, 3).unwrap();
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "overtime_pay");
        assert_eq!(result.audit_step.input["overtime_hours"], "1.3");
        assert_eq!(result.audit_step.output["overtime_pay"], 201);
        assert!(result.audit_step.reasoning.contains("201.5"));
        assert!(result.audit_step.reasoning.contains("truncated to 201"));
    }
}
