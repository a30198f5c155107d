//! Calculation logic for the HR payroll engine.
//!
//! This module contains the pure salary rules: tallying attendance by
//! status, overtime pay, attendance deductions, the final total, and
//! [`calculate_salary`] which chains them into one audited breakdown.

mod day_counts;
mod deduction;
mod overtime_pay;
mod salary;
mod total_salary;

pub use day_counts::{DayCountResult, DayCounts, tally_attendance};
pub use deduction::{
    DeductionPolicy, DeductionResult, HALF_DAY_PENALTY, NO_PAY_PENALTY, calculate_deduction,
};
pub use overtime_pay::{OvertimePayResult, calculate_overtime_pay, total_overtime_hours};
pub use salary::{OVERTIME_ON_NON_PRESENT_DAY, SalaryBreakdown, calculate_salary};
pub use total_salary::{TotalSalaryResult, calculate_total_salary};
