//! Integration tests for the HR payroll engine.
//!
//! This test suite drives the public services end to end through an
//! in-memory [`AppState`] seeded from the default configuration:
//! - Salary computation scenarios
//! - Validation and error cases
//! - Salary snapshots and history
//! - Attendance workflow feeding payroll
//! - Department and employee lifecycle
//! - JSON shape of requests and records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;

use hr_payroll::access::Caller;
use hr_payroll::config::ConfigLoader;
use hr_payroll::error::{ErrorKind, HrError};
use hr_payroll::models::{
    AttendanceStatus, AttendanceUpdate, DepartmentUpdate, Employee, NewAttendance,
    NewDepartment, NewEmployee, Role, SalaryRecord, SalaryRequest,
};
use hr_payroll::state::AppState;

// =============================================================================
// Test Helpers
// =============================================================================

async fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::in_memory(config)
        .await
        .expect("Failed to seed state")
}

fn admin() -> Caller {
    Caller::new("ADMIN", Role::Admin)
}

fn hr() -> Caller {
    Caller::new("HUMA1", Role::Hr)
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::from_str(s).unwrap()
}

async fn hire(state: &AppState, email: &str, nic: &str, department_id: &str) -> Employee {
    state
        .employees()
        .add_employee(
            &admin(),
            NewEmployee {
                first_name: "Tharindu".to_string(),
                last_name: "Wijesinghe".to_string(),
                nic: nic.to_string(),
                gender: "Male".to_string(),
                phone: "0712345678".to_string(),
                email: email.to_string(),
                address: "7 Temple Road".to_string(),
                birthday: date("1991-06-15"),
                department_id: department_id.to_string(),
                role: Role::User,
            },
        )
        .await
        .expect("Failed to add employee")
}

async fn record(state: &AppState, employee_id: &str, day: &str, status: &str, overtime: Value) {
    let attendance: NewAttendance = serde_json::from_value(json!({
        "employee_id": employee_id,
        "date": day,
        "status": status,
        "overtime_hours": overtime
    }))
    .unwrap();
    state
        .attendance()
        .create_attendance(&hr(), attendance)
        .await
        .expect("Failed to record attendance");
}

fn salary_request(
    employee_id: &str,
    department_id: &str,
    start: &str,
    end: &str,
    bonus: i64,
) -> SalaryRequest {
    serde_json::from_value(json!({
        "employee_id": employee_id,
        "department_id": department_id,
        "start_date": start,
        "end_date": end,
        "bonus": bonus
    }))
    .unwrap()
}

/// Records the reference week: 3 PRESENT (2.5 overtime hours in total),
/// 1 HALF_DAY, 1 NO_PAY.
async fn record_reference_week(state: &AppState, employee_id: &str) {
    record(state, employee_id, "2025-01-01", "PRESENT", json!(1)).await;
    record(state, employee_id, "2025-01-02", "PRESENT", json!("1.5")).await;
    record(state, employee_id, "2025-01-03", "PRESENT", Value::Null).await;
    record(state, employee_id, "2025-01-04", "HALF_DAY", Value::Null).await;
    record(state, employee_id, "2025-01-05", "NO_PAY", Value::Null).await;
}

// =============================================================================
// SECTION 1: Salary Computation Scenarios
// =============================================================================

#[tokio::test]
async fn test_reference_week() {
    // base 40000, rate 170
    // deduction 2500 + 1200 = 3700, overtime 2.5 * 170 = 425
    let state = create_test_state().await;
    let employee = hire(&state, "t@company.com", "911V", "ENGI").await;
    record_reference_week(&state, &employee.id).await;

    let salary = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "ENGI", "2025-01-01", "2025-01-05", 1000))
        .await
        .unwrap();

    assert_eq!(salary.base_salary, 40000);
    assert_eq!(salary.overtime_rate, 170);
    assert_eq!(salary.days_present, 3);
    assert_eq!(salary.days_half_day, 1);
    assert_eq!(salary.days_no_pay, 1);
    assert_eq!(salary.days_leave, 0);
    assert_eq!(salary.overtime_hours, decimal("2.5"));
    assert_eq!(salary.overtime_pay, 425);
    assert_eq!(salary.deduction, 3700);
    assert_eq!(salary.bonus, 1000);
    assert_eq!(salary.total_salary, 40000 - 3700 + 425 + 1000);
}

#[tokio::test]
async fn test_no_attendance_pays_base_plus_bonus() {
    let state = create_test_state().await;
    let employee = hire(&state, "t@company.com", "911V", "FINA").await;

    let salary = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "FINA", "2025-02-01", "2025-02-28", 250))
        .await
        .unwrap();

    assert_eq!(salary.days_recorded(), 0);
    assert_eq!(salary.overtime_hours, Decimal::ZERO);
    assert_eq!(salary.overtime_pay, 0);
    assert_eq!(salary.deduction, 0);
    assert_eq!(salary.total_salary, 35000 + 250);
}

#[tokio::test]
async fn test_leave_costs_nothing() {
    let state = create_test_state().await;
    let employee = hire(&state, "t@company.com", "911V", "ENGI").await;
    record(&state, &employee.id, "2025-03-03", "LEAVE", Value::Null).await;
    record(&state, &employee.id, "2025-03-04", "LEAVE", Value::Null).await;

    let salary = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "ENGI", "2025-03-01", "2025-03-31", 0))
        .await
        .unwrap();

    assert_eq!(salary.days_leave, 2);
    assert_eq!(salary.deduction, 0);
    assert_eq!(salary.total_salary, 40000);
}

#[tokio::test]
async fn test_only_entries_inside_window_count() {
    let state = create_test_state().await;
    let employee = hire(&state, "t@company.com", "911V", "ENGI").await;
    record(&state, &employee.id, "2024-12-31", "NO_PAY", Value::Null).await;
    record(&state, &employee.id, "2025-01-01", "NO_PAY", Value::Null).await;
    record(&state, &employee.id, "2025-01-31", "HALF_DAY", Value::Null).await;
    record(&state, &employee.id, "2025-02-01", "NO_PAY", Value::Null).await;

    let salary = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "ENGI", "2025-01-01", "2025-01-31", 0))
        .await
        .unwrap();

    // both boundaries inclusive, neighbours excluded
    assert_eq!(salary.days_no_pay, 1);
    assert_eq!(salary.days_half_day, 1);
    assert_eq!(salary.deduction, 3700);
}

#[tokio::test]
async fn test_overtime_pay_is_truncated() {
    // 1.3 hours * 155 = 201.5, paid as 201
    let state = create_test_state().await;
    state
        .departments()
        .add_department(NewDepartment {
            name: "Logistics".to_string(),
            base_salary: 28000,
            overtime_rate: 155,
        })
        .await
        .unwrap();
    let employee = hire(&state, "t@company.com", "911V", "LOGI").await;
    record(&state, &employee.id, "2025-01-06", "PRESENT", json!("1.3")).await;

    let salary = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "LOGI", "2025-01-01", "2025-01-31", 0))
        .await
        .unwrap();

    assert_eq!(salary.overtime_pay, 201);
    assert_eq!(salary.total_salary, 28201);
}

#[tokio::test]
async fn test_department_of_request_sets_pay() {
    // pay parameters come from the requested department
    let state = create_test_state().await;
    let employee = hire(&state, "t@company.com", "911V", "ENGI").await;
    record(&state, &employee.id, "2025-01-06", "PRESENT", json!(2)).await;

    let salary = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "SALE", "2025-01-01", "2025-01-31", 0))
        .await
        .unwrap();

    assert_eq!(salary.department_id, "SALE");
    assert_eq!(salary.base_salary, 30000);
    assert_eq!(salary.overtime_pay, 240);
}

// =============================================================================
// SECTION 2: Validation and Error Cases
// =============================================================================

#[tokio::test]
async fn test_unknown_employee() {
    let state = create_test_state().await;

    let err = state
        .payroll()
        .compute_salary(salary_request("ENGI99", "ENGI", "2025-01-01", "2025-01-31", 0))
        .await
        .unwrap_err();

    assert!(matches!(err, HrError::EmployeeNotFound { ref id } if id == "ENGI99"));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("ENGI99"));
}

#[tokio::test]
async fn test_unknown_department_persists_nothing() {
    let state = create_test_state().await;
    let employee = hire(&state, "t@company.com", "911V", "ENGI").await;

    let err = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "XXXX", "2025-01-01", "2025-01-31", 0))
        .await
        .unwrap_err();

    assert!(matches!(err, HrError::DepartmentNotFound { ref id } if id == "XXXX"));
    let history = state
        .payroll()
        .get_salaries_by_employee_id(&employee.id)
        .await
        .unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_reversed_range_rejected() {
    let state = create_test_state().await;
    let employee = hire(&state, "t@company.com", "911V", "ENGI").await;

    let err = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "ENGI", "2025-02-01", "2025-01-01", 0))
        .await
        .unwrap_err();

    assert!(matches!(err, HrError::InvalidDateRange { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[tokio::test]
async fn test_overtime_sum_overflow_is_calculation_error() {
    let state = create_test_state().await;
    let employee = hire(&state, "o@company.com", "912V", "ENGI").await;
    let huge = json!("50000000000000000000000000000");
    record(&state, &employee.id, "2025-01-01", "PRESENT", huge.clone()).await;
    record(&state, &employee.id, "2025-01-02", "PRESENT", huge).await;

    let err = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "ENGI", "2025-01-01", "2025-01-31", 0))
        .await
        .unwrap_err();

    assert!(matches!(err, HrError::CalculationError { .. }));
    let history = state
        .payroll()
        .get_salaries_by_employee_id(&employee.id)
        .await
        .unwrap();
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_employee_checked_before_department() {
    let state = create_test_state().await;

    let err = state
        .payroll()
        .compute_salary(salary_request("NOPE1", "XXXX", "2025-02-01", "2025-01-01", 0))
        .await
        .unwrap_err();

    assert!(matches!(err, HrError::EmployeeNotFound { .. }));
}

#[tokio::test]
async fn test_salary_not_found() {
    let state = create_test_state().await;
    let err = state.payroll().get_salary_by_id(12345).await.unwrap_err();
    assert!(matches!(err, HrError::SalaryNotFound { id: 12345 }));
}

// =============================================================================
// SECTION 3: Salary Snapshots
// =============================================================================

#[tokio::test]
async fn test_recomputation_creates_new_snapshot() {
    let state = create_test_state().await;
    let employee = hire(&state, "t@company.com", "911V", "ENGI").await;
    record_reference_week(&state, &employee.id).await;

    let first = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "ENGI", "2025-01-01", "2025-01-05", 0))
        .await
        .unwrap();
    let second = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "ENGI", "2025-01-01", "2025-01-05", 500))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(second.total_salary - first.total_salary, 500);

    let history: Vec<SalaryRecord> = state
        .payroll()
        .get_salaries_by_employee_id(&employee.id)
        .await
        .unwrap();
    assert_eq!(history, vec![first.clone(), second]);
    assert_eq!(state.payroll().get_salary_by_id(first.id).await.unwrap(), first);
}

#[tokio::test]
async fn test_snapshot_keeps_rates_after_department_change() {
    let state = create_test_state().await;
    let employee = hire(&state, "t@company.com", "911V", "ENGI").await;

    let before = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "ENGI", "2025-01-01", "2025-01-31", 0))
        .await
        .unwrap();

    state
        .departments()
        .update_department(
            "ENGI",
            DepartmentUpdate {
                base_salary: Some(50000),
                overtime_rate: None,
            },
        )
        .await
        .unwrap();

    let after = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "ENGI", "2025-01-01", "2025-01-31", 0))
        .await
        .unwrap();

    let stored = state.payroll().get_salary_by_id(before.id).await.unwrap();
    assert_eq!(stored.base_salary, 40000);
    assert_eq!(after.base_salary, 50000);
}

// =============================================================================
// SECTION 4: Attendance Workflow
// =============================================================================

#[tokio::test]
async fn test_corrected_attendance_changes_next_salary() {
    let state = create_test_state().await;
    let employee = hire(&state, "t@company.com", "911V", "ENGI").await;
    record(&state, &employee.id, "2025-01-06", "PRESENT", json!(3)).await;

    let entry = state
        .attendance()
        .get_attendance_by_employee_and_date(&employee.id, date("2025-01-06"))
        .await
        .unwrap();
    state
        .attendance()
        .update_attendance(
            &hr(),
            entry.id,
            AttendanceUpdate {
                status: Some(AttendanceStatus::NoPay),
                overtime_hours: None,
            },
        )
        .await
        .unwrap();

    let salary = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "ENGI", "2025-01-01", "2025-01-31", 0))
        .await
        .unwrap();

    assert_eq!(salary.days_no_pay, 1);
    assert_eq!(salary.overtime_hours, Decimal::ZERO);
    assert_eq!(salary.total_salary, 40000 - 2500);
}

#[tokio::test]
async fn test_regular_users_cannot_record_attendance() {
    let state = create_test_state().await;
    let employee = hire(&state, "t@company.com", "911V", "ENGI").await;
    let user = Caller::new(employee.id.clone(), Role::User);

    let err = state
        .attendance()
        .create_attendance(
            &user,
            NewAttendance {
                employee_id: employee.id.clone(),
                date: date("2025-01-06"),
                status: AttendanceStatus::Present,
                overtime_hours: None,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Forbidden);
}

#[tokio::test]
async fn test_department_attendance_for_a_day() {
    let state = create_test_state().await;
    let engineer = hire(&state, "e@company.com", "1V", "ENGI").await;
    let seller = hire(&state, "s@company.com", "2V", "SALE").await;
    record(&state, &engineer.id, "2025-01-06", "PRESENT", Value::Null).await;
    record(&state, &seller.id, "2025-01-06", "PRESENT", Value::Null).await;

    let engineering = state
        .attendance()
        .get_attendance_by_date_and_department(date("2025-01-06"), "ENGI")
        .await
        .unwrap();

    assert_eq!(engineering.len(), 1);
    assert_eq!(engineering[0].employee_id, engineer.id);
}

// =============================================================================
// SECTION 5: Department and Employee Lifecycle
// =============================================================================

#[tokio::test]
async fn test_seeded_departments() {
    let state = create_test_state().await;
    let ids: Vec<String> = state
        .departments()
        .get_all_departments()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ids, vec!["ENGI", "FINA", "HUMA", "SALE"]);
}

#[tokio::test]
async fn test_employee_ids_follow_department() {
    let state = create_test_state().await;
    let first = hire(&state, "a@company.com", "1V", "ENGI").await;
    let second = hire(&state, "b@company.com", "2V", "ENGI").await;
    let seller = hire(&state, "c@company.com", "3V", "SALE").await;

    assert_eq!(first.id, "ENGI1");
    assert_eq!(second.id, "ENGI2");
    assert_eq!(seller.id, "SALE1");
}

#[tokio::test]
async fn test_deleting_employee_removes_salary_history() {
    let state = create_test_state().await;
    let employee = hire(&state, "t@company.com", "911V", "ENGI").await;
    record_reference_week(&state, &employee.id).await;
    let salary = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "ENGI", "2025-01-01", "2025-01-05", 0))
        .await
        .unwrap();

    state.employees().delete_employee(&employee.id).await.unwrap();

    assert!(matches!(
        state.payroll().get_salary_by_id(salary.id).await,
        Err(HrError::SalaryNotFound { .. })
    ));
    assert!(matches!(
        state.payroll().get_salaries_by_employee_id(&employee.id).await,
        Err(HrError::EmployeeNotFound { .. })
    ));
    assert!(state
        .attendance()
        .get_attendance_by_date(date("2025-01-01"))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_department_with_employees_cannot_be_deleted() {
    let state = create_test_state().await;
    let employee = hire(&state, "t@company.com", "911V", "FINA").await;

    let err = state.departments().delete_department("FINA").await.unwrap_err();
    assert!(matches!(err, HrError::DepartmentInUse { .. }));
    assert_eq!(err.kind(), ErrorKind::Conflict);

    state.employees().delete_employee(&employee.id).await.unwrap();
    state.departments().delete_department("FINA").await.unwrap();
}

// =============================================================================
// SECTION 6: JSON Shape
// =============================================================================

#[tokio::test]
async fn test_salary_record_json() {
    let state = create_test_state().await;
    let employee = hire(&state, "t@company.com", "911V", "ENGI").await;
    record_reference_week(&state, &employee.id).await;

    let salary = state
        .payroll()
        .compute_salary(salary_request(&employee.id, "ENGI", "2025-01-01", "2025-01-05", 0))
        .await
        .unwrap();
    let json = serde_json::to_value(&salary).unwrap();

    assert_eq!(json["employee_id"], "ENGI1");
    assert_eq!(json["start_date"], "2025-01-01");
    assert_eq!(json["end_date"], "2025-01-05");
    assert_eq!(json["overtime_hours"], "2.5");
    assert_eq!(json["deduction"], 3700);
    assert_eq!(json["total_salary"], 36725);

    let back: SalaryRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, salary);
}

#[test]
fn test_salary_request_bonus_defaults_to_zero() {
    let request: SalaryRequest = serde_json::from_value(json!({
        "employee_id": "ENGI1",
        "department_id": "ENGI",
        "start_date": "2025-01-01",
        "end_date": "2025-01-31"
    }))
    .unwrap();
    assert_eq!(request.bonus, 0);
}

#[test]
fn test_unknown_status_rejected() {
    let result: Result<NewAttendance, _> = serde_json::from_value(json!({
        "employee_id": "ENGI1",
        "date": "2025-01-01",
        "status": "SICK"
    }));
    assert!(result.is_err());
}
