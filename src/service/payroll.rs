//! The payroll computation engine.
//!
//! [`PayrollEngine::compute_salary`] validates a [`SalaryRequest`], reads the
//! employee's attendance for the window, runs the pure salary calculation and
//! persists the result as a new snapshot.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{DeductionPolicy, SalaryBreakdown, calculate_salary};
use crate::error::{HrError, HrResult};
use crate::models::{SalaryRecord, SalaryRequest};
use crate::store::{AttendanceStore, DepartmentStore, EmployeeStore, SalaryStore};

/// Computes and stores salary snapshots.
#[derive(Clone)]
pub struct PayrollEngine {
    employees: Arc<dyn EmployeeStore>,
    departments: Arc<dyn DepartmentStore>,
    attendance: Arc<dyn AttendanceStore>,
    salaries: Arc<dyn SalaryStore>,
    policy: DeductionPolicy,
}

impl PayrollEngine {
    /// Creates an engine over the given stores.
    pub fn new(
        employees: Arc<dyn EmployeeStore>,
        departments: Arc<dyn DepartmentStore>,
        attendance: Arc<dyn AttendanceStore>,
        salaries: Arc<dyn SalaryStore>,
        policy: DeductionPolicy,
    ) -> Self {
        Self {
            employees,
            departments,
            attendance,
            salaries,
            policy,
        }
    }

    /// Returns the deduction policy applied to every computation.
    pub fn policy(&self) -> &DeductionPolicy {
        &self.policy
    }

    /// Computes a salary for one employee and window and persists it.
    ///
    /// Validation runs in order: the employee must exist, then the
    /// department, then the date range must not be reversed. Every call that
    /// passes validation writes exactly one new snapshot; nothing is written
    /// when validation or arithmetic fails.
    ///
    /// # Errors
    ///
    /// - [`HrError::EmployeeNotFound`]
    /// - [`HrError::DepartmentNotFound`]
    /// - [`HrError::InvalidDateRange`]
    /// - [`HrError::CalculationError`] on overflow
    pub async fn compute_salary(&self, request: SalaryRequest) -> HrResult<SalaryRecord> {
        let correlation_id = Uuid::new_v4();
        info!(
            correlation_id = %correlation_id,
            employee_id = %request.employee_id,
            department_id = %request.department_id,
            start_date = %request.start_date,
            end_date = %request.end_date,
            "Processing salary computation"
        );

        match self.compute(&request, correlation_id).await {
            Ok(record) => {
                info!(
                    correlation_id = %correlation_id,
                    salary_id = record.id,
                    employee_id = %record.employee_id,
                    days_recorded = record.days_recorded(),
                    deduction = record.deduction,
                    overtime_pay = record.overtime_pay,
                    total_salary = record.total_salary,
                    "Salary computed"
                );
                Ok(record)
            }
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    employee_id = %request.employee_id,
                    error = %err,
                    "Salary computation failed"
                );
                Err(err)
            }
        }
    }

    async fn compute(
        &self,
        request: &SalaryRequest,
        correlation_id: Uuid,
    ) -> HrResult<SalaryRecord> {
        if !self.employees.exists(&request.employee_id).await? {
            return Err(HrError::EmployeeNotFound {
                id: request.employee_id.clone(),
            });
        }

        let department = self
            .departments
            .find_by_id(&request.department_id)
            .await?
            .ok_or_else(|| HrError::DepartmentNotFound {
                id: request.department_id.clone(),
            })?;

        let period = request.date_range()?;

        // One range read; the calculation partitions by status in memory.
        let records = self
            .attendance
            .find_by_employee_and_range(&request.employee_id, period.start_date, period.end_date)
            .await?;

        let breakdown = calculate_salary(
            &records,
            &department.pay_config(),
            request.bonus,
            &self.policy,
        )?;
        log_audit_trace(correlation_id, &breakdown);

        let draft =
            breakdown.into_draft(&request.employee_id, &department.id, period, Utc::now());
        self.salaries.save(draft).await
    }

    /// Gets a salary snapshot by id.
    pub async fn get_salary_by_id(&self, id: u64) -> HrResult<SalaryRecord> {
        debug!(salary_id = id, "Getting salary");
        self.salaries
            .find_by_id(id)
            .await?
            .ok_or(HrError::SalaryNotFound { id })
    }

    /// Lists an employee's salary snapshots in insertion order.
    ///
    /// An employee with no snapshots yields an empty list.
    pub async fn get_salaries_by_employee_id(
        &self,
        employee_id: &str,
    ) -> HrResult<Vec<SalaryRecord>> {
        debug!(employee_id = %employee_id, "Listing salaries");
        if !self.employees.exists(employee_id).await? {
            return Err(HrError::EmployeeNotFound {
                id: employee_id.to_string(),
            });
        }
        self.salaries.find_by_employee(employee_id).await
    }
}

fn log_audit_trace(correlation_id: Uuid, breakdown: &SalaryBreakdown) {
    let trace = &breakdown.audit_trace;
    for step in &trace.steps {
        debug!(
            correlation_id = %correlation_id,
            step = step.step_number,
            rule_id = %step.rule_id,
            reasoning = %step.reasoning,
            "Audit step"
        );
    }
    for warning in &trace.warnings {
        warn!(
            correlation_id = %correlation_id,
            code = %warning.code,
            message = %warning.message,
            "Calculation warning"
        );
    }
    debug!(
        correlation_id = %correlation_id,
        duration_us = trace.duration_us,
        "Salary calculation finished"
    );
}
