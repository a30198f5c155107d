//! Employee management.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::access::Caller;
use crate::error::{HrError, HrResult};
use crate::models::{Employee, EmployeeUpdate, NewEmployee, next_employee_id};
use crate::store::{AttendanceStore, DepartmentStore, EmployeeStore, SalaryStore};

const MAX_ID_ATTEMPTS: u32 = 5;

/// Creates, updates and removes employees.
#[derive(Clone)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeStore>,
    departments: Arc<dyn DepartmentStore>,
    attendance: Arc<dyn AttendanceStore>,
    salaries: Arc<dyn SalaryStore>,
}

impl EmployeeService {
    /// Creates the service over the given stores.
    pub fn new(
        employees: Arc<dyn EmployeeStore>,
        departments: Arc<dyn DepartmentStore>,
        attendance: Arc<dyn AttendanceStore>,
        salaries: Arc<dyn SalaryStore>,
    ) -> Self {
        Self {
            employees,
            departments,
            attendance,
            salaries,
        }
    }

    async fn require_department(&self, department_id: &str) -> HrResult<()> {
        match self.departments.find_by_id(department_id).await? {
            Some(_) => Ok(()),
            None => Err(HrError::DepartmentNotFound {
                id: department_id.to_string(),
            }),
        }
    }

    /// Adds an employee and assigns the next id in their department.
    ///
    /// Checks run in order: email and NIC must be unused, the caller must be
    /// allowed to grant the requested role, and the department must exist.
    ///
    /// # Errors
    ///
    /// - [`HrError::EmployeeAlreadyExists`]
    /// - [`HrError::Forbidden`]
    /// - [`HrError::DepartmentNotFound`]
    pub async fn add_employee(&self, caller: &Caller, employee: NewEmployee) -> HrResult<Employee> {
        if self.employees.find_by_email(&employee.email).await?.is_some() {
            return Err(HrError::EmployeeAlreadyExists {
                field: "email".to_string(),
                value: employee.email,
            });
        }
        if self.employees.find_by_nic(&employee.nic).await?.is_some() {
            return Err(HrError::EmployeeAlreadyExists {
                field: "nic".to_string(),
                value: employee.nic,
            });
        }
        if let Err(err) = caller.require_can_create(employee.role) {
            warn!(
                caller = %caller.employee_id,
                caller_role = %caller.role,
                requested_role = %employee.role,
                "Employee creation refused"
            );
            return Err(err);
        }
        self.require_department(&employee.department_id).await?;

        let employee = self.insert_with_next_id(employee).await?;
        info!(
            employee_id = %employee.id,
            department_id = %employee.department_id,
            role = %employee.role,
            created_by = %caller.employee_id,
            "Employee added"
        );
        Ok(employee)
    }

    /// Derives the next id in the department and inserts, deriving again if
    /// a concurrent insert claimed the same id first.
    async fn insert_with_next_id(&self, employee: NewEmployee) -> HrResult<Employee> {
        let mut attempt = 1;
        loop {
            let colleagues = self
                .employees
                .find_by_department(&employee.department_id)
                .await?;
            let id = next_employee_id(
                &employee.department_id,
                colleagues.iter().map(|e| e.id.as_str()),
            );

            match self.employees.insert(employee.clone().into_employee(id)).await {
                Err(HrError::EmployeeAlreadyExists { field, value })
                    if field == "id" && attempt < MAX_ID_ATTEMPTS =>
                {
                    debug!(employee_id = %value, attempt, "Employee id taken, deriving again");
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    /// Lists every employee.
    pub async fn get_all_employees(&self) -> HrResult<Vec<Employee>> {
        self.employees.find_all().await
    }

    /// Gets an employee by id.
    pub async fn get_employee_by_id(&self, id: &str) -> HrResult<Employee> {
        debug!(employee_id = %id, "Getting employee");
        self.employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| HrError::EmployeeNotFound { id: id.to_string() })
    }

    /// Lists the employees of a department.
    pub async fn get_employees_by_department(&self, department_id: &str) -> HrResult<Vec<Employee>> {
        self.require_department(department_id).await?;
        self.employees.find_by_department(department_id).await
    }

    /// Updates an employee's contact details.
    ///
    /// A changed email must not belong to another employee.
    pub async fn update_employee(&self, id: &str, update: EmployeeUpdate) -> HrResult<Employee> {
        let mut employee = self.get_employee_by_id(id).await?;

        if let Some(email) = &update.email {
            if let Some(holder) = self.employees.find_by_email(email).await? {
                if holder.id != employee.id {
                    return Err(HrError::EmployeeAlreadyExists {
                        field: "email".to_string(),
                        value: email.clone(),
                    });
                }
            }
        }

        update.apply_to(&mut employee);
        let employee = self.employees.update(employee).await?;
        info!(employee_id = %employee.id, "Employee updated");
        Ok(employee)
    }

    /// Removes an employee together with their salary snapshots and
    /// attendance entries.
    pub async fn delete_employee(&self, id: &str) -> HrResult<()> {
        if !self.employees.exists(id).await? {
            return Err(HrError::EmployeeNotFound { id: id.to_string() });
        }

        let salaries = self.salaries.delete_by_employee(id).await?;
        let attendance = self.attendance.delete_by_employee(id).await?;
        self.employees.delete(id).await?;

        info!(
            employee_id = %id,
            salaries_removed = salaries,
            attendance_removed = attendance,
            "Employee deleted"
        );
        Ok(())
    }
}
