//! Department management.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{HrError, HrResult};
use crate::models::{Department, DepartmentUpdate, NewDepartment};
use crate::store::{DepartmentStore, EmployeeStore};

/// Creates, updates and removes departments.
#[derive(Clone)]
pub struct DepartmentService {
    departments: Arc<dyn DepartmentStore>,
    employees: Arc<dyn EmployeeStore>,
}

fn invalid(field: &str, message: &str) -> HrError {
    HrError::InvalidDepartment {
        field: field.to_string(),
        message: message.to_string(),
    }
}

impl DepartmentService {
    /// Creates the service over the given stores.
    pub fn new(departments: Arc<dyn DepartmentStore>, employees: Arc<dyn EmployeeStore>) -> Self {
        Self {
            departments,
            employees,
        }
    }

    /// Adds a department, deriving its id from the name.
    ///
    /// # Errors
    ///
    /// - [`HrError::InvalidDepartment`] for a blank name or negative amounts
    /// - [`HrError::DepartmentAlreadyExists`] if the derived id is taken
    pub async fn add_department(&self, department: NewDepartment) -> HrResult<Department> {
        if department.name.trim().is_empty() {
            return Err(invalid("name", "must not be empty"));
        }
        if department.base_salary < 0 {
            return Err(invalid("base_salary", "must not be negative"));
        }
        if department.overtime_rate < 0 {
            return Err(invalid("overtime_rate", "must not be negative"));
        }

        match self.departments.insert(department.into_department()).await {
            Ok(department) => {
                info!(
                    department_id = %department.id,
                    name = %department.name,
                    base_salary = department.base_salary,
                    overtime_rate = department.overtime_rate,
                    "Department added"
                );
                Ok(department)
            }
            Err(err) => {
                warn!(error = %err, "Failed to add department");
                Err(err)
            }
        }
    }

    /// Lists every department.
    pub async fn get_all_departments(&self) -> HrResult<Vec<Department>> {
        self.departments.find_all().await
    }

    /// Gets a department by id.
    pub async fn get_department_by_id(&self, id: &str) -> HrResult<Department> {
        debug!(department_id = %id, "Getting department");
        self.departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| HrError::DepartmentNotFound { id: id.to_string() })
    }

    /// Updates a department's pay parameters.
    ///
    /// Supplied values are applied only when greater than zero.
    pub async fn update_department(
        &self,
        id: &str,
        update: DepartmentUpdate,
    ) -> HrResult<Department> {
        let mut department = self.get_department_by_id(id).await?;
        update.apply_to(&mut department);

        let department = self.departments.update(department).await?;
        info!(
            department_id = %department.id,
            base_salary = department.base_salary,
            overtime_rate = department.overtime_rate,
            "Department updated"
        );
        Ok(department)
    }

    /// Removes a department that no employee belongs to.
    ///
    /// # Errors
    ///
    /// - [`HrError::DepartmentNotFound`]
    /// - [`HrError::DepartmentInUse`] while employees still reference it
    pub async fn delete_department(&self, id: &str) -> HrResult<()> {
        self.get_department_by_id(id).await?;

        let members = self.employees.find_by_department(id).await?;
        if !members.is_empty() {
            warn!(
                department_id = %id,
                employees = members.len(),
                "Refusing to delete department with employees"
            );
            return Err(HrError::DepartmentInUse { id: id.to_string() });
        }

        if !self.departments.delete(id).await? {
            return Err(HrError::DepartmentNotFound { id: id.to_string() });
        }
        info!(department_id = %id, "Department deleted");
        Ok(())
    }
}
