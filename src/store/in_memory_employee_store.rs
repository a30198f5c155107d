use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::EmployeeStore;
use crate::error::{HrError, HrResult};
use crate::models::Employee;

/// In-memory implementation of EmployeeStore using a BTreeMap keyed by id
#[derive(Clone)]
pub struct InMemoryEmployeeStore {
    employees: Arc<RwLock<BTreeMap<String, Employee>>>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            employees: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl Default for InMemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

fn already_exists(field: &str, value: &str) -> HrError {
    HrError::EmployeeAlreadyExists {
        field: field.to_string(),
        value: value.to_string(),
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn insert(&self, employee: Employee) -> HrResult<Employee> {
        let mut employees = self.employees.write().await;

        if employees.contains_key(&employee.id) {
            return Err(already_exists("id", &employee.id));
        }
        for existing in employees.values() {
            if existing.email == employee.email {
                return Err(already_exists("email", &employee.email));
            }
            if existing.nic == employee.nic {
                return Err(already_exists("nic", &employee.nic));
            }
        }

        employees.insert(employee.id.clone(), employee.clone());
        Ok(employee)
    }

    async fn exists(&self, id: &str) -> HrResult<bool> {
        let employees = self.employees.read().await;
        Ok(employees.contains_key(id))
    }

    async fn find_by_id(&self, id: &str) -> HrResult<Option<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> HrResult<Option<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.values().find(|e| e.email == email).cloned())
    }

    async fn find_by_nic(&self, nic: &str) -> HrResult<Option<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.values().find(|e| e.nic == nic).cloned())
    }

    async fn find_all(&self) -> HrResult<Vec<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.values().cloned().collect())
    }

    async fn find_by_department(&self, department_id: &str) -> HrResult<Vec<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees
            .values()
            .filter(|e| e.department_id == department_id)
            .cloned()
            .collect())
    }

    async fn update(&self, employee: Employee) -> HrResult<Employee> {
        let mut employees = self.employees.write().await;

        let email_taken = employees
            .values()
            .any(|e| e.id != employee.id && e.email == employee.email);
        if email_taken {
            return Err(already_exists("email", &employee.email));
        }

        match employees.get_mut(&employee.id) {
            Some(existing) => {
                *existing = employee.clone();
                Ok(employee)
            }
            None => Err(HrError::EmployeeNotFound { id: employee.id }),
        }
    }

    async fn delete(&self, id: &str) -> HrResult<bool> {
        let mut employees = self.employees.write().await;
        Ok(employees.remove(id).is_some())
    }
}
