use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::DepartmentStore;
use crate::error::{HrError, HrResult};
use crate::models::Department;

/// In-memory implementation of DepartmentStore using a BTreeMap keyed by id
#[derive(Clone)]
pub struct InMemoryDepartmentStore {
    departments: Arc<RwLock<BTreeMap<String, Department>>>,
}

impl InMemoryDepartmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            departments: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl Default for InMemoryDepartmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DepartmentStore for InMemoryDepartmentStore {
    async fn insert(&self, department: Department) -> HrResult<Department> {
        let mut departments = self.departments.write().await;
        if departments.contains_key(&department.id) {
            return Err(HrError::DepartmentAlreadyExists { id: department.id });
        }
        departments.insert(department.id.clone(), department.clone());
        Ok(department)
    }

    async fn find_by_id(&self, id: &str) -> HrResult<Option<Department>> {
        let departments = self.departments.read().await;
        Ok(departments.get(id).cloned())
    }

    async fn find_all(&self) -> HrResult<Vec<Department>> {
        let departments = self.departments.read().await;
        Ok(departments.values().cloned().collect())
    }

    async fn update(&self, department: Department) -> HrResult<Department> {
        let mut departments = self.departments.write().await;
        match departments.get_mut(&department.id) {
            Some(existing) => {
                *existing = department.clone();
                Ok(department)
            }
            None => Err(HrError::DepartmentNotFound { id: department.id }),
        }
    }

    async fn delete(&self, id: &str) -> HrResult<bool> {
        let mut departments = self.departments.write().await;
        Ok(departments.remove(id).is_some())
    }
}
