//! Application state for the HR payroll engine.
//!
//! [`AppState`] wires the stores, services and configuration together so a
//! host application can share one value across request handlers or tasks.

use std::sync::Arc;

use tracing::info;

use crate::config::ConfigLoader;
use crate::error::HrResult;
use crate::service::{AttendanceService, DepartmentService, EmployeeService, PayrollEngine};
use crate::store::{
    AttendanceStore, DepartmentStore, EmployeeStore, InMemoryAttendanceStore,
    InMemoryDepartmentStore, InMemoryEmployeeStore, InMemorySalaryStore, SalaryStore,
};

/// The stores backing an [`AppState`].
#[derive(Clone)]
pub struct Stores {
    /// Employee records.
    pub employees: Arc<dyn EmployeeStore>,
    /// Department records.
    pub departments: Arc<dyn DepartmentStore>,
    /// Attendance entries.
    pub attendance: Arc<dyn AttendanceStore>,
    /// Salary snapshots.
    pub salaries: Arc<dyn SalaryStore>,
}

impl Stores {
    /// Fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            employees: Arc::new(InMemoryEmployeeStore::new()),
            departments: Arc::new(InMemoryDepartmentStore::new()),
            attendance: Arc::new(InMemoryAttendanceStore::new()),
            salaries: Arc::new(InMemorySalaryStore::new()),
        }
    }
}

/// Shared application state.
///
/// Cloning is cheap; every clone shares the same stores.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    payroll: PayrollEngine,
    attendance: AttendanceService,
    departments: DepartmentService,
    employees: EmployeeService,
}

impl AppState {
    /// Builds the services over the given stores.
    pub fn new(config: ConfigLoader, stores: Stores) -> Self {
        let payroll = PayrollEngine::new(
            stores.employees.clone(),
            stores.departments.clone(),
            stores.attendance.clone(),
            stores.salaries.clone(),
            *config.deduction_policy(),
        );
        let attendance = AttendanceService::new(
            stores.attendance.clone(),
            stores.employees.clone(),
            stores.departments.clone(),
        );
        let departments =
            DepartmentService::new(stores.departments.clone(), stores.employees.clone());
        let employees = EmployeeService::new(
            stores.employees,
            stores.departments,
            stores.attendance,
            stores.salaries,
        );

        Self {
            config: Arc::new(config),
            payroll,
            attendance,
            departments,
            employees,
        }
    }

    /// Builds in-memory state and seeds the configured departments.
    ///
    /// # Errors
    ///
    /// Fails if a configured department is invalid or two of them derive the
    /// same id.
    pub async fn in_memory(config: ConfigLoader) -> HrResult<Self> {
        let state = Self::new(config, Stores::in_memory());
        for department in state.config.seed_departments() {
            state.departments.add_department(department.clone()).await?;
        }
        info!(
            organization = %state.config.settings().organization,
            departments = state.config.seed_departments().len(),
            "In-memory state initialised"
        );
        Ok(state)
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// The payroll computation engine.
    pub fn payroll(&self) -> &PayrollEngine {
        &self.payroll
    }

    /// The attendance service.
    pub fn attendance(&self) -> &AttendanceService {
        &self.attendance
    }

    /// The department service.
    pub fn departments(&self) -> &DepartmentService {
        &self.departments
    }

    /// The employee service.
    pub fn employees(&self) -> &EmployeeService {
        &self.employees
    }
}
