//! Persistence seam for HR records.
//!
//! Services talk to storage only through the traits in this module. The
//! in-memory implementations back tests and embedded use; a database-backed
//! implementation plugs in behind the same traits.

mod in_memory_attendance_store;
mod in_memory_department_store;
mod in_memory_employee_store;
mod in_memory_salary_store;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::HrResult;
use crate::models::{
    AttendanceRecord, AttendanceStatus, Department, Employee, NewAttendance, SalaryDraft,
    SalaryRecord,
};

pub use in_memory_attendance_store::InMemoryAttendanceStore;
pub use in_memory_department_store::InMemoryDepartmentStore;
pub use in_memory_employee_store::InMemoryEmployeeStore;
pub use in_memory_salary_store::InMemorySalaryStore;

/// Attendance entry persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Inserts a new entry and assigns its id.
    ///
    /// Fails with `AttendanceAlreadyExists` if the employee already has an
    /// entry on that date. The check and the insert are atomic.
    async fn insert(&self, attendance: NewAttendance) -> HrResult<AttendanceRecord>;

    /// Replaces an existing entry. Fails with `AttendanceNotFound` if missing.
    async fn update(&self, record: AttendanceRecord) -> HrResult<AttendanceRecord>;

    /// Gets an entry by id.
    async fn find_by_id(&self, id: u64) -> HrResult<Option<AttendanceRecord>>;

    /// Gets the entry of one employee on one date.
    async fn find_by_employee_and_date(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> HrResult<Option<AttendanceRecord>>;

    /// Lists every entry on a date.
    async fn find_by_date(&self, date: NaiveDate) -> HrResult<Vec<AttendanceRecord>>;

    /// Lists every entry on a date with the given status.
    async fn find_by_date_and_status(
        &self,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> HrResult<Vec<AttendanceRecord>>;

    /// Lists an employee's entries with `start <= date <= end`, ordered by date.
    async fn find_by_employee_and_range(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> HrResult<Vec<AttendanceRecord>>;

    /// Status-filtered variant of [`AttendanceStore::find_by_employee_and_range`].
    async fn find_by_employee_range_and_status(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        status: AttendanceStatus,
    ) -> HrResult<Vec<AttendanceRecord>>;

    /// Removes every entry of an employee, returning how many were removed.
    async fn delete_by_employee(&self, employee_id: &str) -> HrResult<usize>;
}

/// Department persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentStore: Send + Sync {
    /// Inserts a department. Fails with `DepartmentAlreadyExists` on id collision.
    async fn insert(&self, department: Department) -> HrResult<Department>;

    /// Gets a department by id.
    async fn find_by_id(&self, id: &str) -> HrResult<Option<Department>>;

    /// Lists every department ordered by id.
    async fn find_all(&self) -> HrResult<Vec<Department>>;

    /// Replaces an existing department. Fails with `DepartmentNotFound` if missing.
    async fn update(&self, department: Department) -> HrResult<Department>;

    /// Removes a department, returning whether it existed.
    async fn delete(&self, id: &str) -> HrResult<bool>;
}

/// Employee persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Inserts an employee.
    ///
    /// Fails with `EmployeeAlreadyExists` if the id, email or NIC is taken.
    async fn insert(&self, employee: Employee) -> HrResult<Employee>;

    /// Returns whether an employee with this id exists.
    async fn exists(&self, id: &str) -> HrResult<bool>;

    /// Gets an employee by id.
    async fn find_by_id(&self, id: &str) -> HrResult<Option<Employee>>;

    /// Gets an employee by email.
    async fn find_by_email(&self, email: &str) -> HrResult<Option<Employee>>;

    /// Gets an employee by NIC.
    async fn find_by_nic(&self, nic: &str) -> HrResult<Option<Employee>>;

    /// Lists every employee ordered by id.
    async fn find_all(&self) -> HrResult<Vec<Employee>>;

    /// Lists the employees of one department ordered by id.
    async fn find_by_department(&self, department_id: &str) -> HrResult<Vec<Employee>>;

    /// Replaces an existing employee.
    ///
    /// Fails with `EmployeeNotFound` if missing, or `EmployeeAlreadyExists`
    /// if the new email belongs to another employee.
    async fn update(&self, employee: Employee) -> HrResult<Employee>;

    /// Removes an employee, returning whether it existed.
    async fn delete(&self, id: &str) -> HrResult<bool>;
}

/// Salary snapshot persistence. Snapshots are append-only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SalaryStore: Send + Sync {
    /// Persists a new snapshot and assigns its id.
    async fn save(&self, draft: SalaryDraft) -> HrResult<SalaryRecord>;

    /// Gets a snapshot by id.
    async fn find_by_id(&self, id: u64) -> HrResult<Option<SalaryRecord>>;

    /// Lists an employee's snapshots in insertion order.
    async fn find_by_employee(&self, employee_id: &str) -> HrResult<Vec<SalaryRecord>>;

    /// Removes every snapshot of an employee, returning how many were removed.
    async fn delete_by_employee(&self, employee_id: &str) -> HrResult<usize>;
}
