//! Core data models for the HR payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod audit;
mod date_range;
mod department;
mod employee;
mod salary;

pub use attendance::{AttendanceRecord, AttendanceStatus, AttendanceUpdate, NewAttendance};
pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use date_range::DateRange;
pub use department::{
    DEPARTMENT_ID_LENGTH, Department, DepartmentPayConfig, DepartmentUpdate, NewDepartment,
    derive_department_id,
};
pub use employee::{Employee, EmployeeUpdate, NewEmployee, Role, age_on, next_employee_id};
pub use salary::{SalaryDraft, SalaryRecord, SalaryRequest};
