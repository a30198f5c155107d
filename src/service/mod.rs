//! Domain services.
//!
//! Each service holds shared store handles and is cheap to clone.

mod attendance;
mod department;
mod employee;
mod payroll;

pub use attendance::AttendanceService;
pub use department::DepartmentService;
pub use employee::EmployeeService;
pub use payroll::PayrollEngine;
