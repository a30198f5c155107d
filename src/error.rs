//! Error types for the HR payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing salaries and
//! maintaining HR records.

use chrono::NaiveDate;
use thiserror::Error;

/// Coarse classification of an [`HrError`].
///
/// Callers that expose the engine over a transport (HTTP, RPC, CLI) map
/// these onto their own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced record does not exist.
    NotFound,
    /// The operation would violate a uniqueness or referential constraint.
    Conflict,
    /// The request itself is malformed or inconsistent.
    InvalidInput,
    /// The caller's role does not permit the operation.
    Forbidden,
    /// A server-side failure (configuration, arithmetic, storage).
    Internal,
}

/// The main error type for the HR payroll engine.
///
/// # Example
///
/// ```
/// use hr_payroll::error::{ErrorKind, HrError};
///
/// let error = HrError::DepartmentNotFound {
///     id: "ENGI".to_string(),
/// };
/// assert_eq!(error.to_string(), "Department not found with id: ENGI");
/// assert_eq!(error.kind(), ErrorKind::NotFound);
/// ```
#[derive(Debug, Error)]
pub enum HrError {
    /// No employee exists with the given id.
    #[error("Employee not found with id: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// No department exists with the given id.
    #[error("Department not found with id: {id}")]
    DepartmentNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// No salary snapshot exists with the given id.
    #[error("Salary not found with id: {id}")]
    SalaryNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// No attendance record matched the lookup.
    #[error("Attendance not found: {reference}")]
    AttendanceNotFound {
        /// A description of the lookup (record id or employee and date).
        reference: String,
    },

    /// An employee with the same unique field already exists.
    #[error("Employee with {field} {value} already exists")]
    EmployeeAlreadyExists {
        /// The unique field that collided ("email" or "nic").
        field: String,
        /// The colliding value.
        value: String,
    },

    /// A department with the derived id already exists.
    #[error("Department with id {id} already exists")]
    DepartmentAlreadyExists {
        /// The derived department id.
        id: String,
    },

    /// The employee already has an attendance record on that date.
    #[error("Attendance already exists for employee id: {employee_id} on date: {date}")]
    AttendanceAlreadyExists {
        /// The employee id.
        employee_id: String,
        /// The date of the existing record.
        date: NaiveDate,
    },

    /// The department still has employees assigned to it.
    #[error("Department {id} still has employees assigned")]
    DepartmentInUse {
        /// The department id.
        id: String,
    },

    /// The start of a date range falls after its end.
    #[error("Start date {start} cannot be after end date {end}")]
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// An attendance entry contained inconsistent data.
    #[error("Invalid attendance: {message}")]
    InvalidAttendance {
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A department field was invalid.
    #[error("Invalid department field '{field}': {message}")]
    InvalidDepartment {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The caller's role does not allow the requested action.
    #[error("Role {role} is not allowed to {action}")]
    Forbidden {
        /// The caller's role.
        role: String,
        /// The action that was refused.
        action: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A salary calculation could not be completed.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// The backing store failed.
    #[error("Store error: {message}")]
    Store {
        /// A description of the storage failure.
        message: String,
    },
}

impl HrError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HrError::EmployeeNotFound { .. }
            | HrError::DepartmentNotFound { .. }
            | HrError::SalaryNotFound { .. }
            | HrError::AttendanceNotFound { .. } => ErrorKind::NotFound,
            HrError::EmployeeAlreadyExists { .. }
            | HrError::DepartmentAlreadyExists { .. }
            | HrError::AttendanceAlreadyExists { .. }
            | HrError::DepartmentInUse { .. } => ErrorKind::Conflict,
            HrError::InvalidDateRange { .. }
            | HrError::InvalidAttendance { .. }
            | HrError::InvalidDepartment { .. } => ErrorKind::InvalidInput,
            HrError::Forbidden { .. } => ErrorKind::Forbidden,
            HrError::ConfigNotFound { .. }
            | HrError::ConfigParseError { .. }
            | HrError::CalculationError { .. }
            | HrError::Store { .. } => ErrorKind::Internal,
        }
    }

    /// Returns true if the error was caused by the caller's input and
    /// retrying the same request cannot succeed.
    pub fn is_client_error(&self) -> bool {
        self.kind() != ErrorKind::Internal
    }
}

/// A type alias for Results that return HrError.
pub type HrResult<T> = Result<T, HrError>;
