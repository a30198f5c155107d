//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::calculation::DeductionPolicy;
use crate::error::{HrError, HrResult};
use crate::models::{NewDepartment, derive_department_id};

use super::types::{DepartmentsConfig, PayrollConfig, PayrollSettings};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── payroll.yaml      # Organisation settings and deduction policy
/// └── departments.yaml  # Departments seeded at start-up
/// ```
///
/// # Example
///
/// ```no_run
/// use hr_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("No pay penalty: {}", loader.deduction_policy().no_pay_penalty);
/// # Ok::<(), hr_payroll::error::HrError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`HrError::ConfigNotFound`] if a required file is missing
    /// - [`HrError::ConfigParseError`] if a file contains invalid YAML, a
    ///   deduction penalty is negative, a seeded department is invalid, or
    ///   two seeded departments derive the same id
    pub fn load<P: AsRef<Path>>(path: P) -> HrResult<Self> {
        let path = path.as_ref();

        let payroll_path = path.join("payroll.yaml");
        let settings = Self::load_yaml::<PayrollSettings>(&payroll_path)?;
        Self::validate_deductions(&payroll_path, &settings.deductions)?;

        let departments_path = path.join("departments.yaml");
        let departments = Self::load_yaml::<DepartmentsConfig>(&departments_path)?;
        Self::validate_departments(&departments_path, &departments.departments)?;

        Ok(Self {
            config: PayrollConfig::new(settings, departments.departments),
        })
    }

    /// Builds a loader from in-memory parts without touching the filesystem.
    pub fn from_parts(settings: PayrollSettings, departments: Vec<NewDepartment>) -> Self {
        Self {
            config: PayrollConfig::new(settings, departments),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> HrResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| HrError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| HrError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_deductions(path: &Path, policy: &DeductionPolicy) -> HrResult<()> {
        if policy.no_pay_penalty < 0 || policy.half_day_penalty < 0 {
            return Err(HrError::ConfigParseError {
                path: path.display().to_string(),
                message: format!(
                    "deduction penalties must not be negative (no_pay: {}, half_day: {})",
                    policy.no_pay_penalty, policy.half_day_penalty
                ),
            });
        }
        Ok(())
    }

    fn validate_departments(path: &Path, departments: &[NewDepartment]) -> HrResult<()> {
        let parse_error = |message: String| HrError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        let mut seen = HashSet::new();
        for department in departments {
            if department.name.trim().is_empty() {
                return Err(parse_error("department name must not be empty".to_string()));
            }
            if department.base_salary < 0 || department.overtime_rate < 0 {
                return Err(parse_error(format!(
                    "department {} has a negative pay amount",
                    department.name
                )));
            }
            let id = derive_department_id(&department.name);
            if !seen.insert(id.clone()) {
                return Err(parse_error(format!("duplicate department id {}", id)));
            }
        }
        Ok(())
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the organisation-wide settings.
    pub fn settings(&self) -> &PayrollSettings {
        self.config.settings()
    }

    /// Returns the deduction policy.
    pub fn deduction_policy(&self) -> &DeductionPolicy {
        self.config.deduction_policy()
    }

    /// Returns the departments to seed at start-up.
    pub fn seed_departments(&self) -> &[NewDepartment] {
        self.config.departments()
    }
}
