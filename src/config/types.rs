//! Configuration types for the HR payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::calculation::DeductionPolicy;
use crate::models::NewDepartment;

/// Organisation-wide payroll settings from payroll.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollSettings {
    /// The organisation the payroll runs for.
    pub organization: String,
    /// ISO 4217 code of the currency all amounts are expressed in.
    pub currency: String,
    /// Per-day attendance penalties.
    #[serde(default)]
    pub deductions: DeductionPolicy,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            organization: "HR Payroll".to_string(),
            currency: "LKR".to_string(),
            deductions: DeductionPolicy::default(),
        }
    }
}

/// Departments configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentsConfig {
    /// Departments created at start-up.
    #[serde(default)]
    pub departments: Vec<NewDepartment>,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    settings: PayrollSettings,
    departments: Vec<NewDepartment>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(settings: PayrollSettings, departments: Vec<NewDepartment>) -> Self {
        Self {
            settings,
            departments,
        }
    }

    /// Returns the payroll settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Returns the deduction policy applied to every salary computation.
    pub fn deduction_policy(&self) -> &DeductionPolicy {
        &self.settings.deductions
    }

    /// Returns the departments to seed.
    pub fn departments(&self) -> &[NewDepartment] {
        &self.departments
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self::new(PayrollSettings::default(), Vec::new())
    }
}
