//! Department model and its pay configuration.

use serde::{Deserialize, Serialize};

/// Length of the name prefix used as a department id.
pub const DEPARTMENT_ID_LENGTH: usize = 4;

/// A department and the pay parameters shared by its employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Department id, derived from the name (e.g. "ENGI").
    pub id: String,
    /// Human-readable department name.
    pub name: String,
    /// Base salary for the pay period, in whole currency units.
    pub base_salary: i64,
    /// Amount paid per overtime hour, in whole currency units.
    pub overtime_rate: i64,
}

impl Department {
    /// Returns the two pay fields the payroll engine reads.
    pub fn pay_config(&self) -> DepartmentPayConfig {
        DepartmentPayConfig {
            department_id: self.id.clone(),
            base_salary: self.base_salary,
            overtime_rate: self.overtime_rate,
        }
    }
}

/// The read-only view of a department used by salary computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentPayConfig {
    /// The department id.
    pub department_id: String,
    /// Base salary in whole currency units.
    pub base_salary: i64,
    /// Currency units per overtime hour.
    pub overtime_rate: i64,
}

/// Input for creating a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDepartment {
    /// Department name; the id is derived from it.
    pub name: String,
    /// Base salary in whole currency units.
    pub base_salary: i64,
    /// Currency units per overtime hour.
    pub overtime_rate: i64,
}

impl NewDepartment {
    /// Builds the department that will be stored, deriving its id.
    pub fn into_department(self) -> Department {
        Department {
            id: derive_department_id(&self.name),
            name: self.name,
            base_salary: self.base_salary,
            overtime_rate: self.overtime_rate,
        }
    }
}

/// Partial update of a department's pay parameters.
///
/// Values that are absent or not greater than zero leave the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentUpdate {
    /// Replacement base salary.
    #[serde(default)]
    pub base_salary: Option<i64>,
    /// Replacement overtime rate.
    #[serde(default)]
    pub overtime_rate: Option<i64>,
}

impl DepartmentUpdate {
    /// Applies the positive values of this update to a department.
    pub fn apply_to(&self, department: &mut Department) {
        if let Some(salary) = self.base_salary.filter(|s| *s > 0) {
            department.base_salary = salary;
        }
        if let Some(rate) = self.overtime_rate.filter(|r| *r > 0) {
            department.overtime_rate = rate;
        }
    }
}

/// Derives a department id from its name.
///
/// The id is the upper-cased name truncated to [`DEPARTMENT_ID_LENGTH`]
/// characters.
///
/// # Example
///
/// ```
/// use hr_payroll::models::derive_department_id;
///
/// assert_eq!(derive_department_id("Engineering"), "ENGI");
/// assert_eq!(derive_department_id("Ops"), "OPS");
/// ```
pub fn derive_department_id(name: &str) -> String {
    name.to_uppercase()
        .chars()
        .take(DEPARTMENT_ID_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_department() -> Department {
        Department {
            id: "ENGI".to_string(),
            name: "Engineering".to_string(),
            base_salary: 40000,
            overtime_rate: 170,
        }
    }

    #[test]
    fn test_derive_id_truncates_and_uppercases() {
        assert_eq!(derive_department_id("finance"), "FINA");
        assert_eq!(derive_department_id("HR"), "HR");
        assert_eq!(derive_department_id("Sales and Marketing"), "SALE");
    }

    #[test]
    fn test_new_department_derives_id() {
        let department = NewDepartment {
            name: "Marketing".to_string(),
            base_salary: 35000,
            overtime_rate: 150,
        }
        .into_department();
        assert_eq!(department.id, "MARK");
        assert_eq!(department.name, "Marketing");
    }

    #[test]
    fn test_pay_config_snapshot() {
        let config = create_department().pay_config();
        assert_eq!(config.department_id, "ENGI");
        assert_eq!(config.base_salary, 40000);
        assert_eq!(config.overtime_rate, 170);
    }

    #[test]
    fn test_update_ignores_non_positive_values() {
        let mut department = create_department();
        let update = DepartmentUpdate {
            base_salary: Some(0),
            overtime_rate: Some(-5),
        };
        update.apply_to(&mut department);
        assert_eq!(department, create_department());
    }

    #[test]
    fn test_update_applies_positive_values() {
        let mut department = create_department();
        let update = DepartmentUpdate {
            base_salary: Some(45000),
            overtime_rate: None,
        };
        update.apply_to(&mut department);
        assert_eq!(department.base_salary, 45000);
        assert_eq!(department.overtime_rate, 170);
    }
}
