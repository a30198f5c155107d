//! Employee model and related types.
//!
//! This module defines the Employee struct and Role enum for representing
//! staff records, along with the pure derivations (age, employee id) that
//! are computed before a record is stored.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The access role held by an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Human-resources staff.
    Hr,
    /// Regular employee.
    User,
}

impl Role {
    /// Returns the wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Hr => "HR",
            Role::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a member of staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Identifier: the department id followed by a sequence number (e.g. "ENGI3").
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// National identity number; unique across employees.
    pub nic: String,
    /// Gender as recorded by HR.
    pub gender: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email; unique across employees.
    pub email: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Date of birth.
    pub birthday: NaiveDate,
    /// The department the employee belongs to.
    pub department_id: String,
    /// The employee's access role.
    pub role: Role,
}

impl Employee {
    /// Returns the employee's age in whole years on the given date.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_payroll::models::{Employee, Role};
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "ENGI1".to_string(),
    ///     first_name: "Ada".to_string(),
    ///     last_name: "Perera".to_string(),
    ///     nic: "901234567V".to_string(),
    ///     gender: "Female".to_string(),
    ///     phone: "0771234567".to_string(),
    ///     email: "ada@company.com".to_string(),
    ///     address: String::new(),
    ///     birthday: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
    ///     department_id: "ENGI".to_string(),
    ///     role: Role::User,
    /// };
    /// assert_eq!(employee.age_on(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()), 34);
    /// assert_eq!(employee.age_on(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()), 35);
    /// ```
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        age_on(self.birthday, today)
    }

    /// Returns "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input for creating an employee. The id is assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// National identity number.
    pub nic: String,
    /// Gender as recorded by HR.
    pub gender: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Date of birth.
    pub birthday: NaiveDate,
    /// The department to place the employee in.
    pub department_id: String,
    /// The role to grant.
    pub role: Role,
}

impl NewEmployee {
    /// Builds the employee record with the assigned id.
    pub fn into_employee(self, id: String) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            nic: self.nic,
            gender: self.gender,
            phone: self.phone,
            email: self.email,
            address: self.address,
            birthday: self.birthday,
            department_id: self.department_id,
            role: self.role,
        }
    }
}

/// Partial update of an employee's contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    /// Replacement phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Replacement email.
    #[serde(default)]
    pub email: Option<String>,
    /// Replacement address.
    #[serde(default)]
    pub address: Option<String>,
}

impl EmployeeUpdate {
    /// Applies the supplied fields to an employee.
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(phone) = &self.phone {
            employee.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            employee.email = email.clone();
        }
        if let Some(address) = &self.address {
            employee.address = address.clone();
        }
    }
}

/// Whole years elapsed between `birthday` and `today`.
///
/// Returns 0 when `today` is before the birthday.
pub fn age_on(birthday: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birthday.year();
    if (today.month(), today.day()) < (birthday.month(), birthday.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Computes the next employee id for a department.
///
/// The id is the department id followed by one more than the highest
/// numeric suffix among `existing_ids` that carry the same prefix.
///
/// # Example
///
/// ```
/// use hr_payroll::models::next_employee_id;
///
/// assert_eq!(next_employee_id("ENGI", ["ENGI1", "ENGI7", "ENGI3"]), "ENGI8");
/// assert_eq!(next_employee_id("FINA", Vec::<&str>::new()), "FINA1");
/// ```
pub fn next_employee_id<'a, I>(department_id: &str, existing_ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let highest = existing_ids
        .into_iter()
        .filter_map(|id| id.strip_prefix(department_id))
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    format!("{}{}", department_id, highest + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_employee(role: Role) -> Employee {
        Employee {
            id: "ENGI1".to_string(),
            first_name: "Nimal".to_string(),
            last_name: "Silva".to_string(),
            nic: "881234567V".to_string(),
            gender: "Male".to_string(),
            phone: "0711234567".to_string(),
            email: "nimal@company.com".to_string(),
            address: "12 Main Street".to_string(),
            birthday: date(1988, 2, 29),
            department_id: "ENGI".to_string(),
            role,
        }
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "FINA2",
            "first_name": "Kamala",
            "last_name": "Fernando",
            "nic": "921234567V",
            "gender": "Female",
            "phone": "0777654321",
            "email": "kamala@company.com",
            "birthday": "1992-11-03",
            "department_id": "FINA",
            "role": "HR"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "FINA2");
        assert_eq!(employee.role, Role::Hr);
        assert_eq!(employee.address, "");
        assert_eq!(employee.birthday, date(1992, 11, 3));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(serde_json::to_string(&Role::Hr).unwrap(), "\"HR\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"USER\"");
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let employee = create_test_employee(Role::User);
        assert_eq!(employee.age_on(date(2025, 2, 28)), 36);
        assert_eq!(employee.age_on(date(2025, 3, 1)), 37);
    }

    #[test]
    fn test_age_is_zero_before_birth() {
        assert_eq!(age_on(date(2000, 1, 1), date(1999, 12, 31)), 0);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(create_test_employee(Role::User).full_name(), "Nimal Silva");
    }

    #[test]
    fn test_next_employee_id_ignores_other_departments() {
        let ids = ["ENGI1", "ENGI2", "FINA9"];
        assert_eq!(next_employee_id("ENGI", ids), "ENGI3");
    }

    #[test]
    fn test_next_employee_id_skips_non_numeric_suffix() {
        let ids = ["ENGI4", "ENGIX"];
        assert_eq!(next_employee_id("ENGI", ids), "ENGI5");
    }

    #[test]
    fn test_update_applies_only_supplied_fields() {
        let mut employee = create_test_employee(Role::User);
        let update = EmployeeUpdate {
            phone: Some("0700000000".to_string()),
            email: None,
            address: None,
        };
        update.apply_to(&mut employee);
        assert_eq!(employee.phone, "0700000000");
        assert_eq!(employee.email, "nimal@company.com");
    }
}
