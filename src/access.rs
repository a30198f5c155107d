//! Caller context for role-gated operations.
//!
//! Authentication happens outside this crate. Services receive an explicit
//! [`Caller`] and check its role before doing any work.

use serde::{Deserialize, Serialize};

use crate::error::{HrError, HrResult};
use crate::models::Role;

/// The authenticated identity performing an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    /// Employee id of the caller.
    pub employee_id: String,
    /// Role the caller holds.
    pub role: Role,
}

impl Caller {
    /// Creates a caller context.
    pub fn new(employee_id: impl Into<String>, role: Role) -> Self {
        Self {
            employee_id: employee_id.into(),
            role,
        }
    }

    /// Fails with [`HrError::Forbidden`] unless the caller holds one of `roles`.
    pub fn require_any_role(&self, roles: &[Role], action: &str) -> HrResult<()> {
        if roles.contains(&self.role) {
            Ok(())
        } else {
            Err(forbidden(self.role, action))
        }
    }

    /// Fails with [`HrError::Forbidden`] unless the caller may create an
    /// employee with the given role.
    pub fn require_can_create(&self, role: Role) -> HrResult<()> {
        if can_create_role(self.role, role) {
            Ok(())
        } else {
            Err(forbidden(self.role, &format!("create {} users", role)))
        }
    }
}

/// Roles allowed to record and correct attendance.
pub const ATTENDANCE_MANAGERS: &[Role] = &[Role::Admin, Role::Hr];

/// Whether a user holding `creator` may create a user holding `target`.
///
/// ADMIN may create any role, HR may create USER only, USER may create
/// nobody.
///
/// # Example
///
/// ```
/// use hr_payroll::access::can_create_role;
/// use hr_payroll::models::Role;
///
/// assert!(can_create_role(Role::Admin, Role::Hr));
/// assert!(can_create_role(Role::Hr, Role::User));
/// assert!(!can_create_role(Role::Hr, Role::Admin));
/// assert!(!can_create_role(Role::User, Role::User));
/// ```
pub fn can_create_role(creator: Role, target: Role) -> bool {
    match creator {
        Role::Admin => true,
        Role::Hr => target == Role::User,
        Role::User => false,
    }
}

fn forbidden(role: Role, action: &str) -> HrError {
    HrError::Forbidden {
        role: role.to_string(),
        action: action.to_string(),
    }
}
