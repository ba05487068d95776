//! Request identity
//!
//! The authenticated caller of an operation, threaded explicitly through
//! service calls instead of living in ambient session state.

use super::Role;

/// Authenticated identity performing an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// License number of the authenticated guide
    pub license_no: String,
    /// Role carried by the session
    pub role: Role,
}

impl Actor {
    pub fn new(license_no: impl Into<String>, role: Role) -> Self {
        Self {
            license_no: license_no.into(),
            role,
        }
    }

    /// Check whether the actor may administer other accounts
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
