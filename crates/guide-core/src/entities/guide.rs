//! Guide entity - a registered tour guide account

use chrono::{DateTime, NaiveTime, Utc};

use crate::value_objects::Role;

/// Guide account keyed by license number
///
/// The license number is the immutable business key; there is no surrogate id.
#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    pub license_no: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    /// Hourly base rate, kept from the legacy schema
    pub base_rate: Option<f64>,
    pub role: Role,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Guide {
    /// Create a freshly registered guide (unapproved, role = guide)
    pub fn new(license_no: String, name: String) -> Self {
        Self {
            license_no,
            name,
            phone: None,
            email: None,
            bio: None,
            base_rate: None,
            role: Role::Guide,
            approved: false,
            created_at: Utc::now(),
        }
    }

    /// Check whether this account may authenticate
    ///
    /// Admin accounts may always log in; plain guides must be approved first.
    pub fn can_login(&self) -> bool {
        self.approved || self.role.is_admin()
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Search result row: an approved guide with one availability slot
#[derive(Debug, Clone, PartialEq)]
pub struct GuideSummary {
    pub license_no: String,
    pub name: String,
    pub phone: Option<String>,
    pub base_rate: Option<f64>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Comma-joined names of every language the guide speaks
    pub languages: String,
}
