//! Complaint entity - a ticket filed against a guide

use chrono::{DateTime, Utc};

use crate::value_objects::ComplaintStatus;

/// Complaint ticket targeting a guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complaint {
    pub id: i64,
    pub license_no: String,
    /// Display name of the target guide, joined in at read time
    pub guide_name: String,
    pub description: String,
    /// Reporter identity, "Anonymous" when filed without one
    pub reporter: String,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
}
