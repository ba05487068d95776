//! Complaint database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the complaints table, joined with the guide name
#[derive(Debug, Clone, FromRow)]
pub struct ComplaintModel {
    pub id: i64,
    pub license_no: String,
    pub guide_name: String,
    pub description: String,
    pub reporter: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
