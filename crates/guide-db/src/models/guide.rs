//! Guide database models

use chrono::{DateTime, NaiveTime, Utc};
use sqlx::FromRow;

/// Database model for the guides table
#[derive(Debug, Clone, FromRow)]
pub struct GuideModel {
    pub license_no: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub base_rate: Option<f64>,
    pub role: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Row shape produced by the availability search join
#[derive(Debug, Clone, FromRow)]
pub struct SearchRowModel {
    pub license_no: String,
    pub name: String,
    pub phone: Option<String>,
    pub base_rate: Option<f64>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
