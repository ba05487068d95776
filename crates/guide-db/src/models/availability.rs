//! Availability database model

use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;

/// Database model for the availability table
#[derive(Debug, Clone, FromRow)]
pub struct AvailabilityModel {
    pub id: i64,
    pub license_no: String,
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
}
