//! Booking database model

use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;

/// Database model for the bookings table
#[derive(Debug, Clone, FromRow)]
pub struct BookingModel {
    pub id: i64,
    pub license_no: String,
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_hours: f64,
    pub total_rate: f64,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub status: String,
}
