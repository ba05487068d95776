//! Booking entity - a historical reservation record

use chrono::{NaiveDate, NaiveTime};

use crate::value_objects::BookingStatus;

/// Reservation record; read-only history from the guide's perspective
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub license_no: String,
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_hours: f64,
    pub total_rate: f64,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub status: BookingStatus,
}
