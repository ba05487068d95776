//! Availability slot entity

use chrono::{NaiveDate, NaiveTime};

use crate::value_objects::SlotStatus;

/// A guide-declared window during which they can be booked
///
/// Unique per (guide, day, start time); the storage layer enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilitySlot {
    pub id: i64,
    pub license_no: String,
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: SlotStatus,
}

impl AvailabilitySlot {
    /// Whether the window is well formed (strictly positive duration)
    pub fn has_valid_window(&self) -> bool {
        self.end_time > self.start_time
    }
}
