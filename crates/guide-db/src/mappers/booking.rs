//! Booking model <-> entity mapper

use guide_core::entities::Booking;

use crate::models::BookingModel;

impl From<BookingModel> for Booking {
    fn from(model: BookingModel) -> Self {
        Booking {
            id: model.id,
            license_no: model.license_no,
            day: model.day,
            start_time: model.start_time,
            duration_hours: model.duration_hours,
            total_rate: model.total_rate,
            client_name: model.client_name,
            client_email: model.client_email,
            status: model.status.parse().unwrap_or_default(),
        }
    }
}
