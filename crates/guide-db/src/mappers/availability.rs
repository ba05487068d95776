//! Availability model <-> entity mapper

use guide_core::entities::AvailabilitySlot;

use crate::models::AvailabilityModel;

impl From<AvailabilityModel> for AvailabilitySlot {
    fn from(model: AvailabilityModel) -> Self {
        AvailabilitySlot {
            id: model.id,
            license_no: model.license_no,
            day: model.day,
            start_time: model.start_time,
            end_time: model.end_time,
            status: model.status.parse().unwrap_or_default(),
        }
    }
}
