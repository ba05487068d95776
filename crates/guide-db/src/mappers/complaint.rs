//! Complaint model <-> entity mapper

use guide_core::entities::Complaint;

use crate::models::ComplaintModel;

impl From<ComplaintModel> for Complaint {
    fn from(model: ComplaintModel) -> Self {
        Complaint {
            id: model.id,
            license_no: model.license_no,
            guide_name: model.guide_name,
            description: model.description,
            reporter: model.reporter,
            status: model.status.parse().unwrap_or_default(),
            created_at: model.created_at,
        }
    }
}
