//! Guide model <-> entity mappers

use guide_core::entities::Guide;
use guide_core::traits::SearchRow;
use guide_core::Role;

use crate::models::{GuideModel, SearchRowModel};

impl From<GuideModel> for Guide {
    fn from(model: GuideModel) -> Self {
        Guide {
            license_no: model.license_no,
            name: model.name,
            phone: model.phone,
            email: model.email,
            bio: model.bio,
            base_rate: model.base_rate,
            // The role column carries a CHECK constraint, so a parse
            // failure can only mean schema drift; fall back to guide.
            role: model.role.parse().unwrap_or(Role::Guide),
            approved: model.approved,
            created_at: model.created_at,
        }
    }
}

impl From<SearchRowModel> for SearchRow {
    fn from(model: SearchRowModel) -> Self {
        SearchRow {
            license_no: model.license_no,
            name: model.name,
            phone: model.phone,
            base_rate: model.base_rate,
            start_time: model.start_time,
            end_time: model.end_time,
        }
    }
}
