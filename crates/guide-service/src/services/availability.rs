//! Availability service
//!
//! Guides publish, list, and retract their bookable time slots.

use chrono::Utc;
use guide_core::entities::AvailabilitySlot;
use guide_core::value_objects::SlotStatus;
use guide_core::{Actor, DomainError};
use tracing::{info, instrument};

use crate::dto::{CreateSlotRequest, SlotResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Availability service
pub struct AvailabilityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AvailabilityService<'a> {
    /// Create a new AvailabilityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a new availability slot for the authenticated guide
    ///
    /// Past dates and inverted time windows are rejected before storage is
    /// touched; duplicate (day, start) pairs surface as a conflict.
    #[instrument(skip(self, request), fields(license_no = %actor.license_no))]
    pub async fn add_slot(
        &self,
        actor: &Actor,
        request: CreateSlotRequest,
    ) -> ServiceResult<SlotResponse> {
        let today = Utc::now().date_naive();
        if request.day < today {
            return Err(DomainError::DateInPast(request.day).into());
        }

        let slot = AvailabilitySlot {
            id: 0,
            license_no: actor.license_no.clone(),
            day: request.day,
            start_time: request.start_time,
            end_time: request.end_time,
            status: SlotStatus::Available,
        };

        if !slot.has_valid_window() {
            return Err(DomainError::InvalidTimeWindow.into());
        }

        let created = self.ctx.availability_repo().create(&slot).await?;

        info!(
            license_no = %actor.license_no,
            slot_id = created.id,
            day = %created.day,
            "Availability slot published"
        );

        Ok(SlotResponse::from(created))
    }

    /// List the authenticated guide's slots from today onward
    #[instrument(skip(self), fields(license_no = %actor.license_no))]
    pub async fn list_slots(&self, actor: &Actor) -> ServiceResult<Vec<SlotResponse>> {
        let today = Utc::now().date_naive();
        let slots = self
            .ctx
            .availability_repo()
            .list_from(&actor.license_no, today)
            .await?;

        Ok(slots.into_iter().map(SlotResponse::from).collect())
    }

    /// Retract one of the authenticated guide's slots
    #[instrument(skip(self), fields(license_no = %actor.license_no))]
    pub async fn delete_slot(&self, actor: &Actor, slot_id: i64) -> ServiceResult<()> {
        self.ctx
            .availability_repo()
            .delete(slot_id, &actor.license_no)
            .await?;

        info!(license_no = %actor.license_no, slot_id, "Availability slot deleted");

        Ok(())
    }
}
