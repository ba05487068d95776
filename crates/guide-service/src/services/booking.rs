//! Booking service
//!
//! Booking history reads for guides; record creation and status changes are
//! admin operations.

use guide_core::entities::Booking;
use guide_core::value_objects::BookingStatus;
use guide_core::{Actor, DomainError};
use tracing::{info, instrument};

use crate::dto::{BookingResponse, CreateBookingRequest};

use super::catalog::require_admin;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Booking service
pub struct BookingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BookingService<'a> {
    /// Create a new BookingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the authenticated guide's booking history, newest first
    #[instrument(skip(self), fields(license_no = %actor.license_no))]
    pub async fn list_own(&self, actor: &Actor) -> ServiceResult<Vec<BookingResponse>> {
        let bookings = self
            .ctx
            .booking_repo()
            .list_for_guide(&actor.license_no)
            .await?;

        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    /// Record a booking on behalf of a client (admin)
    ///
    /// The total rate is derived from the guide's hourly base rate; guides
    /// without a published rate book at zero.
    #[instrument(skip(self, request), fields(admin = %actor.license_no))]
    pub async fn record(
        &self,
        actor: &Actor,
        request: CreateBookingRequest,
    ) -> ServiceResult<BookingResponse> {
        require_admin(actor)?;

        let guide = self
            .ctx
            .guide_repo()
            .find_by_license(&request.license_no)
            .await?
            .ok_or_else(|| DomainError::GuideNotFound(request.license_no.clone()))?;

        let total_rate = guide.base_rate.unwrap_or(0.0) * request.duration_hours;

        let booking = Booking {
            id: 0,
            license_no: guide.license_no,
            day: request.day,
            start_time: request.start_time,
            duration_hours: request.duration_hours,
            total_rate,
            client_name: request.client_name,
            client_email: request.client_email,
            status: BookingStatus::Confirmed,
        };

        let created = self.ctx.booking_repo().create(&booking).await?;

        info!(
            booking_id = created.id,
            license_no = %created.license_no,
            "Booking recorded"
        );

        Ok(BookingResponse::from(created))
    }

    /// Update a booking status (admin)
    #[instrument(skip(self), fields(admin = %actor.license_no))]
    pub async fn update_status(
        &self,
        actor: &Actor,
        booking_id: i64,
        status: BookingStatus,
    ) -> ServiceResult<()> {
        require_admin(actor)?;

        self.ctx
            .booking_repo()
            .update_status(booking_id, status)
            .await?;

        info!(booking_id, status = %status, "Booking status updated");

        Ok(())
    }
}
