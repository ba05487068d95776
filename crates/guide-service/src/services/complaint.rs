//! Complaint service
//!
//! Public complaint filing plus admin and guide-scoped ticket views.

use guide_core::value_objects::ComplaintStatus;
use guide_core::Actor;
use tracing::{info, instrument};

use crate::dto::{ComplaintCreatedResponse, ComplaintResponse, CreateComplaintRequest};

use super::catalog::require_admin;
use super::context::ServiceContext;
use super::error::ServiceResult;

const ANONYMOUS_REPORTER: &str = "Anonymous";

/// Complaint service
pub struct ComplaintService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ComplaintService<'a> {
    /// Create a new ComplaintService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// File a complaint against a guide (public, no authentication)
    ///
    /// An unknown target guide surfaces as a recoverable not-found, never a
    /// generic storage fault.
    #[instrument(skip(self, request), fields(license_no = %request.license_no))]
    pub async fn file(
        &self,
        request: CreateComplaintRequest,
    ) -> ServiceResult<ComplaintCreatedResponse> {
        let reporter = request
            .reporter
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS_REPORTER.to_string());

        let id = self
            .ctx
            .complaint_repo()
            .create(&request.license_no, &request.description, &reporter)
            .await?;

        info!(complaint_id = id, license_no = %request.license_no, "Complaint filed");

        Ok(ComplaintCreatedResponse { id })
    }

    /// List complaints visible to the caller
    ///
    /// An admin sees every ticket; a guide sees only tickets targeting them.
    #[instrument(skip(self), fields(license_no = %actor.license_no))]
    pub async fn list_visible(&self, actor: &Actor) -> ServiceResult<Vec<ComplaintResponse>> {
        let complaints = if actor.is_admin() {
            self.ctx.complaint_repo().list_all().await?
        } else {
            self.ctx
                .complaint_repo()
                .list_for_guide(&actor.license_no)
                .await?
        };

        Ok(complaints.into_iter().map(ComplaintResponse::from).collect())
    }

    /// Update a ticket status (admin)
    #[instrument(skip(self), fields(admin = %actor.license_no))]
    pub async fn update_status(
        &self,
        actor: &Actor,
        complaint_id: i64,
        status: ComplaintStatus,
    ) -> ServiceResult<()> {
        require_admin(actor)?;

        self.ctx
            .complaint_repo()
            .update_status(complaint_id, status)
            .await?;

        info!(complaint_id, status = %status, "Complaint status updated");

        Ok(())
    }

    /// Delete a ticket (admin)
    #[instrument(skip(self), fields(admin = %actor.license_no))]
    pub async fn delete(&self, actor: &Actor, complaint_id: i64) -> ServiceResult<()> {
        require_admin(actor)?;

        self.ctx.complaint_repo().delete(complaint_id).await?;

        info!(complaint_id, "Complaint deleted");

        Ok(())
    }
}
