//! Administration service
//!
//! Account oversight: listing, approval, role changes, deletion, and the
//! primary admin seeded from configuration at startup.

use guide_common::auth::hash_password;
use guide_common::config::AdminSeedConfig;
use guide_core::entities::Guide;
use guide_core::{Actor, DomainError, Role};
use tracing::{info, instrument};

use crate::dto::GuideResponse;

use super::catalog::require_admin;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Administration service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Insert the configured primary admin account if it does not exist
    ///
    /// Idempotent; called once at startup before the server accepts traffic.
    #[instrument(skip(self, config), fields(license_no = %config.license_no))]
    pub async fn seed_primary_admin(&self, config: &AdminSeedConfig) -> ServiceResult<()> {
        if self
            .ctx
            .guide_repo()
            .license_exists(&config.license_no)
            .await?
        {
            return Ok(());
        }

        let password_hash =
            hash_password(&config.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let mut admin = Guide::new(config.license_no.clone(), config.name.clone());
        admin.role = Role::Admin;
        admin.approved = true;

        self.ctx.guide_repo().create(&admin, &password_hash).await?;

        info!(license_no = %config.license_no, "Primary admin seeded");

        Ok(())
    }

    /// List every guide account, newest first (admin)
    #[instrument(skip(self), fields(admin = %actor.license_no))]
    pub async fn list_guides(&self, actor: &Actor) -> ServiceResult<Vec<GuideResponse>> {
        require_admin(actor)?;

        let guides = self.ctx.guide_repo().list_all().await?;
        Ok(guides.into_iter().map(GuideResponse::from).collect())
    }

    /// Approve or reject a guide account (admin)
    ///
    /// Rejection returns the account to the unapproved state; it does not
    /// delete anything.
    #[instrument(skip(self), fields(admin = %actor.license_no))]
    pub async fn set_approval(
        &self,
        actor: &Actor,
        license_no: &str,
        approved: bool,
    ) -> ServiceResult<()> {
        require_admin(actor)?;

        self.ctx
            .guide_repo()
            .set_approval(license_no, approved)
            .await?;

        info!(license_no, approved, "Approval flag updated");

        Ok(())
    }

    /// Change a guide account role (admin)
    ///
    /// Demoting the seeded primary admin fails closed, leaving the role
    /// unchanged.
    #[instrument(skip(self), fields(admin = %actor.license_no))]
    pub async fn set_role(&self, actor: &Actor, license_no: &str, role: Role) -> ServiceResult<()> {
        require_admin(actor)?;

        if license_no == self.ctx.primary_admin_license() && role != Role::Admin {
            return Err(DomainError::PrimaryAdminImmutable.into());
        }

        self.ctx.guide_repo().set_role(license_no, role).await?;

        info!(license_no, role = %role, "Role updated");

        Ok(())
    }

    /// Delete a guide account; dependent rows cascade (admin)
    ///
    /// The seeded primary admin cannot be deleted.
    #[instrument(skip(self), fields(admin = %actor.license_no))]
    pub async fn delete_guide(&self, actor: &Actor, license_no: &str) -> ServiceResult<()> {
        require_admin(actor)?;

        if license_no == self.ctx.primary_admin_license() {
            return Err(DomainError::PrimaryAdminImmutable.into());
        }

        self.ctx.guide_repo().delete(license_no).await?;

        info!(license_no, "Guide account deleted");

        Ok(())
    }
}
