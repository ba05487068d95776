//! Authentication service
//!
//! Handles guide registration, login, and token-based identity lookup.

use guide_common::auth::{hash_password, validate_password_strength, verify_password};
use guide_common::AppError;
use guide_core::entities::Guide;
use guide_core::{Actor, DomainError};
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, GuideResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new guide account
    ///
    /// New accounts start unapproved unless auto-approval is configured.
    #[instrument(skip(self, request), fields(license_no = %request.license_no))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<GuideResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Check if the license is already registered
        if self
            .ctx
            .guide_repo()
            .license_exists(&request.license_no)
            .await?
        {
            return Err(DomainError::LicenseAlreadyRegistered(request.license_no).into());
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let mut guide = Guide::new(request.license_no, request.name);
        guide.phone = request.phone;
        guide.email = request.email;
        guide.base_rate = request.base_rate;
        guide.approved = self.ctx.auto_approve_registrations();

        // Save to database
        self.ctx.guide_repo().create(&guide, &password_hash).await?;

        info!(
            license_no = %guide.license_no,
            approved = guide.approved,
            "Guide registered successfully"
        );

        Ok(GuideResponse::from(guide))
    }

    /// Login with license number and password
    ///
    /// Wrong license and wrong password are indistinguishable to the caller;
    /// a correct password on an unapproved account is a distinct soft reject.
    #[instrument(skip(self, request), fields(license_no = %request.license_no))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let guide = self
            .ctx
            .guide_repo()
            .find_by_license(&request.license_no)
            .await?
            .ok_or_else(|| {
                warn!(license_no = %request.license_no, "Login failed: unknown license");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .guide_repo()
            .get_password_hash(&guide.license_no)
            .await?
            .ok_or_else(|| {
                warn!(license_no = %guide.license_no, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(license_no = %guide.license_no, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        if !guide.can_login() {
            warn!(license_no = %guide.license_no, "Login rejected: account pending approval");
            return Err(DomainError::AccountPendingApproval.into());
        }

        let token = self
            .ctx
            .jwt_service()
            .issue_token(&guide.license_no, guide.role)
            .map_err(ServiceError::from)?;

        info!(license_no = %guide.license_no, "Guide logged in successfully");

        Ok(AuthResponse::new(
            token,
            self.ctx.jwt_service().token_expiry(),
            GuideResponse::from(guide),
        ))
    }

    /// Validate an access token and return the identity it carries
    #[instrument(skip(self, token))]
    pub fn validate_token(&self, token: &str) -> ServiceResult<Actor> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_token(token)
            .map_err(ServiceError::from)?;

        Ok(claims.actor())
    }
}
