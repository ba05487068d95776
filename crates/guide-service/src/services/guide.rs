//! Guide profile service
//!
//! Self-service operations for the authenticated guide: profile reads and
//! updates, password changes, and the claimed-language set.

use std::collections::HashMap;

use guide_common::auth::{hash_password, validate_password_strength, verify_password};
use guide_common::AppError;
use guide_core::traits::LanguageAssignment;
use guide_core::{Actor, DomainError};
use tracing::{info, instrument};

use crate::dto::{
    ChangePasswordRequest, GuideLanguageResponse, GuideResponse, SetLanguagesRequest,
    UpdateProfileRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Guide profile service
pub struct GuideService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuideService<'a> {
    /// Create a new GuideService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch the authenticated guide's own profile
    #[instrument(skip(self), fields(license_no = %actor.license_no))]
    pub async fn get_profile(&self, actor: &Actor) -> ServiceResult<GuideResponse> {
        let guide = self
            .ctx
            .guide_repo()
            .find_by_license(&actor.license_no)
            .await?
            .ok_or_else(|| DomainError::GuideNotFound(actor.license_no.clone()))?;

        Ok(GuideResponse::from(guide))
    }

    /// Update the authenticated guide's own profile
    ///
    /// Absent request fields leave the stored value untouched.
    #[instrument(skip(self, request), fields(license_no = %actor.license_no))]
    pub async fn update_profile(
        &self,
        actor: &Actor,
        request: UpdateProfileRequest,
    ) -> ServiceResult<GuideResponse> {
        let mut guide = self
            .ctx
            .guide_repo()
            .find_by_license(&actor.license_no)
            .await?
            .ok_or_else(|| DomainError::GuideNotFound(actor.license_no.clone()))?;

        if let Some(name) = request.name {
            guide.name = name;
        }
        if let Some(phone) = request.phone {
            guide.phone = Some(phone);
        }
        if let Some(email) = request.email {
            guide.email = Some(email);
        }
        if let Some(bio) = request.bio {
            guide.bio = Some(bio);
        }
        if let Some(base_rate) = request.base_rate {
            guide.base_rate = Some(base_rate);
        }

        self.ctx.guide_repo().update_profile(&guide).await?;

        info!(license_no = %guide.license_no, "Profile updated");

        Ok(GuideResponse::from(guide))
    }

    /// Change the authenticated guide's password
    ///
    /// The current password is re-verified before the new one is stored.
    #[instrument(skip(self, request), fields(license_no = %actor.license_no))]
    pub async fn change_password(
        &self,
        actor: &Actor,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        validate_password_strength(&request.new_password).map_err(ServiceError::from)?;

        let password_hash = self
            .ctx
            .guide_repo()
            .get_password_hash(&actor.license_no)
            .await?
            .ok_or_else(|| DomainError::GuideNotFound(actor.license_no.clone()))?;

        let is_valid = verify_password(&request.current_password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let new_hash = hash_password(&request.new_password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .guide_repo()
            .update_password(&actor.license_no, &new_hash)
            .await?;

        info!(license_no = %actor.license_no, "Password changed");

        Ok(())
    }

    /// List the authenticated guide's claimed languages with catalog names
    #[instrument(skip(self), fields(license_no = %actor.license_no))]
    pub async fn get_languages(&self, actor: &Actor) -> ServiceResult<Vec<GuideLanguageResponse>> {
        let assignments = self
            .ctx
            .guide_language_repo()
            .get_for_guide(&actor.license_no)
            .await?;

        let names: HashMap<i64, String> = self
            .ctx
            .language_repo()
            .list()
            .await?
            .into_iter()
            .map(|l| (l.id, l.name))
            .collect();

        Ok(assignments
            .into_iter()
            .map(|a| GuideLanguageResponse {
                language_id: a.language_id,
                name: names.get(&a.language_id).cloned(),
                level: a.level,
            })
            .collect())
    }

    /// Replace the authenticated guide's claimed-language set atomically
    #[instrument(skip(self, request), fields(license_no = %actor.license_no))]
    pub async fn set_languages(
        &self,
        actor: &Actor,
        request: SetLanguagesRequest,
    ) -> ServiceResult<Vec<GuideLanguageResponse>> {
        let assignments: Vec<LanguageAssignment> = request
            .languages
            .iter()
            .map(|l| LanguageAssignment {
                language_id: l.language_id,
                level: l.level,
            })
            .collect();

        self.ctx
            .guide_language_repo()
            .replace_for_guide(&actor.license_no, &assignments)
            .await?;

        info!(
            license_no = %actor.license_no,
            count = assignments.len(),
            "Language set replaced"
        );

        self.get_languages(actor).await
    }
}
