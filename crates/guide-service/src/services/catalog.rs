//! Language catalog service
//!
//! The master language list: public reads, admin-only writes.

use guide_core::{Actor, DomainError};
use tracing::{info, instrument};

use crate::dto::{CreateLanguageRequest, LanguageResponse, RenameLanguageRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Language catalog service
pub struct CatalogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CatalogService<'a> {
    /// Create a new CatalogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all catalog languages, ordered by name (public)
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<LanguageResponse>> {
        let languages = self.ctx.language_repo().list().await?;
        Ok(languages.into_iter().map(LanguageResponse::from).collect())
    }

    /// Add a language to the catalog (admin)
    #[instrument(skip(self, request), fields(admin = %actor.license_no))]
    pub async fn add(
        &self,
        actor: &Actor,
        request: CreateLanguageRequest,
    ) -> ServiceResult<LanguageResponse> {
        require_admin(actor)?;

        let language = self.ctx.language_repo().create(&request.name).await?;

        info!(language_id = language.id, name = %language.name, "Language added");

        Ok(LanguageResponse::from(language))
    }

    /// Rename a catalog language (admin)
    #[instrument(skip(self, request), fields(admin = %actor.license_no))]
    pub async fn rename(
        &self,
        actor: &Actor,
        id: i64,
        request: RenameLanguageRequest,
    ) -> ServiceResult<LanguageResponse> {
        require_admin(actor)?;

        self.ctx.language_repo().rename(id, &request.name).await?;

        info!(language_id = id, name = %request.name, "Language renamed");

        Ok(LanguageResponse {
            id,
            name: request.name,
        })
    }

    /// Delete a catalog language; association rows cascade (admin)
    #[instrument(skip(self), fields(admin = %actor.license_no))]
    pub async fn delete(&self, actor: &Actor, id: i64) -> ServiceResult<()> {
        require_admin(actor)?;

        self.ctx.language_repo().delete(id).await?;

        info!(language_id = id, "Language deleted");

        Ok(())
    }
}

pub(super) fn require_admin(actor: &Actor) -> Result<(), DomainError> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(DomainError::AdminRequired)
    }
}
