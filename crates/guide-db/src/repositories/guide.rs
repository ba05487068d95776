//! PostgreSQL implementation of GuideRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guide_core::entities::Guide;
use guide_core::error::DomainError;
use guide_core::traits::{GuideRepository, RepoResult};
use guide_core::value_objects::Role;

use crate::models::GuideModel;

use super::error::{guide_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of GuideRepository
#[derive(Clone)]
pub struct PgGuideRepository {
    pool: PgPool,
}

impl PgGuideRepository {
    /// Create a new PgGuideRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuideRepository for PgGuideRepository {
    #[instrument(skip(self))]
    async fn find_by_license(&self, license_no: &str) -> RepoResult<Option<Guide>> {
        let result = sqlx::query_as::<_, GuideModel>(
            r"
            SELECT license_no, name, phone, email, bio, base_rate, role, approved, created_at
            FROM guides
            WHERE license_no = $1
            ",
        )
        .bind(license_no)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Guide::from))
    }

    #[instrument(skip(self))]
    async fn license_exists(&self, license_no: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM guides WHERE license_no = $1)
            ",
        )
        .bind(license_no)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, guide: &Guide, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO guides (license_no, name, password_hash, phone, email, bio, base_rate, role, approved, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(&guide.license_no)
        .bind(&guide.name)
        .bind(password_hash)
        .bind(&guide.phone)
        .bind(&guide.email)
        .bind(&guide.bio)
        .bind(guide.base_rate)
        .bind(guide.role.as_str())
        .bind(guide.approved)
        .bind(guide.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::LicenseAlreadyRegistered(guide.license_no.clone())
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_profile(&self, guide: &Guide) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE guides
            SET name = $2, phone = $3, email = $4, bio = $5, base_rate = $6
            WHERE license_no = $1
            ",
        )
        .bind(&guide.license_no)
        .bind(&guide.name)
        .bind(&guide.phone)
        .bind(&guide.email)
        .bind(&guide.bio)
        .bind(guide.base_rate)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(guide_not_found(&guide.license_no));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, license_no: &str) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM guides WHERE license_no = $1
            ",
        )
        .bind(license_no)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, license_no: &str, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE guides
            SET password_hash = $2
            WHERE license_no = $1
            ",
        )
        .bind(license_no)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(guide_not_found(license_no));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_approval(&self, license_no: &str, approved: bool) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE guides
            SET approved = $2
            WHERE license_no = $1
            ",
        )
        .bind(license_no)
        .bind(approved)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(guide_not_found(license_no));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_role(&self, license_no: &str, role: Role) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE guides
            SET role = $2
            WHERE license_no = $1
            ",
        )
        .bind(license_no)
        .bind(role.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(guide_not_found(license_no));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, license_no: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM guides WHERE license_no = $1
            ",
        )
        .bind(license_no)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(guide_not_found(license_no));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Guide>> {
        let result = sqlx::query_as::<_, GuideModel>(
            r"
            SELECT license_no, name, phone, email, bio, base_rate, role, approved, created_at
            FROM guides
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Guide::from).collect())
    }
}
