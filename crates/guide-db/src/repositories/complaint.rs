//! PostgreSQL implementation of ComplaintRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guide_core::entities::Complaint;
use guide_core::error::DomainError;
use guide_core::traits::{ComplaintRepository, RepoResult};
use guide_core::value_objects::ComplaintStatus;

use crate::models::ComplaintModel;

use super::error::{complaint_not_found, map_db_error, map_fk_violation};

/// PostgreSQL implementation of ComplaintRepository
#[derive(Clone)]
pub struct PgComplaintRepository {
    pool: PgPool,
}

impl PgComplaintRepository {
    /// Create a new PgComplaintRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComplaintRepository for PgComplaintRepository {
    #[instrument(skip(self, description))]
    async fn create(&self, license_no: &str, description: &str, reporter: &str) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO complaints (license_no, description, reporter)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(license_no)
        .bind(description)
        .bind(reporter)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::GuideNotFound(license_no.to_string())))?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Complaint>> {
        let result = sqlx::query_as::<_, ComplaintModel>(
            r"
            SELECT c.id, c.license_no, g.name AS guide_name, c.description,
                   c.reporter, c.status, c.created_at
            FROM complaints c
            JOIN guides g ON g.license_no = c.license_no
            ORDER BY c.created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Complaint::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_for_guide(&self, license_no: &str) -> RepoResult<Vec<Complaint>> {
        let result = sqlx::query_as::<_, ComplaintModel>(
            r"
            SELECT c.id, c.license_no, g.name AS guide_name, c.description,
                   c.reporter, c.status, c.created_at
            FROM complaints c
            JOIN guides g ON g.license_no = c.license_no
            WHERE c.license_no = $1
            ORDER BY c.created_at DESC
            ",
        )
        .bind(license_no)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Complaint::from).collect())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: i64, status: ComplaintStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE complaints SET status = $2 WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(complaint_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM complaints WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(complaint_not_found(id));
        }

        Ok(())
    }
}
