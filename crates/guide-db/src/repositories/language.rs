//! PostgreSQL implementation of LanguageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guide_core::entities::Language;
use guide_core::error::DomainError;
use guide_core::traits::{LanguageRepository, RepoResult};

use crate::models::LanguageModel;

use super::error::{language_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of LanguageRepository
#[derive(Clone)]
pub struct PgLanguageRepository {
    pool: PgPool,
}

impl PgLanguageRepository {
    /// Create a new PgLanguageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LanguageRepository for PgLanguageRepository {
    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> RepoResult<Language> {
        let result = sqlx::query_as::<_, LanguageModel>(
            r"
            INSERT INTO languages (name)
            VALUES ($1)
            RETURNING id, name
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::LanguageAlreadyExists(name.to_string()))
        })?;

        Ok(Language::from(result))
    }

    #[instrument(skip(self))]
    async fn rename(&self, id: i64, new_name: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE languages SET name = $2 WHERE id = $1
            ",
        )
        .bind(id)
        .bind(new_name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::LanguageAlreadyExists(new_name.to_string())
            })
        })?;

        if result.rows_affected() == 0 {
            return Err(language_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM languages WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(language_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Language>> {
        let result = sqlx::query_as::<_, LanguageModel>(
            r"
            SELECT id, name FROM languages ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Language::from).collect())
    }
}
