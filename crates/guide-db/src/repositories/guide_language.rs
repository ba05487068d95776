//! PostgreSQL implementation of GuideLanguageRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guide_core::error::DomainError;
use guide_core::traits::{GuideLanguageRepository, LanguageAssignment, RepoResult};
use guide_core::value_objects::ProficiencyLevel;

use crate::models::LanguageNamesRow;

use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of GuideLanguageRepository
#[derive(Clone)]
pub struct PgGuideLanguageRepository {
    pool: PgPool,
}

impl PgGuideLanguageRepository {
    /// Create a new PgGuideLanguageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuideLanguageRepository for PgGuideLanguageRepository {
    #[instrument(skip(self))]
    async fn get_for_guide(&self, license_no: &str) -> RepoResult<Vec<LanguageAssignment>> {
        let rows = sqlx::query_as::<_, (i64, Option<String>)>(
            r"
            SELECT language_id, level
            FROM guide_languages
            WHERE license_no = $1
            ORDER BY language_id
            ",
        )
        .bind(license_no)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|(language_id, level)| LanguageAssignment {
                language_id,
                level: level.and_then(|l| l.parse::<ProficiencyLevel>().ok()),
            })
            .collect())
    }

    #[instrument(skip(self, assignments))]
    async fn replace_for_guide(
        &self,
        license_no: &str,
        assignments: &[LanguageAssignment],
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM guide_languages WHERE license_no = $1
            ",
        )
        .bind(license_no)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for assignment in assignments {
            sqlx::query(
                r"
                INSERT INTO guide_languages (license_no, language_id, level)
                VALUES ($1, $2, $3)
                ON CONFLICT (license_no, language_id) DO UPDATE SET level = EXCLUDED.level
                ",
            )
            .bind(license_no)
            .bind(assignment.language_id)
            .bind(assignment.level.map(|l| l.as_str()))
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                map_fk_violation(e, || {
                    DomainError::LanguageNotFound(assignment.language_id)
                })
            })?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, licenses))]
    async fn names_for_guides(&self, licenses: &[String]) -> RepoResult<HashMap<String, String>> {
        if licenses.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, LanguageNamesRow>(
            r"
            SELECT gl.license_no, string_agg(l.name, ', ' ORDER BY l.name) AS languages
            FROM guide_languages gl
            JOIN languages l ON l.id = gl.language_id
            WHERE gl.license_no = ANY($1)
            GROUP BY gl.license_no
            ",
        )
        .bind(licenses)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| (row.license_no, row.languages))
            .collect())
    }
}
