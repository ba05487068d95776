//! PostgreSQL implementation of SearchRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use guide_core::traits::{RepoResult, SearchRepository, SearchRow};

use crate::models::SearchRowModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SearchRepository
#[derive(Clone)]
pub struct PgSearchRepository {
    pool: PgPool,
}

impl PgSearchRepository {
    /// Create a new PgSearchRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SearchRepository for PgSearchRepository {
    #[instrument(skip(self))]
    async fn find_available(
        &self,
        day: NaiveDate,
        language_id: Option<i64>,
    ) -> RepoResult<Vec<SearchRow>> {
        // Only approved guides with still-open slots surface in search.
        // The language filter is a bound parameter, toggled off with NULL.
        let result = sqlx::query_as::<_, SearchRowModel>(
            r"
            SELECT DISTINCT g.license_no, g.name, g.phone, g.base_rate,
                   a.start_time, a.end_time
            FROM guides g
            JOIN availability a ON a.license_no = g.license_no
            WHERE g.approved = TRUE
              AND a.day = $1
              AND a.status = 'Available'
              AND ($2::BIGINT IS NULL OR EXISTS (
                    SELECT 1 FROM guide_languages gl
                    WHERE gl.license_no = g.license_no AND gl.language_id = $2
              ))
            ORDER BY g.name, a.start_time
            ",
        )
        .bind(day)
        .bind(language_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(SearchRow::from).collect())
    }
}
