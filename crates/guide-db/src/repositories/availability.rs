//! PostgreSQL implementation of AvailabilityRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use guide_core::entities::AvailabilitySlot;
use guide_core::error::DomainError;
use guide_core::traits::{AvailabilityRepository, RepoResult};

use crate::models::AvailabilityModel;

use super::error::{map_db_error, map_unique_violation, slot_not_found};

/// PostgreSQL implementation of AvailabilityRepository
#[derive(Clone)]
pub struct PgAvailabilityRepository {
    pool: PgPool,
}

impl PgAvailabilityRepository {
    /// Create a new PgAvailabilityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityRepository for PgAvailabilityRepository {
    #[instrument(skip(self, slot))]
    async fn create(&self, slot: &AvailabilitySlot) -> RepoResult<AvailabilitySlot> {
        let result = sqlx::query_as::<_, AvailabilityModel>(
            r"
            INSERT INTO availability (license_no, day, start_time, end_time, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, license_no, day, start_time, end_time, status
            ",
        )
        .bind(&slot.license_no)
        .bind(slot.day)
        .bind(slot.start_time)
        .bind(slot.end_time)
        .bind(slot.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlotAlreadyExists))?;

        Ok(AvailabilitySlot::from(result))
    }

    #[instrument(skip(self))]
    async fn list_from(
        &self,
        license_no: &str,
        from: NaiveDate,
    ) -> RepoResult<Vec<AvailabilitySlot>> {
        let result = sqlx::query_as::<_, AvailabilityModel>(
            r"
            SELECT id, license_no, day, start_time, end_time, status
            FROM availability
            WHERE license_no = $1 AND day >= $2
            ORDER BY day, start_time
            ",
        )
        .bind(license_no)
        .bind(from)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(AvailabilitySlot::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64, license_no: &str) -> RepoResult<()> {
        // Ownership is part of the predicate: a foreign slot and a missing
        // slot are indistinguishable to the caller.
        let result = sqlx::query(
            r"
            DELETE FROM availability WHERE id = $1 AND license_no = $2
            ",
        )
        .bind(id)
        .bind(license_no)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(slot_not_found(id));
        }

        Ok(())
    }
}
