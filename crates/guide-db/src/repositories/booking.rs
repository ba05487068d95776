//! PostgreSQL implementation of BookingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guide_core::entities::Booking;
use guide_core::error::DomainError;
use guide_core::traits::{BookingRepository, RepoResult};
use guide_core::value_objects::BookingStatus;

use crate::models::BookingModel;

use super::error::{booking_not_found, map_db_error, map_fk_violation};

/// PostgreSQL implementation of BookingRepository
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Create a new PgBookingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    #[instrument(skip(self, booking))]
    async fn create(&self, booking: &Booking) -> RepoResult<Booking> {
        let result = sqlx::query_as::<_, BookingModel>(
            r"
            INSERT INTO bookings (license_no, day, start_time, duration_hours, total_rate,
                                  client_name, client_email, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, license_no, day, start_time, duration_hours, total_rate,
                      client_name, client_email, status
            ",
        )
        .bind(&booking.license_no)
        .bind(booking.day)
        .bind(booking.start_time)
        .bind(booking.duration_hours)
        .bind(booking.total_rate)
        .bind(&booking.client_name)
        .bind(&booking.client_email)
        .bind(booking.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_fk_violation(e, || DomainError::GuideNotFound(booking.license_no.clone()))
        })?;

        Ok(Booking::from(result))
    }

    #[instrument(skip(self))]
    async fn list_for_guide(&self, license_no: &str) -> RepoResult<Vec<Booking>> {
        let result = sqlx::query_as::<_, BookingModel>(
            r"
            SELECT id, license_no, day, start_time, duration_hours, total_rate,
                   client_name, client_email, status
            FROM bookings
            WHERE license_no = $1
            ORDER BY day DESC, start_time DESC
            ",
        )
        .bind(license_no)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Booking::from).collect())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: i64, status: BookingStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE bookings SET status = $2 WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(booking_not_found(id));
        }

        Ok(())
    }
}
