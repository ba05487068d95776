//! Error handling utilities for repositories

use guide_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for foreign key violation and return appropriate error or fallback
pub fn map_fk_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "guide not found" error
pub fn guide_not_found(license_no: &str) -> DomainError {
    DomainError::GuideNotFound(license_no.to_string())
}

/// Create a "language not found" error
pub fn language_not_found(id: i64) -> DomainError {
    DomainError::LanguageNotFound(id)
}

/// Create a "slot not found" error
pub fn slot_not_found(id: i64) -> DomainError {
    DomainError::SlotNotFound(id)
}

/// Create a "booking not found" error
pub fn booking_not_found(id: i64) -> DomainError {
    DomainError::BookingNotFound(id)
}

/// Create a "complaint not found" error
pub fn complaint_not_found(id: i64) -> DomainError {
    DomainError::ComplaintNotFound(id)
}
