//! Domain errors - error types for the domain layer

use chrono::NaiveDate;
use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Guide not found: {0}")]
    GuideNotFound(String),

    #[error("Language not found: {0}")]
    LanguageNotFound(i64),

    #[error("Availability slot not found: {0}")]
    SlotNotFound(i64),

    #[error("Booking not found: {0}")]
    BookingNotFound(i64),

    #[error("Complaint not found: {0}")]
    ComplaintNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Date {0} is in the past")]
    DateInPast(NaiveDate),

    #[error("End time must be after start time")]
    InvalidTimeWindow,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Account is pending admin approval")]
    AccountPendingApproval,

    #[error("Administrative role required")]
    AdminRequired,

    #[error("The primary admin account cannot be demoted or deleted")]
    PrimaryAdminImmutable,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("License number already registered: {0}")]
    LicenseAlreadyRegistered(String),

    #[error("Language already exists: {0}")]
    LanguageAlreadyExists(String),

    #[error("An availability slot already exists for this date and start time")]
    SlotAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::GuideNotFound(_) => "UNKNOWN_GUIDE",
            Self::LanguageNotFound(_) => "UNKNOWN_LANGUAGE",
            Self::SlotNotFound(_) => "UNKNOWN_SLOT",
            Self::BookingNotFound(_) => "UNKNOWN_BOOKING",
            Self::ComplaintNotFound(_) => "UNKNOWN_COMPLAINT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DateInPast(_) => "DATE_IN_PAST",
            Self::InvalidTimeWindow => "INVALID_TIME_WINDOW",
            Self::WeakPassword(_) => "WEAK_PASSWORD",

            // Authorization
            Self::AccountPendingApproval => "ACCOUNT_PENDING_APPROVAL",
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::PrimaryAdminImmutable => "PRIMARY_ADMIN_IMMUTABLE",

            // Conflict
            Self::LicenseAlreadyRegistered(_) => "LICENSE_ALREADY_REGISTERED",
            Self::LanguageAlreadyExists(_) => "LANGUAGE_ALREADY_EXISTS",
            Self::SlotAlreadyExists => "SLOT_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GuideNotFound(_)
                | Self::LanguageNotFound(_)
                | Self::SlotNotFound(_)
                | Self::BookingNotFound(_)
                | Self::ComplaintNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::DateInPast(_)
                | Self::InvalidTimeWindow
                | Self::WeakPassword(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::AccountPendingApproval | Self::AdminRequired | Self::PrimaryAdminImmutable
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::LicenseAlreadyRegistered(_)
                | Self::LanguageAlreadyExists(_)
                | Self::SlotAlreadyExists
        )
    }
}
