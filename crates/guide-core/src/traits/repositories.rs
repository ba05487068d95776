//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use crate::entities::{AvailabilitySlot, Booking, Complaint, Guide, Language};
use crate::error::DomainError;
use crate::value_objects::{BookingStatus, ComplaintStatus, ProficiencyLevel, Role};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Guide Repository
// ============================================================================

#[async_trait]
pub trait GuideRepository: Send + Sync {
    /// Find guide by license number
    async fn find_by_license(&self, license_no: &str) -> RepoResult<Option<Guide>>;

    /// Check if a license number is already registered
    async fn license_exists(&self, license_no: &str) -> RepoResult<bool>;

    /// Create a new guide account
    ///
    /// A duplicate license number yields `DomainError::LicenseAlreadyRegistered`.
    async fn create(&self, guide: &Guide, password_hash: &str) -> RepoResult<()>;

    /// Update profile fields (name, phone, email, bio, base rate)
    async fn update_profile(&self, guide: &Guide) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, license_no: &str) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, license_no: &str, password_hash: &str) -> RepoResult<()>;

    /// Set the approval flag
    async fn set_approval(&self, license_no: &str, approved: bool) -> RepoResult<()>;

    /// Set the account role
    async fn set_role(&self, license_no: &str, role: Role) -> RepoResult<()>;

    /// Delete a guide; dependent rows cascade
    async fn delete(&self, license_no: &str) -> RepoResult<()>;

    /// List every guide account, newest first (admin overview)
    async fn list_all(&self) -> RepoResult<Vec<Guide>>;
}

// ============================================================================
// Language Repository (master catalog)
// ============================================================================

#[async_trait]
pub trait LanguageRepository: Send + Sync {
    /// Add a language to the master list
    ///
    /// A duplicate name yields `DomainError::LanguageAlreadyExists`.
    async fn create(&self, name: &str) -> RepoResult<Language>;

    /// Rename a language
    async fn rename(&self, id: i64, new_name: &str) -> RepoResult<()>;

    /// Delete a language; association rows cascade
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// List all languages ordered by name
    async fn list(&self) -> RepoResult<Vec<Language>>;
}

// ============================================================================
// Guide-Language Association Repository
// ============================================================================

/// One language claimed by a guide, with an optional proficiency level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageAssignment {
    pub language_id: i64,
    pub level: Option<ProficiencyLevel>,
}

#[async_trait]
pub trait GuideLanguageRepository: Send + Sync {
    /// Get the full set of language assignments for one guide
    async fn get_for_guide(&self, license_no: &str) -> RepoResult<Vec<LanguageAssignment>>;

    /// Replace a guide's language set atomically
    ///
    /// Delete-all-then-insert-all in a single transaction; any failure
    /// rolls the whole operation back.
    async fn replace_for_guide(
        &self,
        license_no: &str,
        assignments: &[LanguageAssignment],
    ) -> RepoResult<()>;

    /// Bulk aggregation: license -> comma-joined language names
    ///
    /// One set-membership query for the whole batch; an empty input
    /// returns an empty map without touching the store.
    async fn names_for_guides(&self, licenses: &[String]) -> RepoResult<HashMap<String, String>>;
}

// ============================================================================
// Availability Repository
// ============================================================================

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Insert a slot and return it with its assigned id
    ///
    /// A duplicate (guide, day, start) yields `DomainError::SlotAlreadyExists`.
    async fn create(&self, slot: &AvailabilitySlot) -> RepoResult<AvailabilitySlot>;

    /// List a guide's slots with day >= `from`, ordered by day then start
    async fn list_from(&self, license_no: &str, from: NaiveDate) -> RepoResult<Vec<AvailabilitySlot>>;

    /// Delete a slot owned by the given guide
    ///
    /// A slot that does not exist or belongs to another guide reports
    /// `DomainError::SlotNotFound` without revealing which.
    async fn delete(&self, id: i64, license_no: &str) -> RepoResult<()>;
}

// ============================================================================
// Search Repository
// ============================================================================

/// One availability slot of an approved guide matching a search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRow {
    pub license_no: String,
    pub name: String,
    pub phone: Option<String>,
    pub base_rate: Option<f64>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// Find approved guides with an available slot on `day`
    ///
    /// When a language filter is given only guides associated to that
    /// language match. Ordered by guide name, then slot start time.
    async fn find_available(
        &self,
        day: NaiveDate,
        language_id: Option<i64>,
    ) -> RepoResult<Vec<SearchRow>>;
}

// ============================================================================
// Booking Repository
// ============================================================================

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a booking record and return it with its assigned id
    async fn create(&self, booking: &Booking) -> RepoResult<Booking>;

    /// List a guide's booking history, day/start descending
    async fn list_for_guide(&self, license_no: &str) -> RepoResult<Vec<Booking>>;

    /// Update the status of a booking (admin-extended variant)
    async fn update_status(&self, id: i64, status: BookingStatus) -> RepoResult<()>;
}

// ============================================================================
// Complaint Repository
// ============================================================================

#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// File a complaint against a guide, returning the new ticket id
    ///
    /// An unknown target guide yields `DomainError::GuideNotFound`.
    async fn create(&self, license_no: &str, description: &str, reporter: &str) -> RepoResult<i64>;

    /// List every complaint, newest first (admin view)
    async fn list_all(&self) -> RepoResult<Vec<Complaint>>;

    /// List complaints targeting one guide, newest first
    async fn list_for_guide(&self, license_no: &str) -> RepoResult<Vec<Complaint>>;

    /// Update ticket status
    async fn update_status(&self, id: i64, status: ComplaintStatus) -> RepoResult<()>;

    /// Delete a ticket
    async fn delete(&self, id: i64) -> RepoResult<()>;
}
