//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use guide_core::value_objects::{BookingStatus, ComplaintStatus, ProficiencyLevel, Role};

// ============================================================================
// Auth Requests
// ============================================================================

/// Guide registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 32, message = "License number must be 1-32 characters"))]
    pub license_no: String,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(range(min = 0.0, message = "Base rate must not be negative"))]
    pub base_rate: Option<f64>,
}

/// Guide login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 32, message = "License number must be 1-32 characters"))]
    pub license_no: String,

    pub password: String,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Update own profile request; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: Option<String>,

    #[validate(range(min = 0.0, message = "Base rate must not be negative"))]
    pub base_rate: Option<f64>,
}

/// Change own password request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    pub current_password: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub new_password: String,
}

// ============================================================================
// Language Requests
// ============================================================================

/// One language claimed by a guide
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSelection {
    pub language_id: i64,
    pub level: Option<ProficiencyLevel>,
}

/// Replace the full set of languages for the authenticated guide
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetLanguagesRequest {
    #[validate(length(max = 50, message = "At most 50 languages may be claimed"))]
    pub languages: Vec<LanguageSelection>,
}

/// Add a language to the master catalog (admin)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLanguageRequest {
    #[validate(length(min = 1, max = 64, message = "Language name must be 1-64 characters"))]
    pub name: String,
}

/// Rename a catalog language (admin)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RenameLanguageRequest {
    #[validate(length(min = 1, max = 64, message = "Language name must be 1-64 characters"))]
    pub name: String,
}

// ============================================================================
// Availability Requests
// ============================================================================

/// Publish an availability slot
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSlotRequest {
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

// ============================================================================
// Search Requests
// ============================================================================

/// Public search query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub day: NaiveDate,
    pub language_id: Option<i64>,
}

// ============================================================================
// Complaint Requests
// ============================================================================

/// File a complaint against a guide (public)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComplaintRequest {
    #[validate(length(min = 1, max = 32, message = "License number must be 1-32 characters"))]
    pub license_no: String,

    #[validate(length(min = 1, max = 2000, message = "Description must be 1-2000 characters"))]
    pub description: String,

    #[validate(length(max = 100, message = "Reporter must be at most 100 characters"))]
    pub reporter: Option<String>,
}

/// Update a complaint ticket status (admin)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateComplaintStatusRequest {
    pub status: ComplaintStatus,
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Approve or reject a guide account
#[derive(Debug, Clone, Deserialize)]
pub struct SetApprovalRequest {
    pub approved: bool,
}

/// Change a guide account role
#[derive(Debug, Clone, Deserialize)]
pub struct SetRoleRequest {
    pub role: Role,
}

// ============================================================================
// Booking Requests
// ============================================================================

/// Record a booking on behalf of a client (admin)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, max = 32, message = "License number must be 1-32 characters"))]
    pub license_no: String,

    pub day: NaiveDate,
    pub start_time: NaiveTime,

    #[validate(range(min = 0.5, max = 24.0, message = "Duration must be 0.5-24 hours"))]
    pub duration_hours: f64,

    #[validate(length(max = 100, message = "Client name must be at most 100 characters"))]
    pub client_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub client_email: Option<String>,
}

/// Update a booking status (admin)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}
