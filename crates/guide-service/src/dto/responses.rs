//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use guide_core::value_objects::{
    BookingStatus, ComplaintStatus, ProficiencyLevel, Role, SlotStatus,
};

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with a session token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub guide: GuideResponse,
}

impl AuthResponse {
    pub fn new(access_token: String, expires_in: i64, guide: GuideResponse) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            guide,
        }
    }
}

// ============================================================================
// Guide Responses
// ============================================================================

/// Guide account response
#[derive(Debug, Serialize)]
pub struct GuideResponse {
    pub license_no: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub base_rate: Option<f64>,
    pub role: Role,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Language Responses
// ============================================================================

/// Catalog language response
#[derive(Debug, Serialize)]
pub struct LanguageResponse {
    pub id: i64,
    pub name: String,
}

/// One language claimed by a guide, resolved against the catalog
#[derive(Debug, Serialize)]
pub struct GuideLanguageResponse {
    pub language_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub level: Option<ProficiencyLevel>,
}

// ============================================================================
// Availability Responses
// ============================================================================

/// Availability slot response
#[derive(Debug, Serialize)]
pub struct SlotResponse {
    pub id: i64,
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: SlotStatus,
}

// ============================================================================
// Search Responses
// ============================================================================

/// One search hit: an approved guide with an open slot on the queried day
#[derive(Debug, Serialize)]
pub struct SearchResultResponse {
    pub license_no: String,
    pub name: String,
    pub phone: Option<String>,
    pub base_rate: Option<f64>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Comma-joined names of every language the guide speaks
    pub languages: String,
}

// ============================================================================
// Booking Responses
// ============================================================================

/// Booking record response
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: i64,
    pub license_no: String,
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_hours: f64,
    pub total_rate: f64,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub status: BookingStatus,
}

// ============================================================================
// Complaint Responses
// ============================================================================

/// Complaint ticket response
#[derive(Debug, Serialize)]
pub struct ComplaintResponse {
    pub id: i64,
    pub license_no: String,
    pub guide_name: String,
    pub description: String,
    pub reporter: String,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement for a newly filed complaint
#[derive(Debug, Serialize)]
pub struct ComplaintCreatedResponse {
    pub id: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Readiness response including dependency checks
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: String,
}
