//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub license_no: String,
    pub name: String,
    pub password: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub base_rate: Option<f64>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            license_no: format!("LIC-{:06}-{suffix}", std::process::id()),
            name: format!("Test Guide {suffix}"),
            password: "TestPass123!".to_string(),
            phone: Some("010-0000-0000".to_string()),
            email: Some(format!("guide{suffix}@example.com")),
            base_rate: Some(50.0),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub license_no: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            license_no: reg.license_no.clone(),
            password: reg.password.clone(),
        }
    }

    /// Credentials for the seeded primary admin account
    pub fn admin() -> Self {
        Self {
            license_no: std::env::var("ADMIN_LICENSE").expect("ADMIN_LICENSE not set"),
            password: std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD not set"),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub guide: GuideResponse,
}

/// Guide account response
#[derive(Debug, Deserialize)]
pub struct GuideResponse {
    pub license_no: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub base_rate: Option<f64>,
    pub role: String,
    pub approved: bool,
    pub created_at: String,
}

/// Profile update request
#[derive(Debug, Default, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_rate: Option<f64>,
}

/// Password change request
#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Approval toggle request
#[derive(Debug, Serialize)]
pub struct SetApprovalRequest {
    pub approved: bool,
}

/// Role change request
#[derive(Debug, Serialize)]
pub struct SetRoleRequest {
    pub role: String,
}

/// Availability slot request
#[derive(Debug, Serialize)]
pub struct CreateSlotRequest {
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl CreateSlotRequest {
    /// A morning slot on the next calendar day
    pub fn tomorrow_morning() -> Self {
        Self {
            day: Utc::now().date_naive() + Duration::days(1),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        }
    }
}

/// Availability slot response
#[derive(Debug, Deserialize)]
pub struct SlotResponse {
    pub id: i64,
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
}

/// Search result row
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub license_no: String,
    pub name: String,
    pub phone: Option<String>,
    pub base_rate: Option<f64>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub languages: String,
}

/// Catalog language creation request
#[derive(Debug, Serialize)]
pub struct CreateLanguageRequest {
    pub name: String,
}

impl CreateLanguageRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Testlang{}", unique_suffix()),
        }
    }
}

/// Catalog language response
#[derive(Debug, Deserialize)]
pub struct LanguageResponse {
    pub id: i64,
    pub name: String,
}

/// One language claimed by a guide
#[derive(Debug, Serialize)]
pub struct LanguageSelection {
    pub language_id: i64,
    pub level: Option<String>,
}

/// Replace-languages request
#[derive(Debug, Serialize)]
pub struct SetLanguagesRequest {
    pub languages: Vec<LanguageSelection>,
}

/// Guide language association response
#[derive(Debug, Deserialize)]
pub struct GuideLanguageResponse {
    pub language_id: i64,
    pub name: Option<String>,
    pub level: Option<String>,
}

/// Complaint creation request
#[derive(Debug, Serialize)]
pub struct CreateComplaintRequest {
    pub license_no: String,
    pub description: String,
    pub reporter: Option<String>,
}

impl CreateComplaintRequest {
    pub fn against(license_no: &str) -> Self {
        Self {
            license_no: license_no.to_string(),
            description: "The tour started an hour late".to_string(),
            reporter: Some("Unhappy Client".to_string()),
        }
    }
}

/// Acknowledgement for a newly filed complaint
#[derive(Debug, Deserialize)]
pub struct ComplaintCreatedResponse {
    pub id: i64,
}

/// Complaint ticket response
#[derive(Debug, Deserialize)]
pub struct ComplaintResponse {
    pub id: i64,
    pub license_no: String,
    pub guide_name: String,
    pub description: String,
    pub reporter: String,
    pub status: String,
    pub created_at: String,
}

/// Complaint status update request
#[derive(Debug, Serialize)]
pub struct UpdateComplaintStatusRequest {
    pub status: String,
}

/// Booking record creation request
#[derive(Debug, Serialize)]
pub struct CreateBookingRequest {
    pub license_no: String,
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_hours: f64,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
}

impl CreateBookingRequest {
    pub fn tomorrow_for(license_no: &str) -> Self {
        Self {
            license_no: license_no.to_string(),
            day: Utc::now().date_naive() + Duration::days(1),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            duration_hours: 3.0,
            client_name: Some("Walk-in Client".to_string()),
            client_email: None,
        }
    }
}

/// Booking record response
#[derive(Debug, Deserialize)]
pub struct BookingResponse {
    pub id: i64,
    pub license_no: String,
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_hours: f64,
    pub total_rate: f64,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    pub status: String,
}

/// Booking status update request
#[derive(Debug, Serialize)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
