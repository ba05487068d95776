//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{
    admin, auth, availability, bookings, complaints, health, languages, profile, search,
};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes mounted at the root
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(guide_routes())
        .merge(public_routes())
        .merge(admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// Guide self-service routes
fn guide_routes() -> Router<AppState> {
    Router::new()
        .route("/guides/@me", get(profile::get_profile))
        .route("/guides/@me", patch(profile::update_profile))
        .route("/guides/@me/password", put(profile::change_password))
        .route("/guides/@me/languages", get(profile::get_languages))
        .route("/guides/@me/languages", put(profile::set_languages))
        .route("/guides/@me/availability", get(availability::list_slots))
        .route("/guides/@me/availability", post(availability::create_slot))
        .route(
            "/guides/@me/availability/:slot_id",
            delete(availability::delete_slot),
        )
        .route("/guides/@me/bookings", get(bookings::list_own_bookings))
        .route("/guides/@me/complaints", get(complaints::list_own_complaints))
}

/// Public routes requiring no authentication
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search::search))
        .route("/languages", get(languages::list_languages))
        .route("/complaints", post(complaints::create_complaint))
}

/// Admin routes (role checked by the AdminGuide extractor)
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Guide accounts
        .route("/admin/guides", get(admin::list_guides))
        .route("/admin/guides/:license_no/approval", put(admin::set_approval))
        .route("/admin/guides/:license_no/role", put(admin::set_role))
        .route("/admin/guides/:license_no", delete(admin::delete_guide))
        // Language catalog
        .route("/admin/languages", post(admin::create_language))
        .route("/admin/languages/:id", patch(admin::rename_language))
        .route("/admin/languages/:id", delete(admin::delete_language))
        // Complaint tickets
        .route("/admin/complaints", get(admin::list_complaints))
        .route("/admin/complaints/:id", patch(admin::update_complaint))
        .route("/admin/complaints/:id", delete(admin::delete_complaint))
        // Booking records
        .route("/admin/bookings", post(admin::create_booking))
        .route("/admin/bookings/:id", patch(admin::update_booking))
}
