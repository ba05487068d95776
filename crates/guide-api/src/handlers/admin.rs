//! Administration handlers
//!
//! Admin-only endpoints for account oversight, the language catalog,
//! complaint tickets, and booking records.

use axum::{
    extract::{Path, State},
    Json,
};
use guide_service::dto::{
    BookingResponse, ComplaintResponse, CreateBookingRequest, CreateLanguageRequest,
    GuideResponse, LanguageResponse, RenameLanguageRequest, SetApprovalRequest, SetRoleRequest,
    UpdateBookingStatusRequest, UpdateComplaintStatusRequest,
};
use guide_service::services::{AdminService, BookingService, CatalogService, ComplaintService};

use crate::extractors::{AdminGuide, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

// ============================================================================
// Guide accounts
// ============================================================================

/// List every guide account
///
/// GET /admin/guides
pub async fn list_guides(
    State(state): State<AppState>,
    admin: AdminGuide,
) -> ApiResult<Json<Vec<GuideResponse>>> {
    let service = AdminService::new(state.service_context());
    let response = service.list_guides(&admin.actor).await?;
    Ok(Json(response))
}

/// Approve or reject a guide account
///
/// PUT /admin/guides/:license_no/approval
pub async fn set_approval(
    State(state): State<AppState>,
    admin: AdminGuide,
    Path(license_no): Path<String>,
    Json(request): Json<SetApprovalRequest>,
) -> ApiResult<NoContent> {
    let service = AdminService::new(state.service_context());
    service
        .set_approval(&admin.actor, &license_no, request.approved)
        .await?;
    Ok(NoContent)
}

/// Change a guide account role
///
/// PUT /admin/guides/:license_no/role
pub async fn set_role(
    State(state): State<AppState>,
    admin: AdminGuide,
    Path(license_no): Path<String>,
    Json(request): Json<SetRoleRequest>,
) -> ApiResult<NoContent> {
    let service = AdminService::new(state.service_context());
    service
        .set_role(&admin.actor, &license_no, request.role)
        .await?;
    Ok(NoContent)
}

/// Delete a guide account; dependent rows cascade
///
/// DELETE /admin/guides/:license_no
pub async fn delete_guide(
    State(state): State<AppState>,
    admin: AdminGuide,
    Path(license_no): Path<String>,
) -> ApiResult<NoContent> {
    let service = AdminService::new(state.service_context());
    service.delete_guide(&admin.actor, &license_no).await?;
    Ok(NoContent)
}

// ============================================================================
// Language catalog
// ============================================================================

/// Add a language to the catalog
///
/// POST /admin/languages
pub async fn create_language(
    State(state): State<AppState>,
    admin: AdminGuide,
    ValidatedJson(request): ValidatedJson<CreateLanguageRequest>,
) -> ApiResult<Created<Json<LanguageResponse>>> {
    let service = CatalogService::new(state.service_context());
    let response = service.add(&admin.actor, request).await?;
    Ok(Created(Json(response)))
}

/// Rename a catalog language
///
/// PATCH /admin/languages/:id
pub async fn rename_language(
    State(state): State<AppState>,
    admin: AdminGuide,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<RenameLanguageRequest>,
) -> ApiResult<Json<LanguageResponse>> {
    let service = CatalogService::new(state.service_context());
    let response = service.rename(&admin.actor, id, request).await?;
    Ok(Json(response))
}

/// Delete a catalog language; association rows cascade
///
/// DELETE /admin/languages/:id
pub async fn delete_language(
    State(state): State<AppState>,
    admin: AdminGuide,
    Path(id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = CatalogService::new(state.service_context());
    service.delete(&admin.actor, id).await?;
    Ok(NoContent)
}

// ============================================================================
// Complaint tickets
// ============================================================================

/// List every complaint ticket
///
/// GET /admin/complaints
pub async fn list_complaints(
    State(state): State<AppState>,
    admin: AdminGuide,
) -> ApiResult<Json<Vec<ComplaintResponse>>> {
    let service = ComplaintService::new(state.service_context());
    let response = service.list_visible(&admin.actor).await?;
    Ok(Json(response))
}

/// Update a complaint ticket status
///
/// PATCH /admin/complaints/:id
pub async fn update_complaint(
    State(state): State<AppState>,
    admin: AdminGuide,
    Path(id): Path<i64>,
    Json(request): Json<UpdateComplaintStatusRequest>,
) -> ApiResult<NoContent> {
    let service = ComplaintService::new(state.service_context());
    service
        .update_status(&admin.actor, id, request.status)
        .await?;
    Ok(NoContent)
}

/// Delete a complaint ticket
///
/// DELETE /admin/complaints/:id
pub async fn delete_complaint(
    State(state): State<AppState>,
    admin: AdminGuide,
    Path(id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = ComplaintService::new(state.service_context());
    service.delete(&admin.actor, id).await?;
    Ok(NoContent)
}

// ============================================================================
// Booking records
// ============================================================================

/// Record a booking on behalf of a client
///
/// POST /admin/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    admin: AdminGuide,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> ApiResult<Created<Json<BookingResponse>>> {
    let service = BookingService::new(state.service_context());
    let response = service.record(&admin.actor, request).await?;
    Ok(Created(Json(response)))
}

/// Update a booking status
///
/// PATCH /admin/bookings/:id
pub async fn update_booking(
    State(state): State<AppState>,
    admin: AdminGuide,
    Path(id): Path<i64>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> ApiResult<NoContent> {
    let service = BookingService::new(state.service_context());
    service
        .update_status(&admin.actor, id, request.status)
        .await?;
    Ok(NoContent)
}
