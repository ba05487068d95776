//! Complaint handlers
//!
//! Public complaint filing and the guide-scoped ticket view.

use axum::{extract::State, Json};
use guide_service::dto::{ComplaintCreatedResponse, ComplaintResponse, CreateComplaintRequest};
use guide_service::services::ComplaintService;

use crate::extractors::{AuthGuide, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// File a complaint against a guide (no authentication required)
///
/// POST /complaints
pub async fn create_complaint(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateComplaintRequest>,
) -> ApiResult<Created<Json<ComplaintCreatedResponse>>> {
    let service = ComplaintService::new(state.service_context());
    let response = service.file(request).await?;
    Ok(Created(Json(response)))
}

/// List complaints targeting the authenticated guide
///
/// GET /guides/@me/complaints
pub async fn list_own_complaints(
    State(state): State<AppState>,
    auth: AuthGuide,
) -> ApiResult<Json<Vec<ComplaintResponse>>> {
    let service = ComplaintService::new(state.service_context());
    let response = service.list_visible(&auth.actor).await?;
    Ok(Json(response))
}
