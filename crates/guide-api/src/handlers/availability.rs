//! Availability handlers
//!
//! Endpoints for the authenticated guide's bookable time slots.

use axum::{
    extract::{Path, State},
    Json,
};
use guide_service::dto::{CreateSlotRequest, SlotResponse};
use guide_service::services::AvailabilityService;

use crate::extractors::AuthGuide;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List the authenticated guide's upcoming slots
///
/// GET /guides/@me/availability
pub async fn list_slots(
    State(state): State<AppState>,
    auth: AuthGuide,
) -> ApiResult<Json<Vec<SlotResponse>>> {
    let service = AvailabilityService::new(state.service_context());
    let response = service.list_slots(&auth.actor).await?;
    Ok(Json(response))
}

/// Publish a new availability slot
///
/// POST /guides/@me/availability
pub async fn create_slot(
    State(state): State<AppState>,
    auth: AuthGuide,
    Json(request): Json<CreateSlotRequest>,
) -> ApiResult<Created<Json<SlotResponse>>> {
    let service = AvailabilityService::new(state.service_context());
    let response = service.add_slot(&auth.actor, request).await?;
    Ok(Created(Json(response)))
}

/// Retract an availability slot
///
/// DELETE /guides/@me/availability/:slot_id
pub async fn delete_slot(
    State(state): State<AppState>,
    auth: AuthGuide,
    Path(slot_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = AvailabilityService::new(state.service_context());
    service.delete_slot(&auth.actor, slot_id).await?;
    Ok(NoContent)
}
