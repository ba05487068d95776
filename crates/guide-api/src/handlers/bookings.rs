//! Booking handlers
//!
//! Read-only booking history for the authenticated guide.

use axum::{extract::State, Json};
use guide_service::dto::BookingResponse;
use guide_service::services::BookingService;

use crate::extractors::AuthGuide;
use crate::response::ApiResult;
use crate::state::AppState;

/// List the authenticated guide's booking history
///
/// GET /guides/@me/bookings
pub async fn list_own_bookings(
    State(state): State<AppState>,
    auth: AuthGuide,
) -> ApiResult<Json<Vec<BookingResponse>>> {
    let service = BookingService::new(state.service_context());
    let response = service.list_own(&auth.actor).await?;
    Ok(Json(response))
}
