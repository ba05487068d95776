//! Profile handlers
//!
//! Self-service endpoints for the authenticated guide.

use axum::{extract::State, Json};
use guide_service::dto::{
    ChangePasswordRequest, GuideLanguageResponse, GuideResponse, SetLanguagesRequest,
    UpdateProfileRequest,
};
use guide_service::services::GuideService;

use crate::extractors::{AuthGuide, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get the authenticated guide's profile
///
/// GET /guides/@me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthGuide,
) -> ApiResult<Json<GuideResponse>> {
    let service = GuideService::new(state.service_context());
    let response = service.get_profile(&auth.actor).await?;
    Ok(Json(response))
}

/// Update the authenticated guide's profile
///
/// PATCH /guides/@me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthGuide,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<GuideResponse>> {
    let service = GuideService::new(state.service_context());
    let response = service.update_profile(&auth.actor, request).await?;
    Ok(Json(response))
}

/// Change the authenticated guide's password
///
/// PUT /guides/@me/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthGuide,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<NoContent> {
    let service = GuideService::new(state.service_context());
    service.change_password(&auth.actor, request).await?;
    Ok(NoContent)
}

/// List the authenticated guide's claimed languages
///
/// GET /guides/@me/languages
pub async fn get_languages(
    State(state): State<AppState>,
    auth: AuthGuide,
) -> ApiResult<Json<Vec<GuideLanguageResponse>>> {
    let service = GuideService::new(state.service_context());
    let response = service.get_languages(&auth.actor).await?;
    Ok(Json(response))
}

/// Replace the authenticated guide's claimed-language set
///
/// PUT /guides/@me/languages
pub async fn set_languages(
    State(state): State<AppState>,
    auth: AuthGuide,
    ValidatedJson(request): ValidatedJson<SetLanguagesRequest>,
) -> ApiResult<Json<Vec<GuideLanguageResponse>>> {
    let service = GuideService::new(state.service_context());
    let response = service.set_languages(&auth.actor, request).await?;
    Ok(Json(response))
}
