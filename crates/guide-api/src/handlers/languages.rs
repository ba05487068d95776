//! Public language catalog handler

use axum::{extract::State, Json};
use guide_service::dto::LanguageResponse;
use guide_service::services::CatalogService;

use crate::response::ApiResult;
use crate::state::AppState;

/// List all catalog languages
///
/// GET /languages
pub async fn list_languages(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<LanguageResponse>>> {
    let service = CatalogService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}
