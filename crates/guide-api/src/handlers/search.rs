//! Public search handler

use axum::{
    extract::{Query, State},
    Json,
};
use guide_service::dto::{SearchQuery, SearchResultResponse};
use guide_service::services::SearchService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Search approved guides by day and optional language
///
/// GET /search?day=YYYY-MM-DD&language_id=N
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<SearchResultResponse>>> {
    let service = SearchService::new(state.service_context());
    let response = service.find(query).await?;
    Ok(Json(response))
}
