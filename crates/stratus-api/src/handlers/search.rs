//! Search handlers.

use axum::extract::{Query, State};
use axum::Json;

use crate::dto::request::SearchParams;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/search/files?q&limit&offset
pub async fn search_files(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let results = state
        .search_service
        .search_files(auth.user_id, &params.q, params.limit, params.offset)
        .await?;

    Ok(Json(
        serde_json::json!({ "query": params.q, "results": results }),
    ))
}

/// GET /api/search/folders?q
pub async fn search_folders(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let results = state
        .search_service
        .search_folders(auth.user_id, &params.q)
        .await?;

    Ok(Json(
        serde_json::json!({ "query": params.q, "results": results }),
    ))
}

/// GET /api/search/fulltext?q
pub async fn search_fulltext(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let results = state
        .search_service
        .search_fulltext(auth.user_id, &params.q)
        .await?;

    Ok(Json(
        serde_json::json!({ "query": params.q, "results": results }),
    ))
}
