//! Folder handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::dto::request::CreateFolderRequest;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFolderRequest>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let folder = state
        .folder_service
        .create_folder(&auth, &req.name, req.parent_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "folder": folder })),
    ))
}

/// GET /api/folders
pub async fn list_folders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<serde_json::Value>> {
    let folders = state.folder_service.list_folders(&auth).await?;
    Ok(Json(serde_json::json!(folders)))
}
