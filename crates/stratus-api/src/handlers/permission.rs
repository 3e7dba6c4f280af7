//! Permission grant handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use stratus_entity::permission::GrantRole;

use crate::dto::request::{PermissionChangeRequest, PermissionRemoveRequest};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/permissions/add
pub async fn add_permission(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PermissionChangeRequest>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let role: GrantRole = req.role.parse()?;
    let permission = state
        .permission_service
        .add_permission(auth.user_id, req.file_id, req.user_id, role)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "permission": permission })),
    ))
}

/// PUT /api/permissions/update
pub async fn update_permission(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PermissionChangeRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let role: GrantRole = req.role.parse()?;
    let permission = state
        .permission_service
        .update_permission(auth.user_id, req.file_id, req.user_id, role)
        .await?;

    Ok(Json(serde_json::json!({ "permission": permission })))
}

/// DELETE /api/permissions/remove
pub async fn remove_permission(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PermissionRemoveRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    state
        .permission_service
        .remove_permission(auth.user_id, req.file_id, req.user_id)
        .await?;

    Ok(Json(serde_json::json!({ "message": "Permission removed" })))
}
