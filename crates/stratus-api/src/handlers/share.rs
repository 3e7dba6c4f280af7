//! Share link handlers, including the unauthenticated access route.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/share/{fileId}
pub async fn create_share(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(file_id): Path<Uuid>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let minted = state.share_service.create_share(&auth, file_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "shareUrl": minted.share_url })),
    ))
}

/// GET /api/share/access/{token}. Public; token possession is the
/// credential.
pub async fn access_share(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let access = state.access_service.resolve(&token).await?;
    Ok(Json(serde_json::json!({
        "file": access.file,
        "permission": access.permission,
    })))
}

/// DELETE /api/share/{shareId}
pub async fn revoke_share(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(share_id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    state.share_service.revoke_share(&auth, share_id).await?;
    Ok(Json(serde_json::json!({ "message": "Share link revoked" })))
}
