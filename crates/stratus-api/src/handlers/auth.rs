//! Account registration, login, and profile handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let authed = state
        .account_service
        .register(&req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "token": authed.token, "user": authed.user })),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let authed = state
        .account_service
        .login(&req.email, &req.password)
        .await?;

    Ok(Json(
        serde_json::json!({ "token": authed.token, "user": authed.user }),
    ))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<serde_json::Value>> {
    let user = state.account_service.current_user(auth.user_id).await?;
    Ok(Json(serde_json::json!({ "user": user })))
}
