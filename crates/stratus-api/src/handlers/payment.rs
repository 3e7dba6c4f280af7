//! Checkout session handler.

use axum::extract::State;
use axum::Json;

use crate::dto::request::CheckoutRequest;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/payment/create-checkout-session
pub async fn create_checkout_session(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CheckoutRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let url = state
        .checkout_service
        .create_checkout_session(req.file_id.as_deref())
        .await?;

    Ok(Json(serde_json::json!({ "url": url })))
}
