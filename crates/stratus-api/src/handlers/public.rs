//! Public blob serving for the local storage provider.
//!
//! Serves permanent public URLs and verifies signed URLs minted by the
//! local provider. The S3 provider hands out URLs pointing at the
//! bucket directly, so this route never sees them.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use stratus_core::error::AppError;

use crate::dto::request::SignedUrlQuery;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/public/files/{key}
///
/// With `expires` and `sig` query parameters the request is treated as
/// a signed-URL presentation and verified; without them the blob is
/// served as a plain public URL. A half-signed request is rejected.
pub async fn serve_file(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<SignedUrlQuery>,
) -> ApiResult<Response> {
    match (query.expires, query.sig.as_deref()) {
        (None, None) => {}
        (Some(expires), Some(sig)) => {
            state.object_store.verify_signed_url(&key, expires, sig)?;
        }
        _ => return Err(AppError::not_found("Invalid signed URL").into()),
    }

    let data = state.object_store.get(&key).await?;
    let disposition = format!("inline; filename=\"{}\"", file_name_of(&key));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        data,
    )
        .into_response())
}

fn file_name_of(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}
