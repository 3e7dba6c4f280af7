//! File upload, listing, rename, trash lifecycle, and download handlers.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use uuid::Uuid;

use stratus_core::error::AppError;

use crate::dto::request::RenameFileRequest;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/upload (multipart, field "file", optional "folderId")
pub async fn upload_file(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Json<serde_json::Value>> {
    let mut file: Option<(String, String, Bytes)> = None;
    let mut folder_id: Option<Uuid> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::validation("File field is missing a filename"))?;
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read file field: {e}")))?;
                file = Some((file_name, content_type, data));
            }
            "folderId" | "folder_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Malformed folder field: {e}")))?;
                if !text.is_empty() {
                    folder_id = Some(
                        text.parse()
                            .map_err(|_| AppError::validation("folderId must be a UUID"))?,
                    );
                }
            }
            _ => {}
        }
    }

    let (file_name, content_type, data) =
        file.ok_or_else(|| AppError::validation("Multipart field 'file' is required"))?;

    let uploaded = state
        .upload_service
        .upload(&auth, &file_name, &content_type, data, folder_id)
        .await?;

    Ok(Json(serde_json::json!({
        "filePath": uploaded.file_path,
        "publicUrl": uploaded.public_url,
        "savedFile": uploaded.saved_file,
    })))
}

/// GET /api/files?page&limit&folder_id
pub async fn list_files(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let folder_id = params.folder_id;
    let page = state
        .file_service
        .list_files(&auth, folder_id, &params.into_page_request())
        .await?;

    Ok(Json(serde_json::json!({
        "page": page.page,
        "limit": page.limit,
        "total": page.total,
        "files": page.items,
    })))
}

/// PUT /api/files/{id}/rename
pub async fn rename_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<RenameFileRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let file = state.file_service.rename_file(&auth, id, &req.new_name).await?;
    Ok(Json(serde_json::json!({ "file": file })))
}

/// DELETE /api/files/{id}/trash
pub async fn trash_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    let file = state.file_service.trash_file(&auth, id).await?;
    Ok(Json(serde_json::json!({ "file": file })))
}

/// PUT /api/files/{id}/restore
pub async fn restore_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    let file = state.file_service.restore_file(&auth, id).await?;
    Ok(Json(serde_json::json!({ "file": file })))
}

/// GET /api/trash
pub async fn list_trash(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<serde_json::Value>> {
    let files = state.file_service.list_trash(&auth).await?;
    Ok(Json(serde_json::json!(files)))
}

/// DELETE /api/files/{id}/permanent
pub async fn delete_permanent(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    state.file_service.delete_permanent(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "message": "File permanently deleted" }),
    ))
}

/// GET /api/files/{id}/signed-url
pub async fn signed_url(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    let signed = state.download_service.signed_url(&auth, id).await?;
    Ok(Json(serde_json::json!({
        "signedUrl": signed.url,
        "expiresIn": signed.expires_in,
    })))
}

/// GET /api/files/{id}/download, a 302 to a fresh signed URL.
pub async fn download_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Response> {
    let url = state.download_service.download_url(&auth, id).await?;
    Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
}
