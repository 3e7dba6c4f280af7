//! File upload: blob write followed by metadata insert.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use stratus_auth::guard::OwnershipGuard;
use stratus_core::error::AppError;
use stratus_core::result::AppResult;
use stratus_database::repositories::FileRepository;
use stratus_entity::file::{CreateFile, StoredFile};
use stratus_storage::store::ObjectStore;
use uuid::Uuid;

use crate::context::RequestContext;

/// Result of a successful upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// The object-store key the blob lives under.
    pub file_path: String,
    /// Stable public URL for the blob.
    pub public_url: String,
    /// The persisted metadata record.
    pub saved_file: StoredFile,
}

/// Handles multipart file uploads.
pub struct UploadService {
    guard: Arc<OwnershipGuard>,
    file_repo: Arc<FileRepository>,
    store: Arc<dyn ObjectStore>,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        guard: Arc<OwnershipGuard>,
        file_repo: Arc<FileRepository>,
        store: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            guard,
            file_repo,
            store,
        }
    }

    /// Uploads a file for the acting user.
    ///
    /// The blob is written first; if the metadata insert then fails the
    /// blob is deleted again so no unreferenced object is left behind.
    /// A failed compensation is logged and the original error returned.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        file_name: &str,
        content_type: &str,
        data: Bytes,
        folder_id: Option<Uuid>,
    ) -> AppResult<UploadedFile> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(AppError::validation("File name must not be empty"));
        }
        if data.is_empty() {
            return Err(AppError::validation("File content must not be empty"));
        }
        if let Some(folder_id) = folder_id {
            self.guard.require_folder_owner(ctx.user_id, folder_id).await?;
        }

        let key = object_key(file_name, Utc::now().timestamp_millis());
        let file_size = data.len() as i64;

        self.store.put(&key, data, Some(content_type)).await?;
        let public_url = self.store.public_url(&key);

        let input = CreateFile {
            owner_id: ctx.user_id,
            file_name: file_name.to_string(),
            file_path: key.clone(),
            public_url: public_url.clone(),
            file_type: Some(content_type.to_string()),
            file_size,
            folder_id,
        };

        let saved_file = match self.file_repo.create(&input).await {
            Ok(file) => file,
            Err(err) => {
                if let Err(cleanup_err) = self.store.delete(&key).await {
                    tracing::warn!(
                        key,
                        error = %cleanup_err,
                        "failed to remove blob after metadata insert error"
                    );
                }
                return Err(err);
            }
        };

        tracing::info!(file_id = %saved_file.id, key, file_size, "file uploaded");
        Ok(UploadedFile {
            file_path: key,
            public_url,
            saved_file,
        })
    }
}

/// Builds the object-store key for an upload: a millisecond timestamp
/// prefix followed by the sanitized original name. The timestamp keeps
/// keys unique across uploads of the same name.
fn object_key(file_name: &str, timestamp_millis: i64) -> String {
    format!("{}-{}", timestamp_millis, sanitize_file_name(file_name))
}

/// Replaces anything outside `[A-Za-z0-9._-]` with an underscore so
/// the original name can never smuggle path separators into the key.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
