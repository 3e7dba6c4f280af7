//! File metadata operations: listing, renaming, trash lifecycle, and
//! permanent deletion.

use std::sync::Arc;

use stratus_auth::guard::OwnershipGuard;
use stratus_core::error::AppError;
use stratus_core::result::AppResult;
use stratus_core::types::pagination::{Page, PageRequest};
use stratus_database::repositories::FileRepository;
use stratus_entity::file::StoredFile;
use stratus_storage::store::ObjectStore;
use uuid::Uuid;

use crate::context::RequestContext;

/// File operations scoped to the acting user.
pub struct FileService {
    guard: Arc<OwnershipGuard>,
    file_repo: Arc<FileRepository>,
    store: Arc<dyn ObjectStore>,
}

impl FileService {
    /// Creates a new file service.
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

    /// Lists the caller's active files, newest first, optionally
    /// filtered to one folder.
    pub async fn list_files(
        &self,
        ctx: &RequestContext,
        folder_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<Page<StoredFile>> {
        self.file_repo.list_owned(ctx.user_id, folder_id, page).await
    }

    /// Renames an owned file. The stored blob key is unchanged; only
    /// the display name moves.
    pub async fn rename_file(
        &self,
        ctx: &RequestContext,
        file_id: Uuid,
        new_name: &str,
    ) -> AppResult<StoredFile> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(AppError::validation("File name must not be empty"));
        }
        self.file_repo
            .rename(file_id, ctx.user_id, new_name)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))
    }

    /// Soft-deletes a file. The blob stays in the object store so the
    /// file can be restored.
    pub async fn trash_file(&self, ctx: &RequestContext, file_id: Uuid) -> AppResult<StoredFile> {
        self.file_repo
            .set_trashed(file_id, ctx.user_id, true)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))
    }

    /// Restores a trashed file.
    pub async fn restore_file(&self, ctx: &RequestContext, file_id: Uuid) -> AppResult<StoredFile> {
        self.file_repo
            .set_trashed(file_id, ctx.user_id, false)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))
    }

    /// Lists the caller's trashed files, most recently trashed first.
    pub async fn list_trash(&self, ctx: &RequestContext) -> AppResult<Vec<StoredFile>> {
        self.file_repo.list_trashed(ctx.user_id).await
    }

    /// Permanently deletes a file: blob first, then the record.
    ///
    /// Blob deletion precedes record deletion so a failure leaves a
    /// still-referenced blob rather than a dangling record. Share links
    /// and permission grants cascade with the row.
    pub async fn delete_permanent(&self, ctx: &RequestContext, file_id: Uuid) -> AppResult<()> {
        let file = self.guard.require_file_owner(ctx.user_id, file_id).await?;

        self.store.delete(&file.file_path).await?;

        let deleted = self.file_repo.delete(file_id, ctx.user_id).await?;
        if !deleted {
            // Row vanished between the guard check and the delete.
            // The blob is already gone, which is the end state anyway.
            tracing::warn!(%file_id, "file row missing after blob delete");
        }
        tracing::info!(%file_id, owner_id = %ctx.user_id, "file permanently deleted");
        Ok(())
    }
}
