//! Ownership guard, the single authorization primitive for file and
//! folder operations.
//!
//! Every check is one owner-scoped query, re-run per request. A resource
//! that exists but belongs to another user is indistinguishable from one
//! that does not exist: both come back `NotFound`. This uniform-404
//! policy applies to permission-management paths as well, so no route
//! leaks resource existence through a status-code difference.

use std::sync::Arc;

use uuid::Uuid;

use stratus_core::{AppError, AppResult};
use stratus_database::repositories::file::FileRepository;
use stratus_database::repositories::folder::FolderRepository;
use stratus_entity::file::StoredFile;
use stratus_entity::folder::Folder;

/// Authorizes file and folder access by ownership.
#[derive(Debug, Clone)]
pub struct OwnershipGuard {
    file_repo: Arc<FileRepository>,
    folder_repo: Arc<FolderRepository>,
}

impl OwnershipGuard {
    /// Creates a new ownership guard.
    pub fn new(file_repo: Arc<FileRepository>, folder_repo: Arc<FolderRepository>) -> Self {
        Self {
            file_repo,
            folder_repo,
        }
    }

    /// Fetch a file if and only if `user_id` owns it.
    pub async fn require_file_owner(
        &self,
        user_id: Uuid,
        file_id: Uuid,
    ) -> AppResult<StoredFile> {
        self.file_repo
            .find_owned(file_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))
    }

    /// Fetch a folder if and only if `user_id` owns it.
    pub async fn require_folder_owner(
        &self,
        user_id: Uuid,
        folder_id: Uuid,
    ) -> AppResult<Folder> {
        self.folder_repo
            .find_owned(folder_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }
}
