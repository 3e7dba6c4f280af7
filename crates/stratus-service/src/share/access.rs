//! Token-based share access for unauthenticated callers.

use std::sync::Arc;

use stratus_core::error::AppError;
use stratus_core::result::AppResult;
use stratus_database::repositories::{FileRepository, ShareRepository};
use stratus_entity::file::StoredFile;
use stratus_entity::share::SharePermission;

/// The file a share token resolves to, with the granted permission.
#[derive(Debug, Clone)]
pub struct ShareAccess {
    pub file: StoredFile,
    pub permission: SharePermission,
}

/// Resolves share tokens to files without requiring authentication.
pub struct AccessService {
    share_repo: Arc<ShareRepository>,
    file_repo: Arc<FileRepository>,
}

impl AccessService {
    /// Creates a new access service.
    pub fn new(share_repo: Arc<ShareRepository>, file_repo: Arc<FileRepository>) -> Self {
        Self { share_repo, file_repo }
    }

    /// Resolves a token to its shared file.
    ///
    /// An unknown token, a revoked link, and a trashed or deleted file
    /// all produce the same not-found error so that a caller cannot
    /// distinguish the cases.
    pub async fn resolve(&self, token: &str) -> AppResult<ShareAccess> {
        let share = self
            .share_repo
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Invalid share link"))?;

        let file = self
            .file_repo
            .find_active(share.file_id)
            .await?
            .ok_or_else(|| AppError::not_found("Invalid share link"))?;

        Ok(ShareAccess {
            file,
            permission: share.permission,
        })
    }
}
