//! Folder creation and listing.

use std::sync::Arc;

use stratus_auth::guard::OwnershipGuard;
use stratus_core::error::AppError;
use stratus_core::result::AppResult;
use stratus_database::repositories::FolderRepository;
use stratus_entity::folder::{CreateFolder, Folder};
use uuid::Uuid;

use crate::context::RequestContext;

/// Folder operations scoped to the acting user.
pub struct FolderService {
    guard: Arc<OwnershipGuard>,
    folder_repo: Arc<FolderRepository>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(guard: Arc<OwnershipGuard>, folder_repo: Arc<FolderRepository>) -> Self {
        Self { guard, folder_repo }
    }

    /// Creates a folder. A parent, when given, must be owned by the
    /// caller.
    pub async fn create_folder(
        &self,
        ctx: &RequestContext,
        name: &str,
        parent_id: Option<Uuid>,
    ) -> AppResult<Folder> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name must not be empty"));
        }
        if let Some(parent_id) = parent_id {
            self.guard.require_folder_owner(ctx.user_id, parent_id).await?;
        }
        self.folder_repo
            .create(&CreateFolder {
                name: name.to_string(),
                parent_id,
                owner_id: ctx.user_id,
            })
            .await
    }

    /// Lists the caller's folders, newest first.
    pub async fn list_folders(&self, ctx: &RequestContext) -> AppResult<Vec<Folder>> {
        self.folder_repo.list_owned(ctx.user_id).await
    }
}
