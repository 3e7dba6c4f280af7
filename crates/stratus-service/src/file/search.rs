//! Name search over the caller's files and folders.

use std::sync::Arc;

use stratus_core::error::AppError;
use stratus_core::result::AppResult;
use stratus_database::repositories::{FileRepository, FolderRepository};
use stratus_entity::file::StoredFile;
use stratus_entity::folder::Folder;
use uuid::Uuid;

/// Default and maximum page sizes for substring file search.
const DEFAULT_SEARCH_LIMIT: u64 = 20;
const MAX_SEARCH_LIMIT: u64 = 100;

/// Searches file and folder names, always scoped to the owner.
pub struct SearchService {
    file_repo: Arc<FileRepository>,
    folder_repo: Arc<FolderRepository>,
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(file_repo: Arc<FileRepository>, folder_repo: Arc<FolderRepository>) -> Self {
        Self {
            file_repo,
            folder_repo,
        }
    }

    /// Case-insensitive substring search over active file names.
    pub async fn search_files(
        &self,
        owner_id: Uuid,
        query: &str,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> AppResult<Vec<StoredFile>> {
        let query = require_query(query)?;
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT).clamp(1, MAX_SEARCH_LIMIT);
        let offset = offset.unwrap_or(0);
        self.file_repo
            .search_by_name(owner_id, query, limit, offset)
            .await
    }

    /// Case-insensitive substring search over folder names.
    pub async fn search_folders(&self, owner_id: Uuid, query: &str) -> AppResult<Vec<Folder>> {
        let query = require_query(query)?;
        self.folder_repo.search_by_name(owner_id, query).await
    }

    /// Full-text search over active file names.
    pub async fn search_fulltext(&self, owner_id: Uuid, query: &str) -> AppResult<Vec<StoredFile>> {
        let query = require_query(query)?;
        self.file_repo.search_fulltext(owner_id, query).await
    }
}

fn require_query(query: &str) -> AppResult<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("Search query must not be empty"));
    }
    Ok(trimmed)
}
