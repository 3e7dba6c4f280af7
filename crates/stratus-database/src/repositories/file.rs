//! File repository implementation.
//!
//! Every owner-scoped query filters on `owner_id` in SQL so that a file
//! owned by another user is indistinguishable from a missing file.

use sqlx::PgPool;
use uuid::Uuid;

use stratus_core::error::{AppError, ErrorKind};
use stratus_core::result::AppResult;
use stratus_core::types::pagination::{Page, PageRequest};
use stratus_entity::file::{CreateFile, StoredFile};

/// Repository for file CRUD, trash lifecycle, and search queries.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new file record.
    pub async fn create(&self, data: &CreateFile) -> AppResult<StoredFile> {
        sqlx::query_as::<_, StoredFile>(
            "INSERT INTO files (owner_id, file_name, file_path, public_url, file_type, file_size, folder_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.file_name)
        .bind(&data.file_path)
        .bind(&data.public_url)
        .bind(&data.file_type)
        .bind(data.file_size)
        .bind(data.folder_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file", e))
    }

    /// Find a file by ID, scoped to its owner.
    pub async fn find_owned(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<StoredFile>> {
        sqlx::query_as::<_, StoredFile>("SELECT * FROM files WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    /// Find a non-trashed file by ID alone (used when resolving share
    /// tokens, where token possession is the credential).
    pub async fn find_active(&self, id: Uuid) -> AppResult<Option<StoredFile>> {
        sqlx::query_as::<_, StoredFile>(
            "SELECT * FROM files WHERE id = $1 AND is_deleted = FALSE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    /// List an owner's non-trashed files with pagination, optionally
    /// restricted to one folder. Newest first.
    pub async fn list_owned(
        &self,
        owner_id: Uuid,
        folder_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<Page<StoredFile>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM files WHERE owner_id = $1 AND is_deleted = FALSE \
             AND ($2::uuid IS NULL OR folder_id = $2)",
        )
        .bind(owner_id)
        .bind(folder_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count files", e))?;

        let files = sqlx::query_as::<_, StoredFile>(
            "SELECT * FROM files WHERE owner_id = $1 AND is_deleted = FALSE \
             AND ($2::uuid IS NULL OR folder_id = $2) \
             ORDER BY created_at DESC LIMIT $3 OFFSET $4",
        )
        .bind(owner_id)
        .bind(folder_id)
        .bind(page.limit as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))?;

        Ok(Page::new(files, page, total as u64))
    }

    /// Rename an owned file.
    pub async fn rename(
        &self,
        id: Uuid,
        owner_id: Uuid,
        new_name: &str,
    ) -> AppResult<Option<StoredFile>> {
        sqlx::query_as::<_, StoredFile>(
            "UPDATE files SET file_name = $3 WHERE id = $1 AND owner_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(owner_id)
        .bind(new_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rename file", e))
    }

    /// Move an owned file into or out of the trash.
    pub async fn set_trashed(
        &self,
        id: Uuid,
        owner_id: Uuid,
        trashed: bool,
    ) -> AppResult<Option<StoredFile>> {
        sqlx::query_as::<_, StoredFile>(
            "UPDATE files SET is_deleted = $3, \
             deleted_at = CASE WHEN $3 THEN NOW() ELSE NULL END \
             WHERE id = $1 AND owner_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(owner_id)
        .bind(trashed)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update trash state", e))
    }

    /// List an owner's trashed files, most recently trashed first.
    pub async fn list_trashed(&self, owner_id: Uuid) -> AppResult<Vec<StoredFile>> {
        sqlx::query_as::<_, StoredFile>(
            "SELECT * FROM files WHERE owner_id = $1 AND is_deleted = TRUE \
             ORDER BY deleted_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list trash", e))
    }

    /// Permanently delete an owned file record. Returns whether a row
    /// was removed.
    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete file", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over an owner's non-trashed
    /// file names.
    pub async fn search_by_name(
        &self,
        owner_id: Uuid,
        query: &str,
        limit: u64,
        offset: u64,
    ) -> AppResult<Vec<StoredFile>> {
        let pattern = format!("%{}%", super::escape_like(query));
        sqlx::query_as::<_, StoredFile>(
            "SELECT * FROM files WHERE owner_id = $1 AND is_deleted = FALSE \
             AND file_name ILIKE $2 ORDER BY created_at DESC LIMIT $3 OFFSET $4",
        )
        .bind(owner_id)
        .bind(&pattern)
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search files", e))
    }

    /// Full-text search over an owner's non-trashed files using
    /// web-search query syntax against the generated `search_vector`.
    pub async fn search_fulltext(&self, owner_id: Uuid, query: &str) -> AppResult<Vec<StoredFile>> {
        sqlx::query_as::<_, StoredFile>(
            "SELECT * FROM files WHERE owner_id = $1 AND is_deleted = FALSE \
             AND search_vector @@ websearch_to_tsquery('english', $2) \
             ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .bind(query)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to run full-text search", e))
    }
}
