//! Share link repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stratus_core::error::{AppError, ErrorKind};
use stratus_core::result::AppResult;
use stratus_entity::share::{CreateShareLink, ShareLink};

/// Name of the unique constraint guarding token collisions. The database
/// constraint is the authoritative uniqueness check for share tokens.
const TOKEN_UNIQUE_CONSTRAINT: &str = "share_links_token_key";

/// Repository for share link CRUD and token lookup.
#[derive(Debug, Clone)]
pub struct ShareRepository {
    pool: PgPool,
}

impl ShareRepository {
    /// Create a new share repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new share link. Fails with `Conflict` if the token
    /// collides with an existing one.
    pub async fn create(&self, data: &CreateShareLink) -> AppResult<ShareLink> {
        sqlx::query_as::<_, ShareLink>(
            "INSERT INTO share_links (file_id, token, permission, owner_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.file_id)
        .bind(&data.token)
        .bind(data.permission)
        .bind(data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(TOKEN_UNIQUE_CONSTRAINT) =>
            {
                AppError::conflict("Share token collision")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create share link", e),
        })
    }

    /// Find a share link by exact token match.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<ShareLink>> {
        sqlx::query_as::<_, ShareLink>("SELECT * FROM share_links WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find share link", e)
            })
    }

    /// Revoke (delete) an owned share link. Returns whether a row was
    /// removed.
    pub async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM share_links WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete share link", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
