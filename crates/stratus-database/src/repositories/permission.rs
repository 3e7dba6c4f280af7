//! Permission grant repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stratus_core::error::{AppError, ErrorKind};
use stratus_core::result::AppResult;
use stratus_entity::permission::{GrantRole, PermissionGrant};

/// Repository for per-file collaborator grants, unique per
/// `(file_id, user_id)`.
#[derive(Debug, Clone)]
pub struct PermissionRepository {
    pool: PgPool,
}

impl PermissionRepository {
    /// Create a new permission repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a grant, or update the role if the `(file_id, user_id)`
    /// pair already exists. A repeated add is therefore a deterministic
    /// role update.
    pub async fn upsert(
        &self,
        owner_id: Uuid,
        user_id: Uuid,
        file_id: Uuid,
        role: GrantRole,
    ) -> AppResult<PermissionGrant> {
        sqlx::query_as::<_, PermissionGrant>(
            "INSERT INTO permissions (owner_id, user_id, file_id, role) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (file_id, user_id) DO UPDATE SET role = EXCLUDED.role \
             RETURNING *",
        )
        .bind(owner_id)
        .bind(user_id)
        .bind(file_id)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add permission", e))
    }

    /// Change the role of an existing grant. Returns `None` when no
    /// grant exists for the pair.
    pub async fn update_role(
        &self,
        file_id: Uuid,
        user_id: Uuid,
        role: GrantRole,
    ) -> AppResult<Option<PermissionGrant>> {
        sqlx::query_as::<_, PermissionGrant>(
            "UPDATE permissions SET role = $3 WHERE file_id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(file_id)
        .bind(user_id)
        .bind(role)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update permission", e))
    }

    /// Revoke a grant. Returns whether a row was removed.
    pub async fn delete(&self, file_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM permissions WHERE file_id = $1 AND user_id = $2")
            .bind(file_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to remove permission", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
