//! Per-file permission grants.
//!
//! Grants record which users may act on a file and with what role.
//! Roles are stored and returned but not yet consulted during access
//! checks; enforcement is an extension point.

use std::sync::Arc;

use stratus_auth::guard::OwnershipGuard;
use stratus_core::error::AppError;
use stratus_core::result::AppResult;
use stratus_database::repositories::{PermissionRepository, UserRepository};
use stratus_entity::permission::{GrantRole, PermissionGrant};
use uuid::Uuid;

/// Manages permission grants on owned files.
///
/// Every method re-checks that the caller owns the target file, so a
/// revoked ownership (file trashed, deleted, or never owned) always
/// surfaces as not-found.
pub struct PermissionService {
    guard: Arc<OwnershipGuard>,
    permission_repo: Arc<PermissionRepository>,
    user_repo: Arc<UserRepository>,
}

impl PermissionService {
    /// Creates a new permission service.
    pub fn new(
        guard: Arc<OwnershipGuard>,
        permission_repo: Arc<PermissionRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            guard,
            permission_repo,
            user_repo,
        }
    }

    /// Adds a grant, or updates the role if one already exists for the
    /// same file and grantee. Repeating the call is safe and
    /// deterministic.
    pub async fn add_permission(
        &self,
        owner_id: Uuid,
        file_id: Uuid,
        grantee_id: Uuid,
        role: GrantRole,
    ) -> AppResult<PermissionGrant> {
        self.guard.require_file_owner(owner_id, file_id).await?;
        self.require_user(grantee_id).await?;
        self.permission_repo
            .upsert(owner_id, grantee_id, file_id, role)
            .await
    }

    /// Changes the role on an existing grant.
    pub async fn update_permission(
        &self,
        owner_id: Uuid,
        file_id: Uuid,
        grantee_id: Uuid,
        role: GrantRole,
    ) -> AppResult<PermissionGrant> {
        self.guard.require_file_owner(owner_id, file_id).await?;
        self.permission_repo
            .update_role(file_id, grantee_id, role)
            .await?
            .ok_or_else(|| AppError::not_found("Permission not found"))
    }

    /// Removes a grant.
    pub async fn remove_permission(
        &self,
        owner_id: Uuid,
        file_id: Uuid,
        grantee_id: Uuid,
    ) -> AppResult<()> {
        self.guard.require_file_owner(owner_id, file_id).await?;
        let deleted = self.permission_repo.delete(file_id, grantee_id).await?;
        if !deleted {
            return Err(AppError::not_found("Permission not found"));
        }
        Ok(())
    }

    async fn require_user(&self, user_id: Uuid) -> AppResult<()> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        Ok(())
    }
}
