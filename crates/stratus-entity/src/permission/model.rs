//! Per-file permission grant entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use stratus_core::AppError;

/// Collaborator role on a file.
///
/// Roles are stored and managed by the owner but deliberately not
/// consulted by file routes; they are an extension point for future
/// role-based gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "grant_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GrantRole {
    /// Read-only collaborator.
    Viewer,
    /// Read-write collaborator.
    Editor,
}

impl GrantRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Editor => "editor",
        }
    }
}

impl std::fmt::Display for GrantRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GrantRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "viewer" => Ok(Self::Viewer),
            "editor" => Ok(Self::Editor),
            _ => Err(AppError::validation(format!("Invalid role: '{s}'"))),
        }
    }
}

/// A permission grant from a file owner to a collaborator.
///
/// Unique per `(file_id, user_id)` pair; only the file owner may create,
/// change, or revoke grants for that file.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PermissionGrant {
    /// Unique grant identifier.
    pub id: Uuid,
    /// The granting owner (always the file's owner).
    pub owner_id: Uuid,
    /// The grantee.
    pub user_id: Uuid,
    /// The file the grant applies to.
    pub file_id: Uuid,
    /// Collaborator role.
    pub role: GrantRole,
    /// When the grant was created.
    pub created_at: DateTime<Utc>,
}
