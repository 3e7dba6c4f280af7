//! Share link entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Access level granted to anyone presenting a share token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "share_permission", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SharePermission {
    /// Read-only access to the referenced file.
    View,
}

impl SharePermission {
    /// Return the permission as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
        }
    }
}

impl std::fmt::Display for SharePermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A public share link for a single file.
///
/// The token is the credential: anyone holding it gets `permission`
/// access to the file until the row is deleted. Links never expire on
/// their own.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShareLink {
    /// Unique share identifier.
    pub id: Uuid,
    /// The shared file.
    pub file_id: Uuid,
    /// Opaque random token (40 hex characters).
    pub token: String,
    /// Access level granted to token holders.
    pub permission: SharePermission,
    /// The owner of the shared file at creation time.
    pub owner_id: Uuid,
    /// When the link was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new share link.
#[derive(Debug, Clone)]
pub struct CreateShareLink {
    /// The shared file.
    pub file_id: Uuid,
    /// Generated token.
    pub token: String,
    /// Access level.
    pub permission: SharePermission,
    /// The file owner.
    pub owner_id: Uuid,
}
