//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A file record referencing a blob in the object store.
///
/// Lifecycle: created after a successful blob write; soft-deleted by
/// setting `is_deleted` + `deleted_at`; restored by clearing both;
/// hard-deleted by removing the blob first and the row second.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoredFile {
    /// Unique file identifier.
    pub id: Uuid,
    /// The file owner. Immutable after creation.
    pub owner_id: Uuid,
    /// Display name (including extension).
    pub file_name: String,
    /// Object-store key for the blob.
    pub file_path: String,
    /// Publicly derivable URL for the blob.
    pub public_url: String,
    /// MIME type of the file.
    pub file_type: Option<String>,
    /// File size in bytes.
    pub file_size: i64,
    /// Containing folder (null = root).
    pub folder_id: Option<Uuid>,
    /// Whether the file is in the trash.
    pub is_deleted: bool,
    /// When the file was trashed.
    pub deleted_at: Option<DateTime<Utc>>,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
}

impl StoredFile {
    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.file_name)
            .map(|ext| ext.to_lowercase())
    }
}

/// Data required to create a new file record.
#[derive(Debug, Clone)]
pub struct CreateFile {
    /// The file owner.
    pub owner_id: Uuid,
    /// Display name.
    pub file_name: String,
    /// Object-store key.
    pub file_path: String,
    /// Public URL.
    pub public_url: String,
    /// MIME type.
    pub file_type: Option<String>,
    /// Size in bytes.
    pub file_size: i64,
    /// Containing folder.
    pub folder_id: Option<Uuid>,
}
