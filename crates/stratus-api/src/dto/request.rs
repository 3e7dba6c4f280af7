//! Request body and query DTOs.
//!
//! Bodies written by the JavaScript frontend use camelCase; the aliases
//! keep snake_case working for API clients.

use serde::Deserialize;
use uuid::Uuid;

/// POST /api/auth/register
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/folders
#[derive(Debug, Deserialize)]
pub struct CreateFolderRequest {
    pub name: String,
    #[serde(default, alias = "parentId")]
    pub parent_id: Option<Uuid>,
}

/// PUT /api/files/{id}/rename
#[derive(Debug, Deserialize)]
pub struct RenameFileRequest {
    #[serde(alias = "newName")]
    pub new_name: String,
}

/// POST /api/permissions/add and PUT /api/permissions/update
#[derive(Debug, Deserialize)]
pub struct PermissionChangeRequest {
    #[serde(alias = "fileId")]
    pub file_id: Uuid,
    #[serde(alias = "userId")]
    pub user_id: Uuid,
    pub role: String,
}

/// DELETE /api/permissions/remove
#[derive(Debug, Deserialize)]
pub struct PermissionRemoveRequest {
    #[serde(alias = "fileId")]
    pub file_id: Uuid,
    #[serde(alias = "userId")]
    pub user_id: Uuid,
}

/// GET /api/search/* query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// POST /api/payment/create-checkout-session
#[derive(Debug, Default, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default, alias = "fileId")]
    pub file_id: Option<String>,
}

/// Signed-URL query parameters on the public download route.
#[derive(Debug, Deserialize)]
pub struct SignedUrlQuery {
    pub expires: Option<i64>,
    pub sig: Option<String>,
}
