//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use stratus_auth::jwt::JwtDecoder;
use stratus_core::config::AppConfig;
use stratus_service::account::AccountService;
use stratus_service::file::{DownloadService, FileService, SearchService, UploadService};
use stratus_service::folder::FolderService;
use stratus_service::payment::CheckoutService;
use stratus_service::permission::PermissionService;
use stratus_service::share::{AccessService, ShareService};
use stratus_storage::store::ObjectStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool, used directly by health checks.
    pub db_pool: PgPool,
    /// Object store provider.
    pub object_store: Arc<dyn ObjectStore>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,

    /// Account registration and login.
    pub account_service: Arc<AccountService>,
    /// File metadata operations.
    pub file_service: Arc<FileService>,
    /// Multipart upload handling.
    pub upload_service: Arc<UploadService>,
    /// Signed-URL issuance.
    pub download_service: Arc<DownloadService>,
    /// Name and full-text search.
    pub search_service: Arc<SearchService>,
    /// Folder operations.
    pub folder_service: Arc<FolderService>,
    /// Share link lifecycle.
    pub share_service: Arc<ShareService>,
    /// Unauthenticated share resolution.
    pub access_service: Arc<AccessService>,
    /// Per-file permission grants.
    pub permission_service: Arc<PermissionService>,
    /// Checkout session creation.
    pub checkout_service: Arc<CheckoutService>,
}
