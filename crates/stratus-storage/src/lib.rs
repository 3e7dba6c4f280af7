//! # stratus-storage
//!
//! Object storage providers for Stratus: local filesystem and
//! S3-compatible stores. Both expose blob upload/delete, public URL
//! derivation, and time-limited signed download URLs behind the
//! [`ObjectStore`] trait.

pub mod providers;
pub mod store;

use std::sync::Arc;

use stratus_core::config::storage::StorageConfig;
use stratus_core::AppResult;
use stratus_core::AppError;

pub use store::ObjectStore;

/// Build the configured object store provider.
///
/// `public_base_url` is the server's externally reachable base URL, used
/// by the local provider to mint self-served signed URLs.
pub async fn from_config(
    config: &StorageConfig,
    public_base_url: &str,
) -> AppResult<Arc<dyn ObjectStore>> {
    match config.provider.as_str() {
        "local" => Ok(Arc::new(providers::local::LocalObjectStore::new(
            &config.local,
            public_base_url,
            config.signed_url_ttl_seconds,
        )?)),
        "s3" => Ok(Arc::new(
            providers::s3::S3ObjectStore::new(&config.s3, config.signed_url_ttl_seconds).await?,
        )),
        other => Err(AppError::configuration(format!(
            "Unknown storage provider: '{other}'"
        ))),
    }
}
