//! The `ObjectStore` trait, the seam between services and blob storage.

use async_trait::async_trait;
use bytes::Bytes;

use stratus_core::{AppError, AppResult};

/// Durable blob storage keyed by path.
///
/// Signed URLs are ephemeral capabilities: the store enforces the expiry
/// window itself and nothing is persisted about issued URLs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Short provider name for logging ("local", "s3").
    fn provider_type(&self) -> &str;

    /// Write a blob under the given key.
    async fn put(&self, key: &str, data: Bytes, content_type: Option<&str>) -> AppResult<()>;

    /// Read a whole blob.
    async fn get(&self, key: &str) -> AppResult<Bytes>;

    /// Delete a blob. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Derive the permanent public URL for a key.
    fn public_url(&self, key: &str) -> String;

    /// Mint a signed download URL valid for the provider's configured
    /// window (600 seconds by default).
    async fn signed_url(&self, key: &str) -> AppResult<String>;

    /// The lifetime of signed URLs in seconds.
    fn signed_url_ttl_seconds(&self) -> u64;

    /// Verify a signed-URL capability presented back to this server.
    ///
    /// Only meaningful for providers whose signed URLs point at the
    /// server's own public download route; providers that hand out
    /// third-party URLs reject every presentation.
    fn verify_signed_url(&self, _key: &str, _expires: i64, _signature: &str) -> AppResult<()> {
        Err(AppError::not_found("Invalid signed URL"))
    }

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
