//! Signed-URL issuance and download redirects.

use std::sync::Arc;

use stratus_auth::guard::OwnershipGuard;
use stratus_core::result::AppResult;
use stratus_storage::store::ObjectStore;
use uuid::Uuid;

use crate::context::RequestContext;

/// A time-limited download capability.
#[derive(Debug, Clone)]
pub struct SignedUrl {
    pub url: String,
    /// Seconds until the URL stops working.
    pub expires_in: u64,
}

/// Issues signed download URLs for owned files.
///
/// Expiry is enforced entirely by the object store's capability token.
/// Once minted, a URL stays valid for its full window even if the file
/// is trashed or deleted afterwards.
pub struct DownloadService {
    guard: Arc<OwnershipGuard>,
    store: Arc<dyn ObjectStore>,
}

impl DownloadService {
    /// Creates a new download service.
    pub fn new(guard: Arc<OwnershipGuard>, store: Arc<dyn ObjectStore>) -> Self {
        Self { guard, store }
    }

    /// Mints a signed URL for a file the caller owns.
    pub async fn signed_url(&self, ctx: &RequestContext, file_id: Uuid) -> AppResult<SignedUrl> {
        let file = self.guard.require_file_owner(ctx.user_id, file_id).await?;
        let url = self.store.signed_url(&file.file_path).await?;
        Ok(SignedUrl {
            url,
            expires_in: self.store.signed_url_ttl_seconds(),
        })
    }

    /// Mints a signed URL intended for a redirect response.
    pub async fn download_url(&self, ctx: &RequestContext, file_id: Uuid) -> AppResult<String> {
        Ok(self.signed_url(ctx, file_id).await?.url)
    }
}
