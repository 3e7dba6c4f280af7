//! Local filesystem object store.
//!
//! Blobs live under a configured root directory. Signed URLs point back
//! at the server's own public download route and carry an expiry
//! timestamp plus an HMAC-SHA256 signature over `key\nexpires`, so the
//! capability is stateless and verified on presentation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

use stratus_core::config::storage::LocalStorageConfig;
use stratus_core::{AppError, AppResult};

use crate::store::ObjectStore;

type HmacSha256 = Hmac<Sha256>;

/// Local filesystem storage provider.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
    signing_secret: Vec<u8>,
    public_base_url: String,
    signed_url_ttl_seconds: u64,
}

impl LocalObjectStore {
    /// Create a new local provider rooted at the configured directory.
    pub fn new(
        config: &LocalStorageConfig,
        public_base_url: &str,
        signed_url_ttl_seconds: u64,
    ) -> AppResult<Self> {
        std::fs::create_dir_all(&config.root_path).map_err(|e| {
            AppError::with_source(
                stratus_core::error::ErrorKind::Storage,
                format!("Failed to create storage root '{}'", config.root_path),
                e,
            )
        })?;

        Ok(Self {
            root: PathBuf::from(&config.root_path),
            signing_secret: config.url_signing_secret.as_bytes().to_vec(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            signed_url_ttl_seconds,
        })
    }

    /// Resolve a key to a path under the root, rejecting traversal.
    fn resolve(&self, key: &str) -> AppResult<PathBuf> {
        if !is_safe_key(key) {
            return Err(AppError::validation(format!("Invalid object key: '{key}'")));
        }
        Ok(self.root.join(key))
    }

    fn signature(&self, key: &str, expires: i64) -> String {
        let mut mac = HmacSha256::new_from_slice(&self.signing_secret)
            .expect("HMAC accepts any key length");
        mac.update(key.as_bytes());
        mac.update(b"\n");
        mac.update(expires.to_string().as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Verify a signed-URL signature and expiry for a key.
    ///
    /// Used by the public download handler. An expired or forged
    /// signature is reported as `NotFound` so the route does not act as
    /// a signature oracle.
    pub fn verify_signed_request(&self, key: &str, expires: i64, sig: &str) -> AppResult<()> {
        if expires < Utc::now().timestamp() {
            return Err(AppError::not_found("Signed URL expired"));
        }
        let sig_bytes =
            hex::decode(sig).map_err(|_| AppError::not_found("Invalid signed URL"))?;
        let mut mac = HmacSha256::new_from_slice(&self.signing_secret)
            .expect("HMAC accepts any key length");
        mac.update(key.as_bytes());
        mac.update(b"\n");
        mac.update(expires.to_string().as_bytes());
        mac.verify_slice(&sig_bytes)
            .map_err(|_| AppError::not_found("Invalid signed URL"))
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn put(&self, key: &str, data: Bytes, _content_type: Option<&str>) -> AppResult<()> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &data).await?;
        debug!(key, bytes = data.len(), "Blob written");
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<Bytes> {
        let path = self.resolve(key)?;
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::not_found(format!("Object '{key}' not found")))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let path = self.resolve(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/api/public/files/{key}", self.public_base_url)
    }

    async fn signed_url(&self, key: &str) -> AppResult<String> {
        let expires = Utc::now().timestamp() + self.signed_url_ttl_seconds as i64;
        let sig = self.signature(key, expires);
        Ok(format!(
            "{}/api/public/files/{key}?expires={expires}&sig={sig}",
            self.public_base_url
        ))
    }

    fn signed_url_ttl_seconds(&self) -> u64 {
        self.signed_url_ttl_seconds
    }

    fn verify_signed_url(&self, key: &str, expires: i64, signature: &str) -> AppResult<()> {
        self.verify_signed_request(key, expires, signature)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(Path::new(&self.root).is_dir())
    }
}

/// A key is safe when it has no empty, `.` or `..` segments and no
/// backslashes or NUL bytes.
fn is_safe_key(key: &str) -> bool {
    if key.is_empty() || key.contains('\\') || key.contains('\0') {
        return false;
    }
    key.split('/')
        .all(|seg| !seg.is_empty() && seg != "." && seg != "..")
}
