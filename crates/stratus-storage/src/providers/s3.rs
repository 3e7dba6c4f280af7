//! S3-compatible object store.
//!
//! Uses the AWS SDK for uploads, deletes, and presigned GET URLs. The
//! expiry of signed URLs is enforced entirely by the object store; once
//! minted, a URL stays valid for the full window.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use tracing::{debug, info};

use stratus_core::config::storage::S3StorageConfig;
use stratus_core::{AppError, AppResult};

use crate::store::ObjectStore;

/// S3-compatible storage provider.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    region: String,
    endpoint: String,
    signed_url_ttl_seconds: u64,
}

impl S3ObjectStore {
    /// Create a new S3 provider from configuration.
    ///
    /// When no static credentials are configured, the ambient AWS
    /// credential chain (environment, profile, IMDS) is used.
    pub async fn new(config: &S3StorageConfig, signed_url_ttl_seconds: u64) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("S3 bucket name is required"));
        }

        info!(
            endpoint = %config.endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "Initializing S3 object store"
        );

        let client = if config.access_key.is_empty() {
            let shared = aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(config.region.clone()))
                .load()
                .await;
            let mut builder = aws_sdk_s3::config::Builder::from(&shared).force_path_style(true);
            if !config.endpoint.is_empty() {
                builder = builder.endpoint_url(&config.endpoint);
            }
            Client::from_conf(builder.build())
        } else {
            let credentials = Credentials::new(
                config.access_key.clone(),
                config.secret_key.clone(),
                None,
                None,
                "stratus-config",
            );
            let mut builder = aws_sdk_s3::config::Builder::new()
                .behavior_version(BehaviorVersion::latest())
                .region(Region::new(config.region.clone()))
                .credentials_provider(credentials)
                .force_path_style(true);
            if !config.endpoint.is_empty() {
                builder = builder.endpoint_url(&config.endpoint);
            }
            Client::from_conf(builder.build())
        };

        Ok(Self {
            client,
            bucket: config.bucket.clone(),
            region: config.region.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            signed_url_ttl_seconds,
        })
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn put(&self, key: &str, data: Bytes, content_type: Option<&str>) -> AppResult<()> {
        let mut request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data));
        if let Some(ct) = content_type {
            request = request.content_type(ct);
        }
        request
            .send()
            .await
            .map_err(|e| AppError::storage(format!("S3 upload failed for '{key}': {e}")))?;
        debug!(key, "Blob uploaded to S3");
        Ok(())
    }

    async fn get(&self, key: &str) -> AppResult<Bytes> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AppError::storage(format!("S3 read failed for '{key}': {e}")))?;
        let data = output
            .body
            .collect()
            .await
            .map_err(|e| AppError::storage(format!("S3 body read failed for '{key}': {e}")))?;
        Ok(data.into_bytes())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AppError::storage(format!("S3 delete failed for '{key}': {e}")))?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        if self.endpoint.is_empty() {
            format!(
                "https://{}.s3.{}.amazonaws.com/{key}",
                self.bucket, self.region
            )
        } else {
            format!("{}/{}/{key}", self.endpoint, self.bucket)
        }
    }

    async fn signed_url(&self, key: &str) -> AppResult<String> {
        let presigning = PresigningConfig::expires_in(Duration::from_secs(
            self.signed_url_ttl_seconds,
        ))
        .map_err(|e| AppError::storage(format!("Invalid presigning window: {e}")))?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| AppError::storage(format!("S3 presign failed for '{key}': {e}")))?;

        Ok(presigned.uri().to_string())
    }

    fn signed_url_ttl_seconds(&self) -> u64 {
        self.signed_url_ttl_seconds
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map(|_| true)
            .map_err(|e| AppError::storage(format!("S3 health check failed: {e}")))
    }
}
