//! Remote sources for the database snapshot.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

use crate::{StoreError, StoreResult};

/// Read-only object source keyed by name.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn fetch(&self, key: &str) -> StoreResult<Vec<u8>>;

    /// Human readable location used in logs.
    fn describe(&self, key: &str) -> String;
}

/// Serves objects from a local directory. Used for development and tests
/// in place of a bucket.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn fetch(&self, key: &str) -> StoreResult<Vec<u8>> {
        let path = self.root.join(key);
        debug!("Reading blob {}", path.display());
        tokio::fs::read(&path)
            .await
            .map_err(|e| StoreError::Blob(format!("{}: {}", path.display(), e)))
    }

    fn describe(&self, key: &str) -> String {
        format!("file://{}", self.root.join(key).display())
    }
}

#[cfg(feature = "s3")]
pub use self::s3::S3BlobStore;

#[cfg(feature = "s3")]
mod s3 {
    use async_trait::async_trait;
    use aws_sdk_s3::Client;

    use super::BlobStore;
    use crate::{StoreError, StoreResult};

    /// Amazon S3 (or S3 compatible) snapshot source.
    pub struct S3BlobStore {
        client: Client,
        bucket: String,
    }

    impl S3BlobStore {
        /// Uses default credentials from the environment (AWS_ACCESS_KEY_ID,
        /// AWS_SECRET_ACCESS_KEY, or IAM role).
        pub async fn new(bucket: impl Into<String>, region: Option<&str>, endpoint: Option<&str>) -> Self {
            let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
            if let Some(region) = region {
                loader = loader.region(aws_config::Region::new(region.to_string()));
            }
            let config = loader.load().await;

            let client = match endpoint {
                Some(endpoint) => {
                    let s3_config = aws_sdk_s3::config::Builder::from(&config)
                        .endpoint_url(endpoint)
                        .force_path_style(true)
                        .build();
                    Client::from_conf(s3_config)
                }
                None => Client::new(&config),
            };

            Self::with_client(client, bucket)
        }

        pub fn with_client(client: Client, bucket: impl Into<String>) -> Self {
            Self {
                client,
                bucket: bucket.into(),
            }
        }
    }

    #[async_trait]
    impl BlobStore for S3BlobStore {
        async fn fetch(&self, key: &str) -> StoreResult<Vec<u8>> {
            let response = self
                .client
                .get_object()
                .bucket(&self.bucket)
                .key(key)
                .send()
                .await
                .map_err(|e| StoreError::Blob(format!("S3 download failed: {}", e)))?;

            let bytes = response
                .body
                .collect()
                .await
                .map_err(|e| StoreError::Blob(format!("S3 body read failed: {}", e)))?
                .into_bytes()
                .to_vec();

            Ok(bytes)
        }

        fn describe(&self, key: &str) -> String {
            format!("s3://{}/{}", self.bucket, key)
        }
    }
}
