use crate::config::R2Config;
use crate::error::{Result, UploadError};
use aws_config::retry::RetryConfig;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

/// One (key, size) pair as reported by the bucket listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteObject {
    pub key: String,
    pub size: u64,
}

/// Thin façade over the S3 API as R2 exposes it: put, paginated list,
/// and idempotent delete against a single bucket.
#[derive(Clone)]
pub struct R2Client {
    client: Client,
    bucket: String,
}

impl R2Client {
    pub async fn new(config: &R2Config) -> Self {
        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "r2-env",
        );

        // R2 uses a fixed "auto" region and a per-account endpoint.
        // The SDK's built-in retries are disabled: a transient failure
        // surfaces directly to the caller.
        let shared_config = aws_config::from_env()
            .endpoint_url(config.endpoint_url())
            .region(Region::new("auto"))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        Self {
            client: Client::new(&shared_config),
            bucket: config.bucket_name.clone(),
        }
    }

    /// Uploads one object, silently overwriting any existing key.
    pub async fn put_object(&self, key: &str, data: Vec<u8>, content_type: &str) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| UploadError::Storage(format!("Failed to upload {}: {}", key, e)))?;
        Ok(())
    }

    /// Returns every object in the bucket, following continuation tokens
    /// across however many pages the store requires. Each call starts a
    /// fresh pagination.
    pub async fn list_objects(&self) -> Result<Vec<RemoteObject>> {
        let mut objects = Vec::new();
        let mut continuation: Option<String> = None;

        loop {
            let mut request = self.client.list_objects_v2().bucket(&self.bucket);
            if let Some(token) = continuation.take() {
                request = request.continuation_token(token);
            }

            let page = request
                .send()
                .await
                .map_err(|e| UploadError::Storage(format!("Failed to list objects: {}", e)))?;

            for object in page.contents() {
                objects.push(RemoteObject {
                    key: object.key().unwrap_or_default().to_string(),
                    size: object.size().unwrap_or(0).max(0) as u64,
                });
            }

            match page.next_continuation_token() {
                Some(token) => continuation = Some(token.to_string()),
                None => break,
            }
        }

        Ok(objects)
    }

    /// Removes one object. Deleting a nonexistent key succeeds, per S3's
    /// idempotent-delete semantics.
    pub async fn delete_object(&self, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| UploadError::Storage(format!("Failed to delete {}: {}", key, e)))?;
        Ok(())
    }
}
