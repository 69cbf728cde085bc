//! src/storage/s3.rs
use crate::configuration::StorageSettings;
use crate::error::PipelineError;
use crate::storage::ObjectStore;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::Config;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::config::Region;
use secrecy::ExposeSecret;

/// S3-backed [`ObjectStore`]. Buckets are addressed per call, so one client
/// serves every stage of a job.
#[derive(Debug, Clone)]
pub struct S3Storage {
    client: Client,
}

impl S3Storage {
    #[tracing::instrument(name = "Create S3Storage handle", skip(settings))]
    pub fn new(settings: &StorageSettings) -> Self {
        let creds = Credentials::new(
            settings.aws_access_key_id.clone(),
            settings.aws_secret_key.expose_secret(),
            None,
            None,
            "wordmill",
        );

        let config = Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .credentials_provider(creds)
            .region(Region::new(settings.aws_region.clone()))
            .endpoint_url(settings.aws_endpoint_url.clone())
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(config),
        }
    }

    /// Creates `bucket` if it doesn't already exist. A bucket this client
    /// already owns is fine; anything else is surfaced.
    #[tracing::instrument(name = "Ensure bucket", skip(self))]
    pub async fn ensure_bucket(&self, bucket: &str) -> Result<(), PipelineError> {
        match self.client.create_bucket().bucket(bucket).send().await {
            Ok(_) => {
                tracing::debug!("created bucket: {}", bucket);
                Ok(())
            }
            Err(err) => {
                if let Some(service_error) = err.as_service_error() {
                    if service_error.is_bucket_already_exists()
                        || service_error.is_bucket_already_owned_by_you()
                    {
                        return Ok(());
                    }
                }
                Err(PipelineError::UpstreamFailure {
                    key: bucket.to_string(),
                    source: err.into(),
                })
            }
        }
    }
}

#[async_trait::async_trait]
impl ObjectStore for S3Storage {
    #[tracing::instrument(name = "Get object", skip(self))]
    async fn get(&self, bucket: &str, key: &str) -> Result<Vec<u8>, PipelineError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                let missing = err
                    .as_service_error()
                    .map(|e| e.is_no_such_key())
                    .unwrap_or(false);
                if missing {
                    PipelineError::NotFound {
                        key: key.to_string(),
                    }
                } else {
                    PipelineError::UpstreamFailure {
                        key: key.to_string(),
                        source: err.into(),
                    }
                }
            })?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|err| PipelineError::UpstreamFailure {
                key: key.to_string(),
                source: err.into(),
            })?;
        Ok(data.into_bytes().to_vec())
    }

    #[tracing::instrument(name = "Put object", skip(self, data), fields(bytes = data.len()))]
    async fn put(&self, bucket: &str, key: &str, data: &[u8]) -> Result<(), PipelineError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(aws_sdk_s3::primitives::ByteStream::from(data.to_vec()))
            .send()
            .await
            .map_err(|err| PipelineError::UpstreamFailure {
                key: key.to_string(),
                source: err.into(),
            })?;
        Ok(())
    }
}
