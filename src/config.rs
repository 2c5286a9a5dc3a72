use crate::constants::R2_ENDPOINT_SUFFIX;
use crate::error::{Result, UploadError};
use std::env;

/// Connection parameters for the R2 bucket, read once at startup.
#[derive(Debug, Clone)]
pub struct R2Config {
    pub account_id: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket_name: String,
    pub public_url: String,
}

impl R2Config {
    /// Reads the five required `R2_*` environment variables.
    ///
    /// The first missing variable aborts with `UploadError::MissingEnv`;
    /// no defaults are applied. The public URL keeps whatever shape it
    /// has apart from trailing-slash trimming.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            account_id: require_env("R2_ACCOUNT_ID")?,
            access_key_id: require_env("R2_ACCESS_KEY_ID")?,
            secret_access_key: require_env("R2_SECRET_ACCESS_KEY")?,
            bucket_name: require_env("R2_BUCKET_NAME")?,
            public_url: require_env("R2_PUBLIC_URL")?
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// S3-compatible endpoint derived from the account id.
    pub fn endpoint_url(&self) -> String {
        format!("https://{}.{}", self.account_id, R2_ENDPOINT_SUFFIX)
    }

    /// Public URL from which an uploaded object can be fetched.
    pub fn public_object_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_url, key)
    }
}

fn require_env(name: &'static str) -> Result<String> {
    env::var(name).map_err(|_| UploadError::MissingEnv(name))
}
