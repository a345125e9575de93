/// Shared S3 utilities
///
/// Provides client construction, configuration, and object operations
/// for functions that read from and write to S3 buckets.
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::Client;

pub mod config;
pub mod error;
pub mod operations;

pub use config::S3Config;
pub use error::{classify_error, S3Error};
pub use operations::S3Operations;

/// Build an S3 client from configuration
///
/// Static credentials are used only when both halves are configured;
/// otherwise the default provider chain (env, profile, IAM role) applies.
pub async fn build_client(config: &S3Config) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(config.region.clone()));

    if let (Some(access_key_id), Some(secret_access_key)) =
        (&config.access_key_id, &config.secret_access_key)
    {
        let credentials = Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            "s3_utils_static",
        );
        loader = loader.credentials_provider(credentials);
    }

    // S3-compatible storage like MinIO
    if let Some(endpoint) = &config.endpoint {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;
    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .force_path_style(config.force_path_style)
        .build();

    tracing::info!(
        region = %config.region,
        endpoint = ?config.endpoint,
        force_path_style = config.force_path_style,
        "S3 client initialized"
    );

    Client::from_conf(s3_config)
}
