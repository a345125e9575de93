use thiserror::Error;

/// Failures surfaced by S3 operations, classified by what a caller can do about them
#[derive(Error, Debug)]
pub enum S3Error {
    #[error("Object not found: s3://{bucket}/{key}")]
    NotFound { bucket: String, key: String },

    #[error("Bucket not found: {0}")]
    BucketNotFound(String),

    #[error("Access denied to s3://{bucket}/{key}: {message}")]
    AccessDenied {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("Failed to read object body: {0}")]
    Body(String),

    #[error("AWS SDK error: {0}")]
    Sdk(String),
}

/// Classify a failed request from the service error code and HTTP status
///
/// The code wins when it is one S3 documents for these cases. The status is
/// consulted only when the code is absent or unrecognized, which happens for
/// HEAD-style responses that carry no body. `message` is kept for the report
/// and never inspected.
pub fn classify_error(
    bucket: &str,
    key: &str,
    code: Option<&str>,
    status: Option<u16>,
    message: &str,
) -> S3Error {
    let not_found = || S3Error::NotFound {
        bucket: bucket.to_string(),
        key: key.to_string(),
    };
    let access_denied = || S3Error::AccessDenied {
        bucket: bucket.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    };

    match code {
        Some("NoSuchBucket") => S3Error::BucketNotFound(bucket.to_string()),
        Some("NoSuchKey") | Some("NotFound") => not_found(),
        Some("AccessDenied") | Some("Forbidden") | Some("AllAccessDisabled") => access_denied(),
        _ => match status {
            Some(404) => not_found(),
            Some(403) => access_denied(),
            _ => S3Error::Sdk(message.to_string()),
        },
    }
}
