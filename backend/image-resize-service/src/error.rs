/// Error types for the image resize function
///
/// Every failure the pipeline can hit maps to one variant, and every variant
/// maps to the status code used when failures are answered instead of raised.
use s3_utils::S3Error;
use thiserror::Error;

/// Result type for image-resize-service operations
pub type Result<T> = std::result::Result<T, ThumbnailError>;

#[derive(Error, Debug)]
pub enum ThumbnailError {
    /// The notification carried no records
    #[error("Event contains no records")]
    EmptyEvent,

    /// The notification could not be interpreted
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// Source object is missing
    #[error("Object not found: s3://{bucket}/{key}")]
    ObjectNotFound { bucket: String, key: String },

    /// Store refused the read or write
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Any other storage failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Bytes are not a recognized or valid image
    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to encode JPEG: {0}")]
    Encode(String),

    /// Blocking image task panicked or was cancelled
    #[error("Image task failed: {0}")]
    Task(String),
}

impl ThumbnailError {
    /// Status code reported when the failure is turned into a response
    pub fn status_code(&self) -> u16 {
        match self {
            ThumbnailError::EmptyEvent | ThumbnailError::InvalidEvent(_) => 400,
            ThumbnailError::AccessDenied(_) => 403,
            ThumbnailError::ObjectNotFound { .. } => 404,
            ThumbnailError::Decode(_) => 422,
            ThumbnailError::Storage(_) => 502,
            ThumbnailError::Encode(_) | ThumbnailError::Task(_) => 500,
        }
    }

    /// Short machine-readable label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ThumbnailError::EmptyEvent => "empty_event",
            ThumbnailError::InvalidEvent(_) => "invalid_event",
            ThumbnailError::ObjectNotFound { .. } => "object_not_found",
            ThumbnailError::AccessDenied(_) => "access_denied",
            ThumbnailError::Storage(_) => "storage",
            ThumbnailError::Decode(_) => "decode",
            ThumbnailError::Encode(_) => "encode",
            ThumbnailError::Task(_) => "task",
        }
    }
}

impl From<S3Error> for ThumbnailError {
    fn from(err: S3Error) -> Self {
        match err {
            S3Error::NotFound { bucket, key } => ThumbnailError::ObjectNotFound { bucket, key },
            S3Error::AccessDenied { .. } => ThumbnailError::AccessDenied(err.to_string()),
            S3Error::BucketNotFound(_) | S3Error::Body(_) | S3Error::Sdk(_) => {
                ThumbnailError::Storage(err.to_string())
            }
        }
    }
}
