/// S3 object download and upload
use crate::error::{classify_error, S3Error};
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use std::sync::Arc;
use tracing::debug;

/// Bucket-agnostic object operations over a shared client
#[derive(Clone)]
pub struct S3Operations {
    client: Arc<Client>,
}

impl S3Operations {
    pub fn new(client: Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Download the full content of an object
    pub async fn download(&self, bucket: &str, key: &str) -> Result<Bytes, S3Error> {
        debug!(bucket = %bucket, key = %key, "Downloading from S3");

        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| sdk_error(bucket, key, &e))?;

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| S3Error::Body(e.to_string()))?
            .into_bytes();

        debug!(bucket = %bucket, key = %key, size = bytes.len(), "Downloaded from S3");
        Ok(bytes)
    }

    /// Upload bytes to an object, overwriting whatever is stored at the key
    pub async fn upload(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), S3Error> {
        let size = body.len();
        debug!(bucket = %bucket, key = %key, size, "Uploading to S3");

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| sdk_error(bucket, key, &e))?;

        debug!(bucket = %bucket, key = %key, size, "Uploaded to S3");
        Ok(())
    }
}

/// Classify an SDK failure by its service error code and HTTP status
fn sdk_error<E>(bucket: &str, key: &str, err: &SdkError<E, HttpResponse>) -> S3Error
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    let code = err.as_service_error().and_then(|e| e.code());
    let status = err.raw_response().map(|r| r.status().as_u16());
    classify_error(bucket, key, code, status, &DisplayErrorContext(err).to_string())
}
