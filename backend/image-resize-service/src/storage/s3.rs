use super::ObjectStore;
use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use s3_utils::S3Operations;

#[async_trait]
impl ObjectStore for S3Operations {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes> {
        Ok(self.download(bucket, key).await?)
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<()> {
        Ok(self.upload(bucket, key, body, content_type).await?)
    }
}
