//! Thumbnail service - coordinates the fetch, resize, and store workflow
//!
//! For one object-created notification:
//! 1. Take the source object from the first record
//! 2. Download it from the source bucket
//! 3. Resize to the configured size and encode as JPEG
//! 4. Upload to the destination bucket under the same key

use super::processor::{ThumbnailProcessor, JPEG_CONTENT_TYPE};
use crate::error::Result;
use crate::event::{ObjectReference, S3Event};
use crate::storage::ObjectStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of one successful resize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredThumbnail {
    pub source: ObjectReference,
    pub destination: ObjectReference,
    pub width: u32,
    pub height: u32,
    pub size_bytes: usize,
}

/// Thumbnail service; cheap to share across invocations
pub struct ThumbnailService {
    store: Arc<dyn ObjectStore>,
    processor: Arc<ThumbnailProcessor>,
    destination_bucket: String,
}

impl ThumbnailService {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        processor: ThumbnailProcessor,
        destination_bucket: impl Into<String>,
    ) -> Self {
        Self {
            store,
            processor: Arc::new(processor),
            destination_bucket: destination_bucket.into(),
        }
    }

    /// Resize the object named by the event's first record
    pub async fn handle_event(&self, event: &S3Event) -> Result<StoredThumbnail> {
        let source = event.first_object()?;

        if event.records.len() > 1 {
            warn!(
                record_count = event.records.len(),
                ignored = event.records.len() - 1,
                source = %source,
                "Event carries multiple records; only the first is processed"
            );
        }

        self.process_object(&source).await
    }

    /// Resize one stored object into the destination bucket
    pub async fn process_object(&self, source: &ObjectReference) -> Result<StoredThumbnail> {
        info!(bucket = %source.bucket, key = %source.key, "Generating thumbnail");

        let original = self.store.get_object(&source.bucket, &source.key).await?;
        let original_size = original.len();

        let thumbnail = self.processor.clone().generate_async(original).await?;

        let destination = ObjectReference::new(self.destination_bucket.clone(), source.key.clone());
        let size_bytes = thumbnail.data.len();
        self.store
            .put_object(
                &destination.bucket,
                &destination.key,
                thumbnail.data,
                JPEG_CONTENT_TYPE,
            )
            .await?;

        info!(
            source = %source,
            destination = %destination,
            source_format = ?thumbnail.source_format,
            source_width = thumbnail.source_width,
            source_height = thumbnail.source_height,
            original_size,
            width = thumbnail.width,
            height = thumbnail.height,
            size = size_bytes,
            "Thumbnail created successfully"
        );

        Ok(StoredThumbnail {
            source: source.clone(),
            destination,
            width: thumbnail.width,
            height: thumbnail.height,
            size_bytes,
        })
    }
}
