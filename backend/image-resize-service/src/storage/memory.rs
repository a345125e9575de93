//! In-memory object store
//!
//! Mirrors S3 semantics the function depends on: reads of missing keys fail
//! with `ObjectNotFound`, writes overwrite. Buckets can be made read-only to
//! simulate a refused upload.

use super::ObjectStore;
use crate::error::{Result, ThumbnailError};
use async_trait::async_trait;
use bytes::Bytes;
use dashmap::{DashMap, DashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Bytes,
    pub content_type: Option<String>,
}

#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: DashMap<(String, String), StoredObject>,
    read_only_buckets: DashSet<String>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object without a content type, the way a raw upload lands
    pub fn insert(&self, bucket: &str, key: &str, body: impl Into<Bytes>) {
        self.objects.insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body: body.into(),
                content_type: None,
            },
        );
    }

    pub fn get(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .get(&(bucket.to_string(), key.to_string()))
            .map(|entry| entry.value().clone())
    }

    /// Refuse every subsequent write into `bucket`
    pub fn deny_writes(&self, bucket: &str) {
        self.read_only_buckets.insert(bucket.to_string());
    }

    /// Keys currently stored in `bucket`, sorted
    pub fn keys(&self, bucket: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .objects
            .iter()
            .filter(|entry| entry.key().0 == bucket)
            .map(|entry| entry.key().1.clone())
            .collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes> {
        self.get(bucket, key)
            .map(|object| object.body)
            .ok_or_else(|| ThumbnailError::ObjectNotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<()> {
        if self.read_only_buckets.contains(bucket) {
            return Err(ThumbnailError::AccessDenied(format!(
                "bucket {bucket} does not accept writes"
            )));
        }

        self.objects.insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body,
                content_type: Some(content_type.to_string()),
            },
        );
        Ok(())
    }
}
