//! Content stores the function reads sources from and writes thumbnails to
//!
//! - `s3`: production store backed by `s3_utils::S3Operations`
//! - `memory`: in-process store for tests and local runs

pub mod memory;
pub mod s3;

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;

pub use memory::{MemoryObjectStore, StoredObject};

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Full content of the object at `(bucket, key)`
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes>;

    /// Store `body` at `(bucket, key)`, replacing any existing object
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes, content_type: &str)
        -> Result<()>;
}
