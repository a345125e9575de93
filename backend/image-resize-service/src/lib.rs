//! Image Resize Service
//!
//! Lambda function that turns every image uploaded to a source bucket into a
//! fixed-size JPEG thumbnail stored under the same key in a destination bucket.

pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod logging;
pub mod services;
pub mod storage;

// Public re-exports
pub use config::{Config, FailureMode};
pub use error::{Result, ThumbnailError};
pub use event::{ObjectReference, S3Event};
pub use handler::ThumbnailResponse;
