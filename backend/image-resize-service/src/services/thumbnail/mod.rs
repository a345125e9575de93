//! Thumbnail generation
//!
//! - Image processor for decoding, resizing, and JPEG encoding
//! - Service for moving one object from the source to the destination bucket

pub mod processor;
pub mod service;

pub use processor::{ResizeConfig, ThumbnailProcessor, ThumbnailResult, JPEG_CONTENT_TYPE};
pub use service::{StoredThumbnail, ThumbnailService};
