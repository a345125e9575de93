//! Thumbnail processor - turns an encoded source image into a fixed-size JPEG
//!
//! The resize is exact: output is always `width x height`, whatever the
//! source aspect ratio. Sources are decoded by sniffing their content, never
//! by trusting the object key's extension.
//!
//! Uses `spawn_blocking` for CPU-intensive operations to avoid blocking the async runtime.

use crate::error::{Result, ThumbnailError};
use bytes::Bytes;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageOutputFormat};
use std::io::Cursor;
use std::sync::Arc;
use tracing::debug;

/// Content type of every thumbnail written
pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";

/// Configuration for thumbnail generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResizeConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
            jpeg_quality: 75,
        }
    }
}

/// Result of thumbnail generation
#[derive(Debug)]
pub struct ThumbnailResult {
    /// The thumbnail image data as JPEG
    pub data: Bytes,
    pub width: u32,
    pub height: u32,
    /// Dimensions of the decoded source
    pub source_width: u32,
    pub source_height: u32,
    /// Format detected from the source bytes, when recognizable
    pub source_format: Option<ImageFormat>,
}

/// Thumbnail processor
#[derive(Debug)]
pub struct ThumbnailProcessor {
    config: ResizeConfig,
}

impl ThumbnailProcessor {
    pub fn new(config: ResizeConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ResizeConfig::default())
    }

    /// Generate a thumbnail from the given image data (blocking version)
    ///
    /// **Note:** This method performs CPU-intensive operations and should not be called
    /// directly from async code. Use `generate_async` instead.
    pub fn generate(&self, original_data: &[u8]) -> Result<ThumbnailResult> {
        if original_data.is_empty() {
            return Err(ThumbnailError::Decode("source object is empty".to_string()));
        }

        let source_format = image::guess_format(original_data).ok();
        let img = image::load_from_memory(original_data)
            .map_err(|e| ThumbnailError::Decode(e.to_string()))?;

        let (source_width, source_height) = img.dimensions();
        debug!(
            source_width,
            source_height,
            source_format = ?source_format,
            "Processing image for thumbnail"
        );

        let resized =
            img.resize_exact(self.config.width, self.config.height, FilterType::CatmullRom);
        let data = self.encode_jpeg(resized)?;

        debug!(
            width = self.config.width,
            height = self.config.height,
            size = data.len(),
            "Thumbnail generated"
        );

        Ok(ThumbnailResult {
            data,
            width: self.config.width,
            height: self.config.height,
            source_width,
            source_height,
            source_format,
        })
    }

    /// Generate a thumbnail on the blocking thread pool
    pub async fn generate_async(self: Arc<Self>, original_data: Bytes) -> Result<ThumbnailResult> {
        tokio::task::spawn_blocking(move || self.generate(&original_data))
            .await
            .map_err(|e| ThumbnailError::Task(format!("thumbnail task did not complete: {e}")))?
    }

    /// Encode image as JPEG
    ///
    /// JPEG has no alpha channel and only 8-bit samples, so the raster is
    /// flattened to RGB8 first.
    fn encode_jpeg(&self, img: DynamicImage) -> Result<Bytes> {
        let rgb = DynamicImage::ImageRgb8(img.into_rgb8());

        let mut buf = Vec::new();
        let mut cursor = Cursor::new(&mut buf);

        rgb.write_to(&mut cursor, ImageOutputFormat::Jpeg(self.config.jpeg_quality))
            .map_err(|e| ThumbnailError::Encode(e.to_string()))?;

        Ok(Bytes::from(buf))
    }
}
