/// Image Resize Service - Lambda entry point
///
/// Environment variables:
/// - RESIZE_DESTINATION_BUCKET: bucket thumbnails are written to (default: "resized-image-kizashi")
/// - RESIZE_WIDTH / RESIZE_HEIGHT: thumbnail size in pixels (default: 128 x 128)
/// - RESIZE_JPEG_QUALITY: JPEG quality 1-100 (default: 75)
/// - RESIZE_FAILURE_MODE: "propagate" or "respond" (default: "propagate")
/// - AWS_REGION, S3_ENDPOINT, S3_FORCE_PATH_STYLE: S3 connection settings
use anyhow::Context;
use image_resize_service::handler::function_handler;
use image_resize_service::logging::init_tracing;
use image_resize_service::services::{ThumbnailProcessor, ThumbnailService};
use image_resize_service::Config;
use lambda_runtime::{run, service_fn, Error};
use s3_utils::{S3Config, S3Operations};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env().context("Failed to load configuration")?;
    let s3_config = S3Config::from_env();

    info!(
        destination_bucket = %config.destination_bucket,
        width = config.width,
        height = config.height,
        jpeg_quality = config.jpeg_quality,
        failure_mode = ?config.failure_mode,
        "Configuration loaded"
    );

    // Built once per execution environment and reused by every invocation
    let client = s3_utils::build_client(&s3_config).await;
    let service = ThumbnailService::new(
        Arc::new(S3Operations::new(client)),
        ThumbnailProcessor::new(config.resize()),
        config.destination_bucket.clone(),
    );
    let failure_mode = config.failure_mode;

    info!("Starting Lambda runtime loop");
    run(service_fn(|event| function_handler(&service, failure_mode, event))).await
}
