//! Lambda invocation boundary
//!
//! Turns the service outcome into the function's return value. Failures are
//! either handed back to the runtime (the platform then retries or
//! dead-letters the event) or answered with a structured response, depending
//! on [`FailureMode`].

use crate::config::FailureMode;
use crate::error::ThumbnailError;
use crate::event::S3Event;
use crate::services::ThumbnailService;
use lambda_runtime::LambdaEvent;
use serde::Serialize;
use tracing::{error, info_span, Instrument};

pub const SUCCESS_MESSAGE: &str = "Image resized and uploaded successfully";

/// `{statusCode, body}` where body is a JSON-encoded message string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailResponse {
    pub status_code: u16,
    pub body: String,
}

impl ThumbnailResponse {
    pub fn success() -> Self {
        Self::with_message(200, SUCCESS_MESSAGE)
    }

    pub fn failure(err: &ThumbnailError) -> Self {
        Self::with_message(err.status_code(), &err.to_string())
    }

    fn with_message(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            body: serde_json::Value::String(message.to_string()).to_string(),
        }
    }
}

/// Run one invocation against a raw payload
///
/// A payload that is not an S3 notification fails as `InvalidEvent` and is
/// reported through `failure_mode` like any other failure.
pub async fn handle_payload(
    service: &ThumbnailService,
    failure_mode: FailureMode,
    payload: serde_json::Value,
) -> Result<ThumbnailResponse, ThumbnailError> {
    match S3Event::from_payload(payload) {
        Ok(event) => handle_invocation(service, failure_mode, event).await,
        Err(e) => conclude(Err(e), failure_mode),
    }
}

/// Run one invocation against an already decoded event
pub async fn handle_invocation(
    service: &ThumbnailService,
    failure_mode: FailureMode,
    event: S3Event,
) -> Result<ThumbnailResponse, ThumbnailError> {
    let outcome = service.handle_event(&event).await.map(|_| ());
    conclude(outcome, failure_mode)
}

fn conclude(
    outcome: Result<(), ThumbnailError>,
    failure_mode: FailureMode,
) -> Result<ThumbnailResponse, ThumbnailError> {
    match outcome {
        Ok(()) => Ok(ThumbnailResponse::success()),
        Err(e) => {
            error!(
                error = %e,
                kind = e.kind(),
                status_code = e.status_code(),
                failure_mode = ?failure_mode,
                "Failed to resize image"
            );
            match failure_mode {
                FailureMode::Propagate => Err(e),
                FailureMode::Respond => Ok(ThumbnailResponse::failure(&e)),
            }
        }
    }
}

/// Entry point registered with `lambda_runtime::service_fn`
pub async fn function_handler(
    service: &ThumbnailService,
    failure_mode: FailureMode,
    event: LambdaEvent<serde_json::Value>,
) -> Result<ThumbnailResponse, lambda_runtime::Error> {
    let span = info_span!("invocation", request_id = %event.context.request_id);

    handle_payload(service, failure_mode, event.payload)
        .instrument(span)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_shape() {
        let json = serde_json::to_value(ThumbnailResponse::success()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "statusCode": 200,
                "body": "\"Image resized and uploaded successfully\""
            })
        );
    }

    #[test]
    fn test_failure_response_body_is_json_string() {
        let response = ThumbnailResponse::failure(&ThumbnailError::Decode(
            "format could not be determined".into(),
        ));

        assert_eq!(response.status_code, 422);
        let message: String = serde_json::from_str(&response.body).unwrap();
        assert_eq!(
            message,
            "Failed to decode image: format could not be determined"
        );
    }
}
