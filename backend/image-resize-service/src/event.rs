//! S3 object-created notification payload
//!
//! Only the fields the function reads are modelled; everything else in the
//! notification is ignored during deserialization.

use crate::error::{Result, ThumbnailError};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records", default)]
    pub records: Vec<S3EventRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3EventRecord {
    #[serde(rename = "eventName", default)]
    pub event_name: Option<String>,
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Object {
    /// URL-encoded as delivered by S3
    pub key: String,
    #[serde(default)]
    pub size: Option<u64>,
}

/// Location of a stored object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectReference {
    pub bucket: String,
    pub key: String,
}

impl ObjectReference {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for ObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

impl S3Event {
    /// Interpret a raw invocation payload
    pub fn from_payload(payload: serde_json::Value) -> Result<Self> {
        serde_json::from_value(payload)
            .map_err(|e| ThumbnailError::InvalidEvent(format!("malformed notification: {e}")))
    }

    /// Source object of the first record; later records are not looked at
    pub fn first_object(&self) -> Result<ObjectReference> {
        let record = self.records.first().ok_or(ThumbnailError::EmptyEvent)?;
        record.object_reference()
    }
}

impl S3EventRecord {
    pub fn object_reference(&self) -> Result<ObjectReference> {
        let key = decode_object_key(&self.s3.object.key)?;
        Ok(ObjectReference::new(self.s3.bucket.name.clone(), key))
    }
}

/// Undo the form-style encoding S3 applies to keys in notifications
pub fn decode_object_key(raw: &str) -> Result<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|key| key.into_owned())
        .map_err(|e| {
            ThumbnailError::InvalidEvent(format!("object key {raw:?} is not valid UTF-8: {e}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTIFICATION: &str = r#"{
        "Records": [
            {
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "awsRegion": "ap-northeast-1",
                "eventTime": "2024-05-01T12:00:00.000Z",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "configurationId": "resize-trigger",
                    "bucket": {
                        "name": "uploads",
                        "arn": "arn:aws:s3:::uploads"
                    },
                    "object": {
                        "key": "photos/summer+trip/photo%281%29.png",
                        "size": 48213,
                        "eTag": "0123456789abcdef0123456789abcdef",
                        "sequencer": "0A1B2C3D4E5F678901"
                    }
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_full_notification() {
        let event: S3Event = serde_json::from_str(NOTIFICATION).unwrap();
        assert_eq!(event.records.len(), 1);

        let record = &event.records[0];
        assert_eq!(record.event_name.as_deref(), Some("ObjectCreated:Put"));
        assert_eq!(record.s3.object.size, Some(48213));

        let source = event.first_object().unwrap();
        assert_eq!(source.bucket, "uploads");
        assert_eq!(source.key, "photos/summer trip/photo(1).png");
    }

    #[test]
    fn test_parse_minimal_notification() {
        let event: S3Event = serde_json::from_str(
            r#"{"Records":[{"s3":{"bucket":{"name":"uploads"},"object":{"key":"photo.png"}}}]}"#,
        )
        .unwrap();

        assert_eq!(
            event.first_object().unwrap(),
            ObjectReference::new("uploads", "photo.png")
        );
    }

    #[test]
    fn test_empty_records_is_defined_error() {
        let event: S3Event = serde_json::from_str(r#"{"Records":[]}"#).unwrap();
        assert!(matches!(event.first_object(), Err(ThumbnailError::EmptyEvent)));

        let event: S3Event = serde_json::from_str("{}").unwrap();
        assert!(matches!(event.first_object(), Err(ThumbnailError::EmptyEvent)));
    }

    #[test]
    fn test_only_first_record_is_used() {
        let event: S3Event = serde_json::from_str(
            r#"{"Records":[
                {"s3":{"bucket":{"name":"uploads"},"object":{"key":"first.png"}}},
                {"s3":{"bucket":{"name":"uploads"},"object":{"key":"second.png"}}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(event.first_object().unwrap().key, "first.png");
    }

    #[test]
    fn test_malformed_payload_is_invalid_event() {
        let payload = serde_json::json!({ "Records": [{ "eventName": "ObjectCreated:Put" }] });
        assert!(matches!(
            S3Event::from_payload(payload),
            Err(ThumbnailError::InvalidEvent(ref m)) if m.starts_with("malformed notification")
        ));

        assert!(matches!(
            S3Event::from_payload(serde_json::Value::Null),
            Err(ThumbnailError::InvalidEvent(_))
        ));
    }

    #[test]
    fn test_payload_without_records_parses() {
        let event = S3Event::from_payload(serde_json::json!({})).unwrap();
        assert!(matches!(event.first_object(), Err(ThumbnailError::EmptyEvent)));
    }

    #[test]
    fn test_decode_object_key() {
        assert_eq!(decode_object_key("photo.png").unwrap(), "photo.png");
        assert_eq!(decode_object_key("my+photo.png").unwrap(), "my photo.png");
        assert_eq!(decode_object_key("a%2Bb.png").unwrap(), "a+b.png");
        assert_eq!(decode_object_key("%E5%86%99%E7%9C%9F.jpg").unwrap(), "写真.jpg");
        assert!(matches!(
            decode_object_key("%FF.png"),
            Err(ThumbnailError::InvalidEvent(_))
        ));
    }

    #[test]
    fn test_object_reference_display() {
        assert_eq!(
            ObjectReference::new("uploads", "photo.png").to_string(),
            "s3://uploads/photo.png"
        );
    }
}
