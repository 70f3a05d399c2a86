//! Payload normalizer
//!
//! Decides whether the raw body is structured JSON or an opaque string, and
//! applies the method promotion that comes with a structured body.

use crate::descriptor::{RequestDescriptor, DEFAULT_METHOD};
use serde_json::{Map, Value};

/// Field name used when a body cannot be parsed as JSON
pub const RAW_DATA_KEY: &str = "raw_data";

/// Normalized request body
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No body was given
    Empty,
    /// Body parsed as JSON
    Structured(Value),
    /// Body that failed to parse, kept verbatim
    Raw(String),
}

impl Payload {
    /// Classify a raw body. An empty body counts as no body.
    pub fn from_raw_body(raw_body: Option<&str>) -> Self {
        match raw_body {
            None | Some("") => Payload::Empty,
            Some(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(value) => Payload::Structured(value),
                Err(e) => {
                    tracing::debug!("Body is not JSON, keeping it raw: {}", e);
                    Payload::Raw(raw.to_string())
                }
            },
        }
    }

    /// Tree view of the payload: raw bodies degrade to `{"raw_data": <body>}`
    pub fn as_value(&self) -> Option<Value> {
        match self {
            Payload::Empty => None,
            Payload::Structured(value) => Some(value.clone()),
            Payload::Raw(raw) => {
                let mut map = Map::new();
                map.insert(RAW_DATA_KEY.to_string(), Value::String(raw.clone()));
                Some(Value::Object(map))
            }
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Payload::Structured(_))
    }
}

/// Descriptor paired with its normalized payload
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRequest {
    pub descriptor: RequestDescriptor,
    pub payload: Payload,
}

impl NormalizedRequest {
    /// Normalize the body of `descriptor`.
    ///
    /// A structured body on a `GET` request is taken as intent to `POST`.
    /// Raw bodies leave the method alone.
    pub fn normalize(mut descriptor: RequestDescriptor) -> Self {
        let payload = Payload::from_raw_body(descriptor.raw_body.as_deref());

        if payload.is_structured() && descriptor.method == DEFAULT_METHOD {
            descriptor.method = "POST".to_string();
        }

        Self {
            descriptor,
            payload,
        }
    }
}
