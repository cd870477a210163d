//! Inbound body shapes and their normalisation into form fields.
//!
//! Hosting environments hand over the webhook body in different forms: an
//! already-read string, a pre-parsed key/value object, or an unread stream.
//! Every shape is normalised into [`FormFields`] before any field is read.

use axum::body::Body;
use serde_json::{Map, Value};
use url::form_urlencoded;

/// Upper bound on a buffered webhook body, matching axum's default request
/// limit. Twilio payloads are a few KiB; the cap only guards memory.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// The request body as the hosting environment exposes it.
#[derive(Debug)]
pub enum InboundBody {
    /// Raw `application/x-www-form-urlencoded` text
    Text(String),
    /// Key/value object already parsed by the host
    Fields(Map<String, Value>),
    /// Unconsumed byte stream
    Stream(Body),
}

impl InboundBody {
    /// Normalise the body into decoded form pairs.
    ///
    /// Only the stream variant can fail: when reading errors or the body
    /// exceeds [`MAX_BODY_BYTES`].
    pub async fn into_fields(self) -> Result<FormFields, axum::Error> {
        match self {
            InboundBody::Text(text) => Ok(FormFields::parse(text.as_bytes())),
            InboundBody::Fields(map) => Ok(FormFields::from_object(map)),
            InboundBody::Stream(body) => {
                let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES).await?;
                Ok(FormFields::parse(&bytes))
            }
        }
    }
}

/// Ordered, decoded key/value pairs of a form body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    /// Decode an `application/x-www-form-urlencoded` byte string.
    pub fn parse(input: &[u8]) -> Self {
        FormFields(form_urlencoded::parse(input).into_owned().collect())
    }

    /// Stringify every value of a key/value object.
    pub fn from_object(map: Map<String, Value>) -> Self {
        FormFields(
            map.into_iter()
                .map(|(key, value)| (key, stringify_value(value)))
                .collect(),
        )
    }

    /// First value recorded for `key`. Keys are case-sensitive.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn stringify_value(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Array(items) => items
            .into_iter()
            .map(stringify_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}
