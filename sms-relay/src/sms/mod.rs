//! Inbound SMS handling.
//!
//! ```text
//! InboundBody → FormFields → SmsEvent → compose_text()
//! ```

pub mod body;
pub mod event;

pub use body::{FormFields, InboundBody, MAX_BODY_BYTES};
pub use event::{SmsEvent, UNKNOWN_SENDER};

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_body_shapes_extract_identical_events() {
        let form = "From=%2B15551234567&To=%2B15557654321&Body=Hi+%F0%9F%91%8B";
        let Value::Object(object) = json!({
            "From": "+15551234567",
            "To": "+15557654321",
            "Body": "Hi 👋",
        }) else {
            panic!("expected object");
        };

        let shapes = vec![
            InboundBody::Text(form.to_string()),
            InboundBody::Fields(object),
            InboundBody::Stream(Body::from(form)),
        ];

        let mut events = Vec::new();
        for shape in shapes {
            let fields = shape.into_fields().await.unwrap();
            events.push(SmsEvent::from_fields(&fields));
        }

        assert_eq!(events[0].body, "Hi 👋");
        assert_eq!(events[0], events[1]);
        assert_eq!(events[1], events[2]);
    }
}
