//! Gateway wire shapes module
//!
//! Defines the already-decoded event delivered by the invocation runtime and
//! the response envelope handed back to it. This core never touches wire
//! bytes; serialization onto the wire is the runtime's job.

pub mod response;

pub use response::{build_json_response, build_not_found_response};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound request event, as decoded by the invocation runtime.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpEvent {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub body: Option<String>,
    /// Opaque runtime metadata, passed through to the handler untouched.
    #[serde(default)]
    pub request_context: Option<serde_json::Value>,
}

/// Outbound response, serialized by the runtime onto the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserializes_from_runtime_shape() {
        let event: HttpEvent = serde_json::from_str(
            r#"{"method":"GET","path":"/users/7","requestContext":{"stage":"prod"}}"#,
        )
        .unwrap();
        assert_eq!(event.method, "GET");
        assert_eq!(event.path, "/users/7");
        assert_eq!(event.body, None);
        assert!(event.request_context.is_some());
    }

    #[test]
    fn test_envelope_serializes_camel_case() {
        let envelope = ResponseEnvelope {
            status_code: 200,
            headers: HashMap::new(),
            body: "{}".to_string(),
        };
        let json = serde_json::to_string(&envelope).unwrap();
        assert!(json.contains(r#""statusCode":200"#));
        assert!(json.contains(r#""headers":{}"#));
    }
}
