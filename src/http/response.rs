//! Response envelope building module
//!
//! Provides builders for the envelopes the dispatcher emits, decoupled from
//! resolution logic.

use super::ResponseEnvelope;
use crate::handler::Content;
use hyper::StatusCode;
use serde::Serialize;
use std::collections::HashMap;

/// Standard body payload for a failed resolution.
#[derive(Debug, Serialize)]
struct NotFoundBody {
    reason: String,
}

fn json_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("content-type".to_string(), "application/json".to_string());
    headers
}

/// Build a 200 envelope carrying serialized handler content.
pub fn build_json_response(content: &Content) -> Result<ResponseEnvelope, serde_json::Error> {
    Ok(ResponseEnvelope {
        status_code: StatusCode::OK.as_u16(),
        headers: json_headers(),
        body: serde_json::to_string(content)?,
    })
}

/// Build a 404 envelope with a human-readable reason.
#[must_use]
pub fn build_not_found_response(reason: &str) -> ResponseEnvelope {
    let body = serde_json::to_string(&NotFoundBody {
        reason: reason.to_string(),
    })
    .unwrap_or_else(|_| r#"{"reason":"Not Found"}"#.to_string());

    ResponseEnvelope {
        status_code: StatusCode::NOT_FOUND.as_u16(),
        headers: json_headers(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_response_preserves_content() {
        let content = Content::Json(json!({"id": "42", "active": true}));
        let envelope = build_json_response(&content).unwrap();
        assert_eq!(envelope.status_code, 200);
        assert_eq!(
            envelope.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(envelope.body, r#"{"active":true,"id":"42"}"#);
    }

    #[test]
    fn test_text_content_is_json_encoded() {
        let envelope = build_json_response(&Content::from("hello")).unwrap();
        assert_eq!(envelope.body, r#""hello""#);
    }

    #[test]
    fn test_not_found_response() {
        let envelope = build_not_found_response("Not Found");
        assert_eq!(envelope.status_code, 404);
        assert_eq!(envelope.body, r#"{"reason":"Not Found"}"#);
    }
}
