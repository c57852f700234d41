//! Handler invocation module
//!
//! Defines the shape of route handlers, the closed set of content kinds they
//! can return, and the per-request context they receive.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Failure raised inside a handler.
///
/// The dispatcher never catches these; they propagate to the caller of
/// [`Dispatcher::handle`](crate::Dispatcher::handle), which owns the
/// translation into a 500-class response.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Boxed asynchronous route handler, shareable across entries.
pub type Handler = Arc<
    dyn Fn(RequestContext) -> Pin<Box<dyn Future<Output = Result<Content, HandlerError>> + Send>>
        + Send
        + Sync,
>;

/// Structural mismatch between a declared shape and the actual path
/// parameters or request body.
///
/// Decoding failures never turn into HTTP error codes at this layer; the
/// handler that requested the decode decides how to respond.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to decode path parameters: {0}")]
    Params(#[source] serde_json::Error),
    #[error("failed to decode request body: {0}")]
    Body(#[source] serde_json::Error),
}

/// Closed set of content kinds a handler can return.
///
/// Serialized directly into the envelope body: `Json` emits the value,
/// `Text` emits a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    Json(Value),
    Text(String),
}

impl Content {
    /// Convert any serializable value into JSON content.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self::Json)
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

/// Per-request state handed to the matched handler.
///
/// Carries the extracted path parameters, the raw request body, and the
/// opaque runtime metadata from the inbound event. Transient: built for one
/// dispatch and dropped with it.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub params: HashMap<String, String>,
    pub body: Option<String>,
    pub request_context: Option<Value>,
}

impl RequestContext {
    /// Look up a single raw path parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Decode the path parameters into a typed value.
    pub fn decode_params<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        let raw = serde_json::to_value(&self.params).map_err(DecodeError::Params)?;
        serde_json::from_value(raw).map_err(|e| {
            warn!(error = %e, "path parameter decode failed");
            DecodeError::Params(e)
        })
    }

    /// Decode the JSON request body into a typed value.
    ///
    /// An absent body is `Ok(None)`, not an error.
    pub fn decode_body<T: DeserializeOwned>(&self) -> Result<Option<T>, DecodeError> {
        match &self.body {
            Some(raw) => serde_json::from_str(raw).map(Some).map_err(|e| {
                warn!(error = %e, "request body decode failed");
                DecodeError::Body(e)
            }),
            None => Ok(None),
        }
    }
}
