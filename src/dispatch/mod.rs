//! Request dispatch module
//!
//! Entry point for event processing: resolves an inbound event against the
//! frozen route table, invokes the matched handler, and builds the outbound
//! envelope.

use crate::handler::{HandlerError, RequestContext};
use crate::http::{self, HttpEvent, ResponseEnvelope};
use crate::routing::{RouteNode, RouteTable};
use hyper::Method;
use tracing::{debug, warn};

const NOT_FOUND_REASON: &str = "Not Found";

/// Owns the flattened route table and serves resolution requests.
///
/// Construction consumes the registration tree, so the routes are frozen
/// before any dispatch begins. The dispatcher is `Send + Sync`; share it via
/// `Arc` and handle any number of events concurrently. Table reads are
/// lock-free.
#[derive(Debug)]
pub struct Dispatcher {
    table: RouteTable,
}

impl Dispatcher {
    /// Freeze a registration tree and build its route table once.
    #[must_use]
    pub fn new(root: RouteNode) -> Self {
        Self {
            table: RouteTable::build(&root),
        }
    }

    /// Resolve and dispatch one inbound event.
    ///
    /// Returns the 404 envelope when nothing matches (including events whose
    /// method string is not a valid HTTP method). Handler failures are not
    /// caught here: the `Err` propagates to the caller, which owns the
    /// translation into a 500-class response.
    ///
    /// Handler invocation is the single await point; waiting on one event
    /// never blocks resolution of another.
    pub async fn handle(&self, event: HttpEvent) -> Result<ResponseEnvelope, HandlerError> {
        let Ok(method) = Method::from_bytes(event.method.as_bytes()) else {
            warn!(method = %event.method, "unrecognized request method");
            return Ok(http::build_not_found_response(NOT_FOUND_REASON));
        };

        let Some(found) = self.table.resolve(&method, &event.path) else {
            debug!(method = %method, path = %event.path, "no route matched");
            return Ok(http::build_not_found_response(NOT_FOUND_REASON));
        };
        debug!(method = %method, path = %event.path, route = %found.entry.path, "route matched");

        let ctx = RequestContext {
            params: found.params,
            body: event.body,
            request_context: event.request_context,
        };

        let content = (found.entry.handler)(ctx).await?;
        Ok(http::build_json_response(&content)?)
    }
}
