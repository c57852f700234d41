//! Hierarchical request router for serverless HTTP gateways.
//!
//! Applications build a [`RouteNode`] tree during startup (routes plus
//! nested prefix groups), then hand the tree to a [`Dispatcher`], which
//! flattens it once into a [`RouteTable`] and serves
//! already-decoded [`HttpEvent`]s from the invocation runtime. This crate
//! owns registration, matching, and dispatch only; wire handling and
//! 500-class error translation stay with the runtime.
//!
//! ```no_run
//! use gateway_router::{Content, Dispatcher, HttpEvent, RouteNode};
//!
//! # async fn demo() -> Result<(), gateway_router::HandlerError> {
//! let mut root = RouteNode::new();
//! let api = root.group("/api");
//! api.get("/users/:id", |ctx| async move {
//!     Ok(Content::Text(format!("user {}", ctx.param("id").unwrap_or_default())))
//! });
//!
//! let dispatcher = Dispatcher::new(root);
//! let response = dispatcher
//!     .handle(HttpEvent {
//!         method: "GET".to_string(),
//!         path: "/api/users/7".to_string(),
//!         body: None,
//!         request_context: None,
//!     })
//!     .await?;
//! assert_eq!(response.status_code, 200);
//! # Ok(())
//! # }
//! ```

pub mod dispatch;
pub mod handler;
pub mod http;
pub mod routing;

pub use dispatch::Dispatcher;
pub use handler::{Content, DecodeError, Handler, HandlerError, RequestContext};
pub use http::{HttpEvent, ResponseEnvelope};
pub use routing::{match_template, MatchResult, RouteCollection, RouteEntry, RouteNode, RouteTable};
