//! Route registration tree module
//!
//! A [`RouteNode`] is a registration scope: it owns its own routes plus named
//! child scopes, each child contributing a path prefix. The tree is built
//! during application startup and is read-only once handed to the dispatcher.

use crate::handler::{Content, Handler, HandlerError, RequestContext};
use hyper::Method;
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// Immutable record of one registered route.
#[derive(Clone)]
pub struct RouteEntry {
    pub method: Method,
    pub path: String,
    pub handler: Handler,
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// A registration scope owning routes and nested child scopes.
///
/// Children are owned exclusively by their parent; the tree is navigated
/// top-down and carries no backward references. Both maps are ordered so
/// that flattening is deterministic.
#[derive(Debug, Default)]
pub struct RouteNode {
    routes: BTreeMap<String, RouteEntry>,
    children: BTreeMap<String, RouteNode>,
}

/// A reusable bundle of route registrations.
///
/// Lets applications split registration across modules: each collection
/// mounts its routes onto the node it is handed.
pub trait RouteCollection {
    fn register(&self, routes: &mut RouteNode);
}

impl RouteNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route under this scope, keyed by (method, template).
    ///
    /// Re-registering the same key replaces the previous entry silently.
    pub fn route<H, Fut>(&mut self, method: Method, path: &str, handler: H)
    where
        H: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Content, HandlerError>> + Send + 'static,
    {
        let boxed: Handler = Arc::new(move |ctx| Box::pin(handler(ctx)));
        debug!(method = %method, path, "registering route");
        self.routes.insert(
            format!("{method}{path}"),
            RouteEntry {
                method,
                path: path.to_string(),
                handler: boxed,
            },
        );
    }

    pub fn get<H, Fut>(&mut self, path: &str, handler: H)
    where
        H: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Content, HandlerError>> + Send + 'static,
    {
        self.route(Method::GET, path, handler);
    }

    pub fn post<H, Fut>(&mut self, path: &str, handler: H)
    where
        H: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Content, HandlerError>> + Send + 'static,
    {
        self.route(Method::POST, path, handler);
    }

    pub fn put<H, Fut>(&mut self, path: &str, handler: H)
    where
        H: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Content, HandlerError>> + Send + 'static,
    {
        self.route(Method::PUT, path, handler);
    }

    pub fn patch<H, Fut>(&mut self, path: &str, handler: H)
    where
        H: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Content, HandlerError>> + Send + 'static,
    {
        self.route(Method::PATCH, path, handler);
    }

    pub fn delete<H, Fut>(&mut self, path: &str, handler: H)
    where
        H: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Content, HandlerError>> + Send + 'static,
    {
        self.route(Method::DELETE, path, handler);
    }

    pub fn options<H, Fut>(&mut self, path: &str, handler: H)
    where
        H: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Content, HandlerError>> + Send + 'static,
    {
        self.route(Method::OPTIONS, path, handler);
    }

    /// Create a child scope under `prefix` and return it for chained
    /// registration.
    ///
    /// A duplicate prefix at the same node replaces the previous child and
    /// everything registered under it.
    pub fn group(&mut self, prefix: &str) -> &mut Self {
        debug!(prefix, "creating route group");
        let child = self.children.entry(prefix.to_string()).or_default();
        *child = Self::new();
        child
    }

    /// Mount a [`RouteCollection`] onto this scope.
    pub fn register(&mut self, collection: &dyn RouteCollection) {
        collection.register(self);
    }

    pub(crate) const fn routes(&self) -> &BTreeMap<String, RouteEntry> {
        &self.routes
    }

    pub(crate) const fn children(&self) -> &BTreeMap<String, Self> {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_handler(_ctx: RequestContext) -> impl Future<Output = Result<Content, HandlerError>> {
        async { Ok(Content::from("ok")) }
    }

    #[test]
    fn test_route_key_overwrite() {
        let mut node = RouteNode::new();
        node.get("/users/:id", ok_handler);
        node.get("/users/:id", ok_handler);
        assert_eq!(node.routes().len(), 1);
    }

    #[test]
    fn test_distinct_methods_coexist() {
        let mut node = RouteNode::new();
        node.get("/users", ok_handler);
        node.post("/users", ok_handler);
        assert_eq!(node.routes().len(), 2);
    }

    #[test]
    fn test_each_verb_records_its_method() {
        let mut node = RouteNode::new();
        node.get("/a", ok_handler);
        node.post("/a", ok_handler);
        node.put("/a", ok_handler);
        node.patch("/a", ok_handler);
        node.delete("/a", ok_handler);
        node.options("/a", ok_handler);

        let methods: Vec<_> = node.routes().values().map(|e| e.method.clone()).collect();
        for method in [
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ] {
            assert!(methods.contains(&method), "missing {method}");
        }
    }

    #[test]
    fn test_group_returns_child_for_registration() {
        let mut root = RouteNode::new();
        let api = root.group("/api");
        api.get("/users", ok_handler);
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.children()["/api"].routes().len(), 1);
    }

    #[test]
    fn test_duplicate_group_replaces_child() {
        let mut root = RouteNode::new();
        root.group("/api").get("/old", ok_handler);
        root.group("/api").get("/new", ok_handler);

        let child = &root.children()["/api"];
        assert_eq!(child.routes().len(), 1);
        assert!(child.routes().contains_key("GET/new"));
    }

    #[test]
    fn test_collection_mounts_routes() {
        struct UserRoutes;

        impl RouteCollection for UserRoutes {
            fn register(&self, routes: &mut RouteNode) {
                routes.get("/users", ok_handler);
                routes.get("/users/:id", ok_handler);
            }
        }

        let mut root = RouteNode::new();
        root.register(&UserRoutes);
        assert_eq!(root.routes().len(), 2);
    }
}
