//! Flattened route table module
//!
//! Collapses a [`RouteNode`] tree into a single fully-qualified table used
//! at resolution time, and performs the first-match scan over it.

use super::matcher;
use super::node::{RouteEntry, RouteNode};
use hyper::Method;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

/// A successful resolution: the winning entry and its parameter bindings.
#[derive(Debug)]
pub struct MatchResult<'a> {
    pub entry: &'a RouteEntry,
    pub params: HashMap<String, String>,
}

/// Fully-qualified view of every route in a tree.
///
/// Keys are `method + concatenated prefixes + template` (e.g.
/// `GET/api/v1/users/:id`). Derived state: cheap to rebuild from the
/// read-only tree at any time, and immutable once built.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: BTreeMap<String, RouteEntry>,
}

impl RouteTable {
    /// Flatten a registration tree into a table.
    ///
    /// Depth-first pre-order: a node's own routes are merged first, then its
    /// children in ascending prefix order, each descendant prefixed by the
    /// concatenation of all ancestor prefixes. When two tree paths produce
    /// an identical key, the later-visited entry wins.
    #[must_use]
    pub fn build(root: &RouteNode) -> Self {
        let mut entries = BTreeMap::new();
        merge_node(&mut entries, root, "");
        debug!(routes = entries.len(), "route table built");
        Self { entries }
    }

    /// Resolve a concrete (method, path) pair against the table.
    ///
    /// Entries are scanned in ascending key order and the first full match
    /// wins; there is no specificity ranking between literal and parameter
    /// segments, so callers needing unambiguous resolution must avoid
    /// overlapping templates. The method is folded into the matchable
    /// string as its leading segment, and the appended trailing slash
    /// normalizes arity when path and template differ only by a trailing
    /// separator.
    #[must_use]
    pub fn resolve(&self, method: &Method, path: &str) -> Option<MatchResult<'_>> {
        let request = format!("{method}/{path}/");

        for (key, entry) in &self.entries {
            if entry.method != *method {
                continue;
            }
            trace!(candidate = %key, "trying route");
            if let Some(params) = matcher::match_template(key, &request) {
                return Some(MatchResult { entry, params });
            }
        }

        None
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

fn merge_node(entries: &mut BTreeMap<String, RouteEntry>, node: &RouteNode, prefix: &str) {
    for entry in node.routes().values() {
        let key = format!("{}{}{}", entry.method, prefix, entry.path);
        entries.insert(key, entry.clone());
    }
    for (child_prefix, child) in node.children() {
        let full_prefix = format!("{prefix}{child_prefix}");
        merge_node(entries, child, &full_prefix);
    }
}
