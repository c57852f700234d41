//! Path template matching module
//!
//! Implements segment-wise matching of a route template against a concrete
//! request path, extracting `:name` parameter bindings.

use std::collections::HashMap;

/// Match a route template against a concrete path.
///
/// Both strings are split on `/` into non-empty segments, so leading and
/// trailing slashes carry no meaning. Matching is fixed-arity: differing
/// segment counts never match. A template segment starting with `:` binds
/// the remainder as a parameter name and accepts any value; every other
/// segment must equal the concrete segment byte-for-byte.
///
/// Returns the accumulated bindings on success (empty when the template has
/// no parameters), `None` on no-match. O(segment count), no backtracking.
pub fn match_template(template: &str, concrete: &str) -> Option<HashMap<String, String>> {
    let template_parts: Vec<&str> = template.split('/').filter(|s| !s.is_empty()).collect();
    let concrete_parts: Vec<&str> = concrete.split('/').filter(|s| !s.is_empty()).collect();

    if template_parts.len() != concrete_parts.len() {
        return None;
    }

    let mut params = HashMap::new();

    for (pattern, actual) in template_parts.iter().zip(concrete_parts.iter()) {
        if let Some(name) = pattern.strip_prefix(':') {
            params.insert(name.to_string(), (*actual).to_string());
        } else if pattern != actual {
            return None;
        }
    }

    Some(params)
}
