//! Routing module
//!
//! Provides the registration tree and resolution machinery:
//! - Route registration under nested prefix groups
//! - Flattening a tree into a fully-qualified route table
//! - Template matching with `:name` parameter extraction

mod matcher;
mod node;
mod table;

pub use matcher::match_template;
pub use node::{RouteCollection, RouteEntry, RouteNode};
pub use table::{MatchResult, RouteTable};
