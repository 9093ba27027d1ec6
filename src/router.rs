//! Router API construction
//!
//! The router API parallels the client API but emits path *templates* for
//! registration with a routing framework: parameter segments render as
//! `:name` placeholders and never take a value, and children of a segment
//! marked [`parent`](crate::Segment::parent) render standalone, without
//! their parent's prefix.
//!
//! # Example
//!
//! ```
//! use route_tree::{RouterApi, RouteTree, Segment};
//!
//! let tree = RouteTree::new().route(
//!     "articles",
//!     Segment::new().sub_route("$articleId", Segment::new()),
//! );
//!
//! let api = RouterApi::build(&tree).unwrap();
//! let article = api.route("articles").unwrap().route("$articleId").unwrap();
//!
//! assert_eq!(article.template(), "articles/:articleId");
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::RouteTreeError;
use crate::{debug_log, trace_log};
use crate::path::PathChain;
use crate::reserved::ensure_no_reserved_keys;
use crate::segment::{param_name, RouteTree, Segment};

/// A route template node with its children attached.
///
/// Unlike the client API, parameter segments are ordinary nodes here: they
/// render as `:name` and need no value.
#[derive(Debug, Clone)]
pub struct RouterRoute {
    chain: Arc<PathChain>,
    children: HashMap<String, RouterRoute>,
}

impl RouterRoute {
    /// Resolve this node's path template.
    pub fn template(&self) -> String {
        self.chain.resolve()
    }

    /// Look up a child template node by its key in the input tree.
    pub fn route(&self, key: &str) -> Option<&RouterRoute> {
        self.children.get(key)
    }

    /// Check whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate over the child keys of this node.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }
}

/// Root of the compiled router API.
#[derive(Debug, Clone)]
pub struct RouterApi {
    routes: HashMap<String, RouterRoute>,
}

impl RouterApi {
    /// Compile the router API for a route tree.
    ///
    /// Fails if any key in the tree collides with the reserved keyword
    /// blocklist.
    pub fn build(tree: &RouteTree) -> Result<Self, RouteTreeError> {
        ensure_no_reserved_keys(tree)?;
        Ok(Self::build_unchecked(tree))
    }

    pub(crate) fn build_unchecked(tree: &RouteTree) -> Self {
        debug_log!("building router API for {} root routes", tree.routes.len());
        let routes = tree
            .routes
            .iter()
            .map(|(key, segment)| (key.clone(), build_route(key, segment, None, false)))
            .collect();
        Self { routes }
    }

    /// Look up a top-level template node by key.
    pub fn route(&self, key: &str) -> Option<&RouterRoute> {
        self.routes.get(key)
    }

    /// Iterate over the top-level keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }
}

/// Pick the template token for one segment.
///
/// Parameter keys win over `segment_name`; an override with a leading `/`
/// is treated as absolute and has the slash stripped.
fn render_segment(key: &str, segment: &Segment) -> String {
    if let Some(name) = param_name(key) {
        format!(":{name}")
    } else if let Some(name) = &segment.segment_name {
        name.strip_prefix('/').unwrap_or(name).to_string()
    } else {
        key.to_string()
    }
}

fn build_route(
    key: &str,
    segment: &Segment,
    parent: Option<Arc<PathChain>>,
    suppress_prefix: bool,
) -> RouterRoute {
    let token = render_segment(key, segment);
    trace_log!("template segment {key:?} -> {token:?}");
    // A child of a parent route starts its own chain; suppression never
    // reaches further than one level because grandchildren hang off this
    // fresh chain again.
    let chain = PathChain::new(token, if suppress_prefix { None } else { parent });
    let children = segment
        .sub_routes
        .iter()
        .map(|(child_key, child)| {
            (
                child_key.clone(),
                build_route(child_key, child, Some(chain.clone()), segment.is_parent),
            )
        })
        .collect();
    RouterRoute { chain, children }
}

// ============================================================================
// Tests
// ============================================================================
