//! Route tree definition
//!
//! The input to compilation is a nested tree of [`Segment`] values held by a
//! [`RouteTree`] root. Keys beginning with `$` declare parameter segments
//! whose concrete value is supplied when the compiled client API is used.
//!
//! # Example
//!
//! ```
//! use route_tree::{RouteTree, Segment};
//!
//! let tree = RouteTree::new().route(
//!     "articles",
//!     Segment::new().sub_route("$articleId", Segment::new().sub_route("edit", Segment::new())),
//! );
//!
//! assert!(tree.get("articles").is_some());
//! ```

/// A single node of the route tree.
///
/// All fields are optional: a default segment renders as its key and has no
/// children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    /// Overrides the path token rendered for this node. Useful for long
    /// strings and for keys that would otherwise collide with the reserved
    /// keyword blocklist.
    pub segment_name: Option<String>,
    /// Marks this node as a parent route: its direct children render as
    /// standalone router templates, without this node's prefix.
    pub is_parent: bool,
    /// Child nodes in declaration order, keyed by path segment. Keys
    /// beginning with `$` declare parameter segments.
    pub sub_routes: Vec<(String, Segment)>,
}

impl Segment {
    /// Create an empty segment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the rendered path token for this segment.
    ///
    /// The override is used verbatim by the client API. The router API
    /// strips one leading `/`, treating the override as absolute.
    pub fn segment_name(mut self, name: impl Into<String>) -> Self {
        self.segment_name = Some(name.into());
        self
    }

    /// Mark this segment as a parent route.
    ///
    /// Only the router API cares: direct children of a parent route render
    /// without this node's prefix, matching routers that nest parent/child
    /// registrations instead of concatenating paths.
    pub fn parent(mut self) -> Self {
        self.is_parent = true;
        self
    }

    /// Add a child segment under `key`.
    pub fn sub_route(mut self, key: impl Into<String>, segment: Segment) -> Self {
        self.sub_routes.push((key.into(), segment));
        self
    }

    /// Add several child segments at once.
    pub fn sub_routes(mut self, routes: Vec<(String, Segment)>) -> Self {
        self.sub_routes.extend(routes);
        self
    }

    /// Look up a direct child by key.
    pub fn get(&self, key: &str) -> Option<&Segment> {
        self.sub_routes
            .iter()
            .find(|(child_key, _)| child_key == key)
            .map(|(_, segment)| segment)
    }

    /// Check whether this segment has any children.
    pub fn has_sub_routes(&self) -> bool {
        !self.sub_routes.is_empty()
    }
}

/// Root of a route tree: the top-level key to segment mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTree {
    /// Top-level routes in declaration order.
    pub routes: Vec<(String, Segment)>,
}

impl RouteTree {
    /// Create an empty route tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level route under `key`.
    pub fn route(mut self, key: impl Into<String>, segment: Segment) -> Self {
        self.routes.push((key.into(), segment));
        self
    }

    /// Look up a top-level segment by key.
    pub fn get(&self, key: &str) -> Option<&Segment> {
        self.routes
            .iter()
            .find(|(route_key, _)| route_key == key)
            .map(|(_, segment)| segment)
    }

    /// Number of top-level routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check whether the tree has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Return the declared parameter name for a `$`-prefixed key.
///
/// `"$articleId"` yields `Some("articleId")`; any other key yields `None`.
pub(crate) fn param_name(key: &str) -> Option<&str> {
    key.strip_prefix('$')
}

// ============================================================================
// Tests
// ============================================================================
