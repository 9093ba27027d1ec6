//! Client API construction
//!
//! The client API mirrors the input tree with path-resolving nodes. A
//! non-parameter key compiles to a [`ClientRoute`] that resolves to its
//! fully qualified path; a `$`-prefixed key compiles to a [`ClientParam`]
//! that must first be bound to a runtime value.
//!
//! # Example
//!
//! ```
//! use route_tree::{ClientApi, RouteTree, Segment};
//!
//! let tree = RouteTree::new().route(
//!     "articles",
//!     Segment::new().sub_route("$articleId", Segment::new().sub_route("edit", Segment::new())),
//! );
//!
//! let api = ClientApi::build(&tree).unwrap();
//! let article = api.route("articles").unwrap().param("$articleId").unwrap().bind(7);
//!
//! assert_eq!(article.resolve(), "articles/7");
//! assert_eq!(article.route("edit").unwrap().resolve(), "articles/7/edit");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::RouteTreeError;
use crate::{debug_log, trace_log};
use crate::path::PathChain;
use crate::reserved::ensure_no_reserved_keys;
use crate::segment::{param_name, RouteTree, Segment};

/// A compiled client node: resolvable in place, or awaiting a parameter
/// value.
#[derive(Debug, Clone)]
pub enum ClientNode {
    /// A plain segment, resolvable as-is.
    Route(ClientRoute),
    /// A parameter segment, resolvable once bound to a value.
    Param(ClientParam),
}

impl ClientNode {
    /// View this node as a plain route, if it is one.
    pub fn as_route(&self) -> Option<&ClientRoute> {
        match self {
            ClientNode::Route(route) => Some(route),
            ClientNode::Param(_) => None,
        }
    }

    /// View this node as a parameter binder, if it is one.
    pub fn as_param(&self) -> Option<&ClientParam> {
        match self {
            ClientNode::Route(_) => None,
            ClientNode::Param(param) => Some(param),
        }
    }

    /// Check whether this node is a parameter segment.
    pub fn is_param(&self) -> bool {
        matches!(self, ClientNode::Param(_))
    }
}

/// A resolvable route node with its children attached.
#[derive(Debug, Clone)]
pub struct ClientRoute {
    chain: Arc<PathChain>,
    children: HashMap<String, ClientNode>,
}

impl ClientRoute {
    /// Resolve this node's fully qualified path.
    ///
    /// Ancestor segments are joined with `/`. Resolution is pure: the same
    /// node always yields the same string.
    pub fn resolve(&self) -> String {
        self.chain.resolve()
    }

    /// Look up a child node by its key in the input tree.
    pub fn get(&self, key: &str) -> Option<&ClientNode> {
        self.children.get(key)
    }

    /// Look up a non-parameter child route by key.
    pub fn route(&self, key: &str) -> Option<&ClientRoute> {
        self.children.get(key)?.as_route()
    }

    /// Look up a parameter child by its `$`-prefixed key.
    pub fn param(&self, key: &str) -> Option<&ClientParam> {
        self.children.get(key)?.as_param()
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

/// A parameter segment awaiting its runtime value.
///
/// Binding a value yields a [`ClientRoute`] whose segment is the stringified
/// value, with the declared children attached below it.
#[derive(Debug, Clone)]
pub struct ClientParam {
    parent: Option<Arc<PathChain>>,
    node: Segment,
    leading_slash: bool,
}

impl ClientParam {
    /// Bind a runtime value to this parameter.
    ///
    /// Any stringifiable value is accepted; it is rendered with `Display`
    /// and not otherwise validated.
    pub fn bind(&self, value: impl fmt::Display) -> ClientRoute {
        let token = if self.leading_slash {
            format!("/{value}")
        } else {
            value.to_string()
        };
        let chain = PathChain::new(token, self.parent.clone());
        ClientRoute {
            children: build_children(&self.node, &chain),
            chain,
        }
    }
}

/// Root of the compiled client API.
#[derive(Debug, Clone)]
pub struct ClientApi {
    routes: HashMap<String, ClientNode>,
}

impl ClientApi {
    /// Compile the client API for a route tree.
    ///
    /// Fails if any key in the tree collides with the reserved keyword
    /// blocklist.
    pub fn build(tree: &RouteTree) -> Result<Self, RouteTreeError> {
        ensure_no_reserved_keys(tree)?;
        Ok(Self::build_unchecked(tree, false))
    }

    pub(crate) fn build_unchecked(tree: &RouteTree, absolute: bool) -> Self {
        debug_log!("building client API for {} root routes", tree.routes.len());
        let routes = tree
            .routes
            .iter()
            .map(|(key, segment)| (key.clone(), build_node(key, segment, None, absolute)))
            .collect();
        Self { routes }
    }

    /// Look up a top-level node by key.
    pub fn get(&self, key: &str) -> Option<&ClientNode> {
        self.routes.get(key)
    }

    /// Look up a top-level non-parameter route by key.
    pub fn route(&self, key: &str) -> Option<&ClientRoute> {
        self.routes.get(key)?.as_route()
    }

    /// Look up a top-level parameter by its `$`-prefixed key.
    pub fn param(&self, key: &str) -> Option<&ClientParam> {
        self.routes.get(key)?.as_param()
    }

    /// Iterate over the top-level keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }
}

fn build_node(
    key: &str,
    segment: &Segment,
    parent: Option<Arc<PathChain>>,
    absolute_root: bool,
) -> ClientNode {
    if param_name(key).is_some() {
        // The parameter's sub-view is built when a value is bound, so the
        // declared subtree travels with the binder.
        ClientNode::Param(ClientParam {
            leading_slash: absolute_root && parent.is_none(),
            parent,
            node: segment.clone(),
        })
    } else {
        let token = segment
            .segment_name
            .clone()
            .unwrap_or_else(|| key.to_string());
        let token = if absolute_root && parent.is_none() {
            format!("/{token}")
        } else {
            token
        };
        trace_log!("client segment {key:?} -> {token:?}");
        let chain = PathChain::new(token, parent);
        ClientNode::Route(ClientRoute {
            children: build_children(segment, &chain),
            chain,
        })
    }
}

fn build_children(segment: &Segment, chain: &Arc<PathChain>) -> HashMap<String, ClientNode> {
    segment
        .sub_routes
        .iter()
        .map(|(key, child)| (key.clone(), build_node(key, child, Some(chain.clone()), false)))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> RouteTree {
        RouteTree::new().route(
            "root",
            Segment::new()
                .sub_route(
                    "home",
                    Segment::new().sub_route("recent", Segment::new()),
                )
                .sub_route(
                    "articles",
                    Segment::new().sub_route(
                        "$articleId",
                        Segment::new().sub_route("edit", Segment::new()),
                    ),
                )
                .sub_route("override", Segment::new().segment_name("actual")),
        )
    }

    #[test]
    fn test_resolves_nested_paths() {
        let api = ClientApi::build(&tree()).unwrap();
        let recent = api
            .route("root")
            .unwrap()
            .route("home")
            .unwrap()
            .route("recent")
            .unwrap()
            .resolve();
        assert_eq!(recent, "root/home/recent");
    }

    #[test]
    fn test_root_path_has_no_parent_prefix() {
        let api = ClientApi::build(&tree()).unwrap();
        assert_eq!(api.route("root").unwrap().resolve(), "root");
    }

    #[test]
    fn test_binds_parameters() {
        let api = ClientApi::build(&tree()).unwrap();
        let articles = api.route("root").unwrap().route("articles").unwrap();
        let article = articles.param("$articleId").unwrap().bind("7");

        assert_eq!(article.resolve(), "root/articles/7");
        assert_eq!(article.route("edit").unwrap().resolve(), "root/articles/7/edit");
    }

    #[test]
    fn test_binds_numeric_parameters() {
        let api = ClientApi::build(&tree()).unwrap();
        let article = api
            .route("root")
            .unwrap()
            .route("articles")
            .unwrap()
            .param("$articleId")
            .unwrap()
            .bind(42);
        assert_eq!(article.resolve(), "root/articles/42");
    }

    #[test]
    fn test_binding_twice_is_independent() {
        let api = ClientApi::build(&tree()).unwrap();
        let binder = api
            .route("root")
            .unwrap()
            .route("articles")
            .unwrap()
            .param("$articleId")
            .unwrap()
            .clone();

        assert_eq!(binder.bind("1").resolve(), "root/articles/1");
        assert_eq!(binder.bind("2").resolve(), "root/articles/2");
        assert_eq!(binder.bind("1").resolve(), "root/articles/1");
    }

    #[test]
    fn test_segment_name_used_verbatim() {
        let api = ClientApi::build(&tree()).unwrap();
        let actual = api.route("root").unwrap().route("override").unwrap();
        assert_eq!(actual.resolve(), "root/actual");
        assert!(actual.is_leaf());
    }

    #[test]
    fn test_param_node_is_not_a_route() {
        let api = ClientApi::build(&tree()).unwrap();
        let articles = api.route("root").unwrap().route("articles").unwrap();
        assert!(articles.route("$articleId").is_none());
        assert!(articles.get("$articleId").unwrap().is_param());
    }

    #[test]
    fn test_reserved_key_rejected() {
        let tree = RouteTree::new().route("name", Segment::new());
        let error = ClientApi::build(&tree).unwrap_err();
        assert!(error.to_string().contains("\"name\""));
    }

    #[test]
    fn test_absolute_paths() {
        let api = ClientApi::build_unchecked(&tree(), true);
        let root = api.route("root").unwrap();
        assert_eq!(root.resolve(), "/root");
        assert_eq!(root.route("home").unwrap().resolve(), "/root/home");
    }

    #[test]
    fn test_absolute_root_parameter() {
        let tree = RouteTree::new().route("$locale", Segment::new());
        let api = ClientApi::build_unchecked(&tree, true);
        assert_eq!(api.param("$locale").unwrap().bind("en").resolve(), "/en");
    }
}
