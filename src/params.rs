//! Parameter name extraction
//!
//! Walks the route tree and produces a flat lookup from every `$`-prefixed
//! key to its bare name, regardless of depth. The map is a convenience for
//! wiring extracted values back out of a routing framework: the keys match
//! the declarations in the tree, the values are the names the framework
//! reports.

use std::collections::HashMap;

use crate::segment::{param_name, RouteTree, Segment};
use crate::warn_log;

/// Flat mapping from `$`-prefixed parameter keys to their bare names.
///
/// # Example
///
/// ```
/// use route_tree::{ParamNames, RouteTree, Segment};
///
/// let tree = RouteTree::new().route(
///     "articles",
///     Segment::new().sub_route("$articleId", Segment::new()),
/// );
///
/// let params = ParamNames::extract(&tree);
/// assert_eq!(params.get("$articleId"), Some("articleId"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParamNames {
    names: HashMap<String, String>,
}

impl ParamNames {
    /// Extract every parameter declared anywhere in the tree.
    ///
    /// All keys at all depths are collected in traversal order and filtered
    /// for the `$` prefix; only keys are considered, never field values. A
    /// parameter key declared at several places collapses to one entry.
    pub fn extract(tree: &RouteTree) -> Self {
        let mut names = HashMap::new();
        for key in collect_keys(tree) {
            if let Some(name) = param_name(&key) {
                if names.insert(key.clone(), name.to_string()).is_some() {
                    warn_log!("parameter key {key:?} is declared more than once");
                }
            }
        }
        Self { names }
    }

    /// Look up the bare name for a `$`-prefixed key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    /// Check whether a parameter key was declared.
    pub fn contains(&self, key: &str) -> bool {
        self.names.contains_key(key)
    }

    /// Iterate over `(key, bare name)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .map(|(key, name)| (key.as_str(), name.as_str()))
    }

    /// Number of distinct parameter keys.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether no parameters were declared.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Collect every route key at every level, depth-first, in traversal order.
fn collect_keys(tree: &RouteTree) -> Vec<String> {
    let mut keys = Vec::new();
    for (key, segment) in &tree.routes {
        collect(key, segment, &mut keys);
    }
    keys
}

fn collect(key: &str, segment: &Segment, keys: &mut Vec<String>) {
    keys.push(key.to_string());
    for (child_key, child) in &segment.sub_routes {
        collect(child_key, child, keys);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_parameters_at_any_depth() {
        let tree = RouteTree::new().route(
            "root",
            Segment::new()
                .sub_route(
                    "articles",
                    Segment::new().sub_route(
                        "$articleId",
                        Segment::new().sub_route(
                            "comments",
                            Segment::new().sub_route("$commentId", Segment::new()),
                        ),
                    ),
                )
                .sub_route("$locale", Segment::new()),
        );

        let params = ParamNames::extract(&tree);
        assert_eq!(params.len(), 3);
        assert_eq!(params.get("$articleId"), Some("articleId"));
        assert_eq!(params.get("$commentId"), Some("commentId"));
        assert_eq!(params.get("$locale"), Some("locale"));
    }

    #[test]
    fn test_non_parameter_keys_filtered_out() {
        let tree = RouteTree::new().route(
            "root",
            Segment::new().sub_route("home", Segment::new()),
        );

        let params = ParamNames::extract(&tree);
        assert!(params.is_empty());
        assert!(!params.contains("root"));
    }

    #[test]
    fn test_segment_name_values_never_feed_the_filter() {
        // A field value starting with `$` is not a key and must not be
        // miscategorized as a parameter.
        let tree = RouteTree::new().route(
            "root",
            Segment::new().sub_route("price", Segment::new().segment_name("$amount")),
        );

        let params = ParamNames::extract(&tree);
        assert!(params.is_empty());
    }

    #[test]
    fn test_repeated_parameter_collapses() {
        let tree = RouteTree::new()
            .route("users", Segment::new().sub_route("$id", Segment::new()))
            .route("posts", Segment::new().sub_route("$id", Segment::new()));

        let params = ParamNames::extract(&tree);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("$id"), Some("id"));
    }

    #[test]
    fn test_iter_yields_key_name_pairs() {
        let tree = RouteTree::new().route("$locale", Segment::new());
        let params = ParamNames::extract(&tree);

        let pairs: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(pairs, vec![("$locale", "locale")]);
    }
}
