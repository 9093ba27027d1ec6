//! Reserved keyword validation
//!
//! Route tables built with this crate are routinely exported to
//! JavaScript-side routers where each route node doubles as a function
//! object. A segment key that collides with a function-object property
//! (`name`, `length`, ...) would silently shadow framework behavior there,
//! so such keys are rejected before any API surface is built. Use
//! [`Segment::segment_name`](crate::Segment::segment_name) to keep a
//! reserved word as the rendered path token under a different key.

use crate::error::RouteTreeError;
use crate::error_log;
use crate::segment::{RouteTree, Segment};

/// Keys that collide with JavaScript function-object properties.
pub const RESERVED_KEYS: &[&str] = &[
    "name",
    "arguments",
    "length",
    "caller",
    "prototype",
    "bind",
    "call",
    "apply",
    "constructor",
    "hasOwnProperty",
    "isPrototypeOf",
    "toString",
    "propertyIsEnumerable",
    "toLocaleString",
    "valueOf",
];

fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Collect every reserved key used anywhere in the tree, in traversal order.
///
/// Repeated uses are reported once per occurrence.
pub fn contained_reserved_keys(tree: &RouteTree) -> Vec<String> {
    let mut found = Vec::new();
    for (key, segment) in &tree.routes {
        collect(key, segment, &mut found);
    }
    found
}

fn collect(key: &str, segment: &Segment, found: &mut Vec<String>) {
    if is_reserved(key) {
        found.push(key.to_string());
    }
    for (child_key, child) in &segment.sub_routes {
        collect(child_key, child, found);
    }
}

/// Fail fast if any key in the tree collides with the blocklist.
pub fn ensure_no_reserved_keys(tree: &RouteTree) -> Result<(), RouteTreeError> {
    let keys = contained_reserved_keys(tree);
    if keys.is_empty() {
        Ok(())
    } else {
        error_log!("rejecting route tree, reserved keys: {}", keys.join(" & "));
        Err(RouteTreeError::ReservedKeys { keys })
    }
}

// ============================================================================
// Tests
// ============================================================================
