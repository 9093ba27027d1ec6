//! Path resolution chain
//!
//! Compiled nodes do not capture their parent's path function. Each node
//! holds one [`PathChain`] link with a back-reference to its parent's link;
//! resolution walks up the chain and joins the collected segments with `/`.
//! Links are immutable and shared, so resolution is pure and safe to run
//! from any number of callers.

use std::sync::Arc;

/// One link of a resolved path: this node's segment plus its parent chain.
#[derive(Debug)]
pub(crate) struct PathChain {
    segment: String,
    parent: Option<Arc<PathChain>>,
}

impl PathChain {
    /// Create a link. A `None` parent makes this a path root.
    pub(crate) fn new(segment: impl Into<String>, parent: Option<Arc<PathChain>>) -> Arc<Self> {
        Arc::new(Self {
            segment: segment.into(),
            parent,
        })
    }

    /// Resolve the full path by walking up the parent chain.
    pub(crate) fn resolve(&self) -> String {
        let mut segments = Vec::new();
        let mut current = Some(self);
        while let Some(link) = current {
            segments.push(link.segment.as_str());
            current = link.parent.as_deref();
        }
        segments.reverse();
        segments.join("/")
    }
}

// ============================================================================
// Tests
// ============================================================================
