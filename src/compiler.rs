//! One-pass compilation
//!
//! [`compile`] validates the tree once and derives all three artifacts
//! together: the client API, the router API, and the parameter map. The
//! individual builders on [`ClientApi`](crate::ClientApi) and
//! [`RouterApi`](crate::RouterApi) remain available when only one surface
//! is needed.

use crate::client::ClientApi;
use crate::error::RouteTreeError;
use crate::info_log;
use crate::params::ParamNames;
use crate::reserved::ensure_no_reserved_keys;
use crate::router::RouterApi;
use crate::segment::RouteTree;

/// Options controlling compilation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Root every client URL with a leading `/` (`/root/home` instead of
    /// `root/home`). Router templates and the parameter map are unaffected.
    pub absolute_client_paths: bool,
}

/// The three artifacts derived from one route tree.
#[derive(Debug, Clone)]
pub struct CompiledRoutes {
    /// Path-resolving client API.
    pub client: ClientApi,
    /// Template-producing router API.
    pub router: RouterApi,
    /// Flat `$key` to bare-name parameter lookup.
    pub params: ParamNames,
}

/// Compile a route tree with default options.
pub fn compile(tree: &RouteTree) -> Result<CompiledRoutes, RouteTreeError> {
    compile_with(tree, CompileOptions::default())
}

/// Compile a route tree.
///
/// The reserved keyword guard runs once, up front; nothing is built if it
/// fails.
pub fn compile_with(
    tree: &RouteTree,
    options: CompileOptions,
) -> Result<CompiledRoutes, RouteTreeError> {
    ensure_no_reserved_keys(tree)?;
    let client = ClientApi::build_unchecked(tree, options.absolute_client_paths);
    let router = RouterApi::build_unchecked(tree);
    let params = ParamNames::extract(tree);
    info_log!(
        "compiled route tree: {} root routes, {} parameters",
        tree.len(),
        params.len()
    );
    Ok(CompiledRoutes {
        client,
        router,
        params,
    })
}

impl RouteTree {
    /// Compile this tree with default options. See [`compile`].
    pub fn compile(&self) -> Result<CompiledRoutes, RouteTreeError> {
        compile(self)
    }

    /// Compile this tree with explicit options. See [`compile_with`].
    pub fn compile_with(&self, options: CompileOptions) -> Result<CompiledRoutes, RouteTreeError> {
        compile_with(self, options)
    }
}

// ============================================================================
// Tests
// ============================================================================
