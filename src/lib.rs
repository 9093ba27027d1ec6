//! # Route Tree
//!
//! A compiler for declarative route trees. One nested description of your
//! application's routes yields:
//!
//! - **Client API** - a navigable tree of nodes resolving concrete URL paths
//! - **Router API** - the same tree resolving `:name` templates for router
//!   registration, with parent-route prefix suppression for nested-router
//!   configurations
//! - **Parameter map** - a flat lookup of every `$name` parameter declared
//!   anywhere in the tree
//!
//! There is no matching or dispatch here: the crate only builds strings, it
//! never parses incoming paths.
//!
//! # Quick Start
//!
//! ```
//! use route_tree::{compile, RouteTree, Segment};
//!
//! let tree = RouteTree::new().route(
//!     "root",
//!     Segment::new()
//!         .sub_route("home", Segment::new().sub_route("recent", Segment::new()))
//!         .sub_route(
//!             "articles",
//!             Segment::new().sub_route(
//!                 "$articleId",
//!                 Segment::new().sub_route("edit", Segment::new()),
//!             ),
//!         ),
//! );
//!
//! let api = compile(&tree).unwrap();
//!
//! // Client API: concrete URLs
//! let root = api.client.route("root").unwrap();
//! assert_eq!(
//!     root.route("home").unwrap().route("recent").unwrap().resolve(),
//!     "root/home/recent"
//! );
//! let article = root
//!     .route("articles").unwrap()
//!     .param("$articleId").unwrap()
//!     .bind(7);
//! assert_eq!(article.resolve(), "root/articles/7");
//!
//! // Router API: templates
//! let template = api.router
//!     .route("root").unwrap()
//!     .route("articles").unwrap()
//!     .route("$articleId").unwrap()
//!     .template();
//! assert_eq!(template, "root/articles/:articleId");
//!
//! // Parameter map
//! assert_eq!(api.params.get("$articleId"), Some("articleId"));
//! ```
//!
//! # Reserved keys
//!
//! Route tables built here are commonly handed to JavaScript-side routers,
//! so keys that collide with function-object properties (`name`, `length`,
//! ...) are rejected at compile time. Keep the key and override the rendered
//! token with [`Segment::segment_name`] instead.
//!
//! # Feature Flags
//!
//! - `log` (default) - Uses the standard `log` crate for logging
//! - `tracing` - Uses the `tracing` crate for structured logging (mutually
//!   exclusive with `log`)

#![doc(html_root_url = "https://docs.rs/route-tree/0.1.0")]
#![cfg_attr(docsrs, feature(doc_cfg))]
// Lints are configured in Cargo.toml [lints] section

// Logging abstraction
pub mod logging;

// Core modules
pub mod client;
pub mod compiler;
pub mod params;
pub mod reserved;
pub mod router;
pub mod segment;

// Error handling
pub mod error;

// Path resolution chain (internal)
mod path;

// Re-export main types for convenient access
pub use client::{ClientApi, ClientNode, ClientParam, ClientRoute};
pub use compiler::{compile, compile_with, CompileOptions, CompiledRoutes};
pub use error::RouteTreeError;
pub use params::ParamNames;
pub use reserved::{contained_reserved_keys, ensure_no_reserved_keys, RESERVED_KEYS};
pub use router::{RouterApi, RouterRoute};
pub use segment::{RouteTree, Segment};
