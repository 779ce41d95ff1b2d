//! Radix tree route matching core for the Waypoint router.
//!
//! This crate implements the data structure behind Waypoint's request
//! routing: a radix tree (compressed trie) over route patterns, with
//! per-verb handler slots and lazy path parameter extraction.
//!
//! # Features
//!
//! - **Prefix-compressed labels**: consecutive literal segments collapse
//!   into one node label, so lookup cost tracks the path length, not the
//!   number of routes.
//! - **First-byte indexed dispatch**: each node keeps a dense table over
//!   its children's first bytes for O(1) child selection.
//! - **Priority ordering**: static labels beat `:name` parameters, which
//!   beat a terminal `*name` catch-all.
//! - **Method-miss fallthrough**: a path that matches a route without the
//!   requested verb is still reported, so the embedding router can answer
//!   405 instead of 404.
//! - **Lazy parameters**: [`Params`] borrows the request path and the
//!   matched node chain; values are sliced out only when asked for.
//!
//! # Example
//!
//! ```rust
//! use http::Method;
//! use waypoint_tree::{RouteSlot, Tree};
//!
//! let mut tree = Tree::new();
//!
//! let (node, params) = tree.add_route("/users/:id").unwrap();
//! tree.set_handler(node, &Method::GET, "/users/:id", RouteSlot::new("getUser", params))
//!     .unwrap();
//!
//! let m = tree.find(&Method::GET, "/users/123").unwrap();
//! let slot = m.slot().unwrap();
//! assert_eq!(slot.value, "getUser");
//!
//! let params = m.params(slot, "/users/123");
//! assert_eq!(params.get("id"), Some("123"));
//! assert_eq!(params.route(), "/users/:id");
//! ```
//!
//! # Route patterns
//!
//! Patterns start with `/`. A segment beginning with `:` captures exactly
//! one non-empty segment; a final segment beginning with `*` captures the
//! rest of the path, embedded slashes included. Names must be non-empty
//! and unique within a pattern.
//!
//! The tree operates on raw bytes: percent-encoded sequences are matched
//! and captured exactly as given.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod method;
mod node;
mod params;
mod pattern;
mod tree;

pub use error::InsertError;
pub use method::RouteSlot;
pub use params::{Param, ParamError, Params};
pub use pattern::ParamNames;
pub use tree::{Tree, TreeMatch};
