//! # Waypoint
//!
//! **HTTP request router with radix tree matching, groups, and middleware**
//!
//! Waypoint maps a method and path to a registered handler, extracts path
//! parameters lazily, and applies a trailing-slash / clean-path redirect
//! policy. It is designed to sit inside an HTTP server: it never touches
//! sockets or parses HTTP, and talks to the host only through the narrow
//! [`ResponseWriter`] and [`Request`] interfaces.
//!
//! - **Radix tree matching** – lookup cost tracks the request path
//!   length, not the number of routes ([`waypoint_tree`])
//! - **Priority ordering** – static segments beat `:name` parameters,
//!   which beat a trailing `*name` catch-all
//! - **Lazy parameters** – values are sliced out of the request path only
//!   when a handler asks for them
//! - **Groups** – nested path prefixes with per-group middleware stacks,
//!   composed once at registration
//! - **Redirect policy** – lexical path cleaning and trailing-slash
//!   toggling with configurable status codes
//!
//! ## Quick start
//!
//! ```rust
//! use http::Method;
//! use waypoint::{handler, Response, Router};
//!
//! let router = Router::new();
//!
//! let api = router.group("/api");
//! api.get("/users/:id", handler(|w, req| {
//!     waypoint::json(w, &serde_json::json!({ "id": req.param("id") }))
//! }))
//! .unwrap();
//!
//! let mut response = Response::new();
//! router
//!     .serve(&Method::GET, "/api/users/42", &mut response)
//!     .unwrap();
//! assert_eq!(response.body(), br#"{"id":"42"}"#);
//! ```
//!
//! ## Request flow
//!
//! ```text
//! serve(method, target)
//!     │ split query/fragment, apply path source
//!     ▼
//! tree lookup ──── hit ────▶ composed handler(writer, request)
//!     │
//!     ├─ route without verb ─▶ redirect policy ─▶ 405 (Allow header)
//!     └─ no route ───────────▶ redirect policy ─▶ 404
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod group;
mod handler;
mod path;
mod response;
mod router;

pub use config::{PathSource, RedirectBehavior, RouterConfig, RouterConfigBuilder};
pub use group::Group;
pub use handler::{
    handler, middleware, ErrorHandler, HandlerError, HandlerFunc, Middleware, Request,
};
pub use response::{json, Response, ResponseWriter};
pub use router::Router;

// Re-export the matching core so hosts can use the tree directly.
pub use waypoint_tree as tree;
pub use waypoint_tree::{InsertError, Param, ParamError, ParamNames, Params, RouteSlot};
