//! Error types for route registration.

use http::Method;
use thiserror::Error;

/// Errors returned when a route cannot be added to the tree.
///
/// Both variants indicate a programming error in route setup, so callers
/// typically surface them at startup rather than handling them at runtime.
#[derive(Debug, Error)]
pub enum InsertError {
    /// The route pattern is malformed.
    #[error("invalid route {route:?}: {reason}")]
    InvalidRoute {
        /// The offending route pattern.
        route: String,
        /// Why the pattern was rejected.
        reason: String,
    },

    /// Two registrations claim the same (node, method) pair.
    ///
    /// `existing` is the pattern that reached the node first; `route` is the
    /// pattern being registered. The two can be different spellings of the
    /// same path (e.g. `GET /:foo` and `GET /:bar`).
    #[error("routes {existing:?} and {route:?} cannot both handle {method}")]
    Conflict {
        /// The pattern already registered at the node.
        existing: String,
        /// The pattern being registered.
        route: String,
        /// The contested HTTP method.
        method: Method,
    },
}

impl InsertError {
    pub(crate) fn invalid(route: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRoute {
            route: route.to_owned(),
            reason: reason.into(),
        }
    }
}
