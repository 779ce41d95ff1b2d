//! The handler contract.
//!
//! A handler is a plain function over the narrow host interfaces: it
//! receives a [`ResponseWriter`] and a borrowed [`Request`] view and
//! returns a [`HandlerError`] on failure. Middleware is a function from
//! handler to handler; groups compose the stack once at registration, so
//! the dispatch path never builds closures per request.

use std::sync::Arc;

use http::{Method, StatusCode};
use thiserror::Error;
use waypoint_tree::Params;

use crate::response::ResponseWriter;

/// A composed request handler.
pub type HandlerFunc =
    Arc<dyn Fn(&mut dyn ResponseWriter, &Request<'_>) -> Result<(), HandlerError> + Send + Sync>;

/// A middleware wraps a handler into a new handler.
///
/// Stacks compose innermost-first, so the first middleware added to a
/// group is the outermost at call time.
pub type Middleware = Arc<dyn Fn(HandlerFunc) -> HandlerFunc + Send + Sync>;

/// An error-rendering hook invoked when a handler fails and the router is
/// configured to absorb errors instead of returning them to the host.
pub type ErrorHandler =
    Arc<dyn Fn(&mut dyn ResponseWriter, &Request<'_>, &HandlerError) + Send + Sync>;

/// Wraps a closure into a [`HandlerFunc`].
pub fn handler<F>(f: F) -> HandlerFunc
where
    F: Fn(&mut dyn ResponseWriter, &Request<'_>) -> Result<(), HandlerError>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// Wraps a closure into a [`Middleware`].
pub fn middleware<F>(f: F) -> Middleware
where
    F: Fn(HandlerFunc) -> HandlerFunc + Send + Sync + 'static,
{
    Arc::new(f)
}

/// The borrowed view of a request that the router hands to handlers.
///
/// The view lives for the duration of the dispatch call; handlers must
/// not stash it. The host request object itself stays outside the router.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    method: &'a Method,
    path: &'a str,
    query: Option<&'a str>,
    params: Params<'a>,
}

impl<'a> Request<'a> {
    pub(crate) fn new(
        method: &'a Method,
        path: &'a str,
        query: Option<&'a str>,
        params: Params<'a>,
    ) -> Self {
        Self {
            method,
            path,
            query,
            params,
        }
    }

    /// The request method.
    #[must_use]
    pub fn method(&self) -> &Method {
        self.method
    }

    /// The path that was matched, exactly as the router saw it.
    #[must_use]
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// The raw query string, without the leading `?`.
    #[must_use]
    pub fn query(&self) -> Option<&'a str> {
        self.query
    }

    /// The matched route's parameters.
    #[must_use]
    pub fn params(&self) -> &Params<'a> {
        &self.params
    }

    /// Shorthand for `params().get(name)`.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.params.get(name)
    }

    /// The registered route pattern, or `""` outside a match.
    #[must_use]
    pub fn route(&self) -> &'a str {
        self.params.route()
    }
}

/// An error raised by a handler or middleware.
///
/// The router passes handler errors back to the host unchanged unless an
/// error handler is configured.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A plain error message, reported as a 500.
    #[error("{message}")]
    Message {
        /// Human-readable error message.
        message: String,
    },

    /// An error carrying its own response status.
    #[error("{message}")]
    Status {
        /// The HTTP status this error maps to.
        status: StatusCode,
        /// Human-readable error message.
        message: String,
    },

    /// Any other error bubbled up from application code.
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl HandlerError {
    /// Creates a plain message error.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }

    /// Creates an error with an explicit response status.
    #[must_use]
    pub fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// The response status this error maps to.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Status { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
