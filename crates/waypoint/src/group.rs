//! Route groups.
//!
//! A group accumulates a path prefix and a middleware stack. Registration
//! through a group concatenates the prefix, composes the stack around the
//! handler, and forwards to the router's tree under the write lock. The
//! composition happens once, at registration; dispatch pays nothing.

use http::Method;
use tracing::debug;
use waypoint_tree::{InsertError, RouteSlot};

use crate::handler::{HandlerFunc, Middleware};
use crate::router::Router;

/// A registration scope: a path prefix plus a middleware stack.
///
/// Sub-groups extend both; sibling groups never observe each other's
/// middleware because the stack is cloned on derivation.
///
/// # Example
///
/// ```rust
/// use waypoint::{handler, Router};
///
/// let router = Router::new();
/// let api = router.group("/api");
/// let v1 = api.new_group("/v1");
///
/// v1.get("/users", handler(|w, _req| {
///     w.write(b"[]");
///     Ok(())
/// }))
/// .unwrap();
/// ```
#[derive(Clone)]
pub struct Group<'r> {
    router: &'r Router,
    prefix: String,
    stack: Vec<Middleware>,
}

impl<'r> Group<'r> {
    pub(crate) fn root(router: &'r Router) -> Self {
        Self {
            router,
            prefix: String::new(),
            stack: Vec::new(),
        }
    }

    /// Derives a sub-group with `prefix` appended and the stack cloned.
    ///
    /// `prefix` must be empty or start with `/`; a violation surfaces as
    /// [`InsertError::InvalidRoute`] at registration time.
    #[must_use]
    pub fn new_group(&self, prefix: &str) -> Group<'r> {
        Group {
            router: self.router,
            prefix: join_prefix(&self.prefix, prefix),
            stack: self.stack.clone(),
        }
    }

    /// Derives a group with `middleware` appended to the stack.
    ///
    /// The first middleware added is the outermost at call time.
    #[must_use]
    pub fn with_middleware(&self, middleware: Middleware) -> Group<'r> {
        let mut group = self.new_group("");
        group.stack.push(middleware);
        group
    }

    /// Runs `f` against a sub-group scoped to `prefix`.
    pub fn with_group(&self, prefix: &str, f: impl FnOnce(&Group<'r>)) {
        f(&self.new_group(prefix));
    }

    /// Registers `handler` for `method` at the group-relative `path`.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::InvalidRoute`] for malformed patterns and
    /// [`InsertError::Conflict`] when the (route, method) pair is taken.
    pub fn handle(
        &self,
        method: Method,
        path: &str,
        handler: HandlerFunc,
    ) -> Result<(), InsertError> {
        if !path.is_empty() && !path.starts_with('/') {
            return Err(InsertError::InvalidRoute {
                route: path.to_owned(),
                reason: "must start with '/'".to_owned(),
            });
        }
        let route = format!("{}{}", self.prefix, path);
        if route.is_empty() {
            return Err(InsertError::InvalidRoute {
                route,
                reason: "route is empty".to_owned(),
            });
        }

        let composed = self.wrap(handler);
        let not_allowed = self.wrap(self.router.config().method_not_allowed_handler());

        let mut tree = self.router.tree_write();
        let (node, params) = tree.add_route(&route)?;
        tree.set_handler(node, &method, &route, RouteSlot::new(composed, params.clone()))?;
        if !tree.has_not_allowed(node) {
            tree.set_not_allowed(node, RouteSlot::new(not_allowed, params));
        }
        debug!(%method, route = %route, "registered route");
        Ok(())
    }

    /// Registers a GET handler.
    ///
    /// # Errors
    ///
    /// See [`Group::handle`].
    pub fn get(&self, path: &str, handler: HandlerFunc) -> Result<(), InsertError> {
        self.handle(Method::GET, path, handler)
    }

    /// Registers a POST handler.
    ///
    /// # Errors
    ///
    /// See [`Group::handle`].
    pub fn post(&self, path: &str, handler: HandlerFunc) -> Result<(), InsertError> {
        self.handle(Method::POST, path, handler)
    }

    /// Registers a PUT handler.
    ///
    /// # Errors
    ///
    /// See [`Group::handle`].
    pub fn put(&self, path: &str, handler: HandlerFunc) -> Result<(), InsertError> {
        self.handle(Method::PUT, path, handler)
    }

    /// Registers a DELETE handler.
    ///
    /// # Errors
    ///
    /// See [`Group::handle`].
    pub fn delete(&self, path: &str, handler: HandlerFunc) -> Result<(), InsertError> {
        self.handle(Method::DELETE, path, handler)
    }

    /// Registers a HEAD handler.
    ///
    /// # Errors
    ///
    /// See [`Group::handle`].
    pub fn head(&self, path: &str, handler: HandlerFunc) -> Result<(), InsertError> {
        self.handle(Method::HEAD, path, handler)
    }

    /// Registers an OPTIONS handler.
    ///
    /// # Errors
    ///
    /// See [`Group::handle`].
    pub fn options(&self, path: &str, handler: HandlerFunc) -> Result<(), InsertError> {
        self.handle(Method::OPTIONS, path, handler)
    }

    /// Registers a PATCH handler.
    ///
    /// # Errors
    ///
    /// See [`Group::handle`].
    pub fn patch(&self, path: &str, handler: HandlerFunc) -> Result<(), InsertError> {
        self.handle(Method::PATCH, path, handler)
    }

    /// Composes the group's stack around `handler`, innermost-first.
    fn wrap(&self, handler: HandlerFunc) -> HandlerFunc {
        let mut composed = handler;
        for middleware in self.stack.iter().rev() {
            composed = (middleware.as_ref())(composed);
        }
        composed
    }
}

/// Concatenates group prefixes, trimming a trailing slash so sub-paths
/// (which all start with `/`) join cleanly.
fn join_prefix(base: &str, prefix: &str) -> String {
    let mut joined = format!("{base}{prefix}");
    if joined.len() > 1 && joined.ends_with('/') {
        joined.pop();
    }
    joined
}
