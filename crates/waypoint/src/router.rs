//! The router front-end.
//!
//! The router owns the route tree behind a read-write lock, applies the
//! redirect policy, and converts lookup misses into the configured 404
//! and 405 handlers. Lookup itself is pure; the only synchronization on
//! the request path is one uncontended read-lock acquisition.

use http::header::{HeaderValue, ALLOW, LOCATION};
use http::Method;
use parking_lot::{RwLock, RwLockWriteGuard};
use percent_encoding::percent_decode_str;
use tracing::trace;
use waypoint_tree::{InsertError, Params, Tree};

use crate::config::{PathSource, RouterConfig};
use crate::group::Group;
use crate::handler::{HandlerError, HandlerFunc, Request};
use crate::path;
use crate::response::ResponseWriter;

/// An HTTP request router.
///
/// Routes are registered up front (directly or through [`Group`]s) and
/// matched with [`Router::serve`]. Registration is serialized by a write
/// lock; requests take the read side, so the usual register-then-serve
/// pattern runs without contention.
///
/// # Example
///
/// ```rust
/// use http::{Method, StatusCode};
/// use waypoint::{handler, Response, Router};
///
/// let router = Router::new();
/// router
///     .get("/hello/:name", handler(|w, req| {
///         let name = req.param("name").unwrap_or("world");
///         w.write(format!("hello {name}").as_bytes());
///         Ok(())
///     }))
///     .unwrap();
///
/// let mut response = Response::new();
/// router.serve(&Method::GET, "/hello/waypoint", &mut response).unwrap();
/// assert_eq!(response.status(), StatusCode::OK);
/// assert_eq!(response.body(), b"hello waypoint");
/// ```
pub struct Router {
    tree: RwLock<Tree<HandlerFunc>>,
    config: RouterConfig,
}

impl Router {
    /// Creates a router with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Creates a router with `config`.
    ///
    /// Handlers referenced by the configuration are composed into routes
    /// at registration time, so the configuration is fixed up front.
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            tree: RwLock::new(Tree::new()),
            config,
        }
    }

    /// The router's configuration.
    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub(crate) fn tree_write(&self) -> RwLockWriteGuard<'_, Tree<HandlerFunc>> {
        self.tree.write()
    }

    /// Returns a registration group scoped to `prefix`.
    #[must_use]
    pub fn group(&self, prefix: &str) -> Group<'_> {
        Group::root(self).new_group(prefix)
    }

    /// Registers `handler` for `method` at `route`.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::InvalidRoute`] for malformed patterns and
    /// [`InsertError::Conflict`] when the (route, method) pair is taken.
    pub fn handle(
        &self,
        method: Method,
        route: &str,
        handler: HandlerFunc,
    ) -> Result<(), InsertError> {
        Group::root(self).handle(method, route, handler)
    }

    /// Registers a GET handler.
    ///
    /// # Errors
    ///
    /// See [`Router::handle`].
    pub fn get(&self, route: &str, handler: HandlerFunc) -> Result<(), InsertError> {
        self.handle(Method::GET, route, handler)
    }

    /// Registers a POST handler.
    ///
    /// # Errors
    ///
    /// See [`Router::handle`].
    pub fn post(&self, route: &str, handler: HandlerFunc) -> Result<(), InsertError> {
        self.handle(Method::POST, route, handler)
    }

    /// Registers a PUT handler.
    ///
    /// # Errors
    ///
    /// See [`Router::handle`].
    pub fn put(&self, route: &str, handler: HandlerFunc) -> Result<(), InsertError> {
        self.handle(Method::PUT, route, handler)
    }

    /// Registers a DELETE handler.
    ///
    /// # Errors
    ///
    /// See [`Router::handle`].
    pub fn delete(&self, route: &str, handler: HandlerFunc) -> Result<(), InsertError> {
        self.handle(Method::DELETE, route, handler)
    }

    /// Registers a HEAD handler.
    ///
    /// # Errors
    ///
    /// See [`Router::handle`].
    pub fn head(&self, route: &str, handler: HandlerFunc) -> Result<(), InsertError> {
        self.handle(Method::HEAD, route, handler)
    }

    /// Registers an OPTIONS handler.
    ///
    /// # Errors
    ///
    /// See [`Router::handle`].
    pub fn options(&self, route: &str, handler: HandlerFunc) -> Result<(), InsertError> {
        self.handle(Method::OPTIONS, route, handler)
    }

    /// Registers a PATCH handler.
    ///
    /// # Errors
    ///
    /// See [`Router::handle`].
    pub fn patch(&self, route: &str, handler: HandlerFunc) -> Result<(), InsertError> {
        self.handle(Method::PATCH, route, handler)
    }

    /// Resolves and invokes the handler for `(method, target)`.
    ///
    /// `target` is the request target: the path plus an optional query
    /// and fragment, which redirects preserve. Misses render through the
    /// configured 404/405 handlers or the redirect policy; a handler
    /// error is returned to the host unchanged unless an error handler is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns the [`HandlerError`] raised by the invoked handler.
    pub fn serve(
        &self,
        method: &Method,
        target: &str,
        w: &mut dyn ResponseWriter,
    ) -> Result<(), HandlerError> {
        let (raw_path, suffix) = path::split_target(target);
        let query = suffix.strip_prefix('?').map(|q| match q.find('#') {
            Some(i) => &q[..i],
            None => q,
        });

        let decoded;
        let path: &str = match self.config.path_source() {
            PathSource::RawUri => raw_path,
            PathSource::Unescaped => {
                decoded = percent_decode_str(raw_path).decode_utf8_lossy().into_owned();
                &decoded
            }
        };

        let tree = self.tree.read();

        let mut found = tree.find(method, path);
        let have_handler = matches!(&found, Some(m) if m.slot().is_some());
        if !have_handler && *method == Method::HEAD && self.config.head_can_use_get() {
            if let Some(m) = tree.find(&Method::GET, path) {
                if m.slot().is_some() {
                    found = Some(m);
                }
            }
        }

        let m = match found {
            Some(m) => m,
            None => {
                if let Some(location) = self.redirect_target(&tree, method, path) {
                    return self.redirect(w, &location, suffix);
                }
                trace!(%method, path, "no route matched");
                let request = Request::new(method, path, query, Params::empty());
                return self.invoke(&self.config.not_found_handler(), w, &request);
            }
        };

        if let Some(slot) = m.slot() {
            let params = m.params(slot, path);
            let request = Request::new(method, path, query, params);
            return self.invoke(&slot.value, w, &request);
        }

        // The route exists but not for this verb.
        if let Some(location) = self.redirect_target(&tree, method, path) {
            return self.redirect(w, &location, suffix);
        }
        trace!(%method, path, route = m.route(), "method not allowed");
        let allow = m
            .allowed_methods()
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if let Ok(value) = HeaderValue::from_str(&allow) {
            w.insert_header(ALLOW, value);
        }
        match m.not_allowed() {
            Some(slot) => {
                let params = m.params(slot, path);
                let request = Request::new(method, path, query, params);
                self.invoke(&slot.value, w, &request)
            }
            None => {
                let request = Request::new(method, path, query, Params::empty());
                self.invoke(&self.config.method_not_allowed_handler(), w, &request)
            }
        }
    }

    fn invoke(
        &self,
        handler: &HandlerFunc,
        w: &mut dyn ResponseWriter,
        request: &Request<'_>,
    ) -> Result<(), HandlerError> {
        match (handler.as_ref())(w, request) {
            Ok(()) => Ok(()),
            Err(err) => match self.config.error_handler() {
                Some(hook) => {
                    (hook.as_ref())(w, request, &err);
                    Ok(())
                }
                None => Err(err),
            },
        }
    }

    /// Applies the redirect policy to an unresolved `path`.
    ///
    /// The cleaned form is tried first, then the trailing-slash toggle.
    /// The root path is never redirected.
    fn redirect_target(
        &self,
        tree: &Tree<HandlerFunc>,
        method: &Method,
        path: &str,
    ) -> Option<String> {
        if path == "/" {
            return None;
        }

        if self.config.redirect_clean_path() {
            let cleaned = path::clean(path);
            if cleaned != path && self.resolves(tree, method, &cleaned, true) {
                trace!(from = path, to = %cleaned, "clean-path redirect");
                return Some(cleaned);
            }
        }

        if self.config.redirect_trailing_slash() {
            let toggled = match path.strip_suffix('/') {
                Some(stripped) => stripped.to_owned(),
                None => format!("{path}/"),
            };
            if toggled != "/"
                && self.resolves(
                    tree,
                    method,
                    &toggled,
                    self.config.redirect_catch_all_trailing_slash(),
                )
            {
                trace!(from = path, to = %toggled, "trailing-slash redirect");
                return Some(toggled);
            }
        }

        None
    }

    /// Returns true when `path` has a handler for `method` (honoring the
    /// HEAD fallback) and the catch-all gate permits the target.
    fn resolves(
        &self,
        tree: &Tree<HandlerFunc>,
        method: &Method,
        path: &str,
        allow_catch_all: bool,
    ) -> bool {
        let m = match tree.find(method, path) {
            Some(m) => m,
            None => return false,
        };
        if !allow_catch_all && m.is_catch_all() {
            return false;
        }
        if m.slot().is_some() {
            return true;
        }
        *method == Method::HEAD
            && self.config.head_can_use_get()
            && tree
                .find(&Method::GET, path)
                .is_some_and(|g| g.slot().is_some())
    }

    fn redirect(
        &self,
        w: &mut dyn ResponseWriter,
        location: &str,
        suffix: &str,
    ) -> Result<(), HandlerError> {
        let target = format!("{location}{suffix}");
        let value = HeaderValue::from_str(&target).map_err(|_| {
            HandlerError::message(format!("redirect target {target:?} is not a valid header value"))
        })?;
        w.insert_header(LOCATION, value);
        w.set_status(self.config.redirect_behavior().status_code());
        Ok(())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
