//! Router configuration.
//!
//! All knobs are fixed before the router starts serving: the redirect
//! policy, the path source, and the fallback handlers. Use
//! [`RouterConfig::builder()`] for anything beyond the defaults.

use http::StatusCode;

use crate::handler::{handler, ErrorHandler, HandlerFunc};

/// The status the router answers redirects with.
///
/// Permanent 301 is the default. 307 keeps the original method and body
/// on resubmission; 308 is its permanent counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedirectBehavior {
    /// `301 Moved Permanently`.
    #[default]
    MovedPermanently,
    /// `307 Temporary Redirect`.
    TemporaryRedirect,
    /// `308 Permanent Redirect`.
    PermanentRedirect,
}

impl RedirectBehavior {
    /// The status code this behavior answers with.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MovedPermanently => StatusCode::MOVED_PERMANENTLY,
            Self::TemporaryRedirect => StatusCode::TEMPORARY_REDIRECT,
            Self::PermanentRedirect => StatusCode::PERMANENT_REDIRECT,
        }
    }
}

/// Where the router takes the match path from.
///
/// `RawUri` matches the request target bytes as given, so a
/// percent-encoded slash (`%2F`) stays inside its segment. `Unescaped`
/// percent-decodes the path first, which makes `%2F` a separator. The
/// tree itself always matches the exact bytes it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathSource {
    /// Match the raw request target (default).
    #[default]
    RawUri,
    /// Percent-decode the path before matching.
    Unescaped,
}

/// Configuration for a [`Router`](crate::Router).
///
/// # Example
///
/// ```rust
/// use waypoint::{handler, RouterConfig};
///
/// let config = RouterConfig::builder()
///     .redirect_trailing_slash(false)
///     .not_found_handler(handler(|w, _req| {
///         w.set_status(http::StatusCode::NOT_FOUND);
///         w.write(b"nothing here\n");
///         Ok(())
///     }))
///     .build();
///
/// assert!(!config.redirect_trailing_slash());
/// assert!(config.redirect_clean_path());
/// ```
#[derive(Clone)]
pub struct RouterConfig {
    redirect_trailing_slash: bool,
    redirect_clean_path: bool,
    redirect_catch_all_trailing_slash: bool,
    head_can_use_get: bool,
    redirect_behavior: RedirectBehavior,
    path_source: PathSource,
    not_found: HandlerFunc,
    method_not_allowed: HandlerFunc,
    error_handler: Option<ErrorHandler>,
}

impl RouterConfig {
    /// Creates a configuration builder with the defaults.
    #[must_use]
    pub fn builder() -> RouterConfigBuilder {
        RouterConfigBuilder::new()
    }

    /// Whether unmatched paths are retried with the trailing slash
    /// toggled. Defaults to true.
    #[must_use]
    pub fn redirect_trailing_slash(&self) -> bool {
        self.redirect_trailing_slash
    }

    /// Whether unmatched paths are retried after lexical cleaning.
    /// Defaults to true.
    #[must_use]
    pub fn redirect_clean_path(&self) -> bool {
        self.redirect_clean_path
    }

    /// Whether the trailing-slash probe may redirect onto a catch-all
    /// route. Defaults to false.
    #[must_use]
    pub fn redirect_catch_all_trailing_slash(&self) -> bool {
        self.redirect_catch_all_trailing_slash
    }

    /// Whether a HEAD request without a HEAD slot uses the GET handler.
    /// Defaults to true.
    #[must_use]
    pub fn head_can_use_get(&self) -> bool {
        self.head_can_use_get
    }

    /// The redirect status policy.
    #[must_use]
    pub fn redirect_behavior(&self) -> RedirectBehavior {
        self.redirect_behavior
    }

    /// The path source for matching.
    #[must_use]
    pub fn path_source(&self) -> PathSource {
        self.path_source
    }

    /// The handler invoked when no route matches.
    #[must_use]
    pub fn not_found_handler(&self) -> HandlerFunc {
        self.not_found.clone()
    }

    /// The handler invoked when a route matches without the request verb.
    #[must_use]
    pub fn method_not_allowed_handler(&self) -> HandlerFunc {
        self.method_not_allowed.clone()
    }

    /// The configured error-rendering hook, if any.
    #[must_use]
    pub fn error_handler(&self) -> Option<&ErrorHandler> {
        self.error_handler.as_ref()
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn default_not_found() -> HandlerFunc {
    handler(|w, _req| {
        w.set_status(StatusCode::NOT_FOUND);
        w.write(b"404 page not found\n");
        Ok(())
    })
}

fn default_method_not_allowed() -> HandlerFunc {
    handler(|w, _req| {
        w.set_status(StatusCode::METHOD_NOT_ALLOWED);
        Ok(())
    })
}

/// Builder for [`RouterConfig`].
#[derive(Clone)]
pub struct RouterConfigBuilder {
    config: RouterConfig,
}

impl RouterConfigBuilder {
    /// Creates a builder holding the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RouterConfig {
                redirect_trailing_slash: true,
                redirect_clean_path: true,
                redirect_catch_all_trailing_slash: false,
                head_can_use_get: true,
                redirect_behavior: RedirectBehavior::default(),
                path_source: PathSource::default(),
                not_found: default_not_found(),
                method_not_allowed: default_method_not_allowed(),
                error_handler: None,
            },
        }
    }

    /// Enables or disables trailing-slash redirects.
    #[must_use]
    pub fn redirect_trailing_slash(mut self, on: bool) -> Self {
        self.config.redirect_trailing_slash = on;
        self
    }

    /// Enables or disables clean-path redirects.
    #[must_use]
    pub fn redirect_clean_path(mut self, on: bool) -> Self {
        self.config.redirect_clean_path = on;
        self
    }

    /// Lets the trailing-slash probe redirect onto catch-all routes.
    #[must_use]
    pub fn redirect_catch_all_trailing_slash(mut self, on: bool) -> Self {
        self.config.redirect_catch_all_trailing_slash = on;
        self
    }

    /// Enables or disables the HEAD-to-GET fallback.
    #[must_use]
    pub fn head_can_use_get(mut self, on: bool) -> Self {
        self.config.head_can_use_get = on;
        self
    }

    /// Sets the redirect status policy.
    #[must_use]
    pub fn redirect_behavior(mut self, behavior: RedirectBehavior) -> Self {
        self.config.redirect_behavior = behavior;
        self
    }

    /// Sets the path source for matching.
    #[must_use]
    pub fn path_source(mut self, source: PathSource) -> Self {
        self.config.path_source = source;
        self
    }

    /// Replaces the not-found handler.
    #[must_use]
    pub fn not_found_handler(mut self, handler: HandlerFunc) -> Self {
        self.config.not_found = handler;
        self
    }

    /// Replaces the method-not-allowed handler.
    ///
    /// Routes compose this handler with their group's middleware stack at
    /// registration time, so it must be set before routes are added.
    #[must_use]
    pub fn method_not_allowed_handler(mut self, handler: HandlerFunc) -> Self {
        self.config.method_not_allowed = handler;
        self
    }

    /// Installs an error-rendering hook. When set, handler errors are
    /// passed to it and the serve call reports success to the host.
    #[must_use]
    pub fn error_handler(mut self, handler: ErrorHandler) -> Self {
        self.config.error_handler = Some(handler);
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> RouterConfig {
        self.config
    }
}

impl Default for RouterConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
