//! The response-writer interface and an in-memory implementation.
//!
//! The router renders nothing itself beyond status, headers, and body
//! bytes, so this is the entire surface it needs from the host.

use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use http::StatusCode;
use serde::Serialize;

use crate::handler::HandlerError;

/// The write side of a response, as seen by the router and handlers.
pub trait ResponseWriter {
    /// Sets the response status code.
    fn set_status(&mut self, status: StatusCode);

    /// Sets a response header, replacing any previous value.
    fn insert_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Appends bytes to the response body.
    fn write(&mut self, bytes: &[u8]);
}

/// An in-memory response recorder.
///
/// Embedding hosts adapt their own response types to [`ResponseWriter`];
/// this implementation backs the test suite and simple embeddings.
///
/// # Example
///
/// ```rust
/// use http::StatusCode;
/// use waypoint::{Response, ResponseWriter};
///
/// let mut response = Response::new();
/// response.set_status(StatusCode::CREATED);
/// response.write(b"created");
///
/// assert_eq!(response.status(), StatusCode::CREATED);
/// assert_eq!(response.body(), b"created");
/// ```
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    /// Creates an empty 200 response.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    /// The recorded status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The recorded headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A recorded header value as a string, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The recorded body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The recorded body, lossily decoded as UTF-8.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseWriter for Response {
    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    fn write(&mut self, bytes: &[u8]) {
        self.body.extend_from_slice(bytes);
    }
}

/// Serializes `value` as JSON into the response body and sets the
/// `Content-Type` header.
///
/// # Errors
///
/// Returns a [`HandlerError`] when serialization fails.
///
/// # Example
///
/// ```rust
/// use waypoint::{json, Response};
///
/// let mut response = Response::new();
/// json(&mut response, &serde_json::json!({ "ok": true })).unwrap();
///
/// assert_eq!(response.header("content-type"), Some("application/json"));
/// assert_eq!(response.body(), b"{\"ok\":true}");
/// ```
pub fn json<T: Serialize>(w: &mut dyn ResponseWriter, value: &T) -> Result<(), HandlerError> {
    let body = serde_json::to_vec(value)
        .map_err(|err| HandlerError::message(format!("JSON encoding error: {err}")))?;
    w.insert_header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    w.write(&body);
    Ok(())
}
