//! Per-verb handler slots.
//!
//! Every terminal node carries a [`MethodMap`]: a fixed struct with one
//! optional slot per supported verb plus a shared not-allowed slot. The
//! field-per-verb layout keeps method dispatch a branch on the method
//! constant rather than a hash lookup.

use http::Method;

use crate::pattern::ParamNames;

/// A payload registered for one (route, verb) pair, together with the
/// parameter names captured at registration.
///
/// Two verbs at the same node may carry different names for the same
/// positions (e.g. `GET /:foo` and `HEAD /:bar`); the resolver always uses
/// the names of the slot that actually matched.
#[derive(Debug, Clone)]
pub struct RouteSlot<T> {
    /// The registered payload (a composed handler, an operation id, ...).
    pub value: T,
    params: ParamNames,
}

impl<T> RouteSlot<T> {
    /// Creates a slot from a payload and its captured parameter names.
    #[must_use]
    pub fn new(value: T, params: ParamNames) -> Self {
        Self { value, params }
    }

    /// Returns the parameter names captured by this slot's pattern.
    #[must_use]
    pub fn param_names(&self) -> &ParamNames {
        &self.params
    }
}

/// Fixed-shape table mapping the supported verbs to their slots.
#[derive(Debug, Clone)]
pub(crate) struct MethodMap<T> {
    get: Option<RouteSlot<T>>,
    post: Option<RouteSlot<T>>,
    put: Option<RouteSlot<T>>,
    delete: Option<RouteSlot<T>>,
    head: Option<RouteSlot<T>>,
    options: Option<RouteSlot<T>>,
    patch: Option<RouteSlot<T>>,
    pub(crate) not_allowed: Option<RouteSlot<T>>,
}

impl<T> Default for MethodMap<T> {
    fn default() -> Self {
        Self {
            get: None,
            post: None,
            put: None,
            delete: None,
            head: None,
            options: None,
            patch: None,
            not_allowed: None,
        }
    }
}

impl<T> MethodMap<T> {
    /// Returns the slot for `method`, or `None` for unsupported verbs.
    pub(crate) fn slot(&self, method: &Method) -> Option<&RouteSlot<T>> {
        match *method {
            Method::GET => self.get.as_ref(),
            Method::POST => self.post.as_ref(),
            Method::PUT => self.put.as_ref(),
            Method::DELETE => self.delete.as_ref(),
            Method::HEAD => self.head.as_ref(),
            Method::OPTIONS => self.options.as_ref(),
            Method::PATCH => self.patch.as_ref(),
            _ => None,
        }
    }

    /// Returns the mutable slot for `method`, or `None` for unsupported
    /// verbs.
    pub(crate) fn slot_mut(&mut self, method: &Method) -> Option<&mut Option<RouteSlot<T>>> {
        match *method {
            Method::GET => Some(&mut self.get),
            Method::POST => Some(&mut self.post),
            Method::PUT => Some(&mut self.put),
            Method::DELETE => Some(&mut self.delete),
            Method::HEAD => Some(&mut self.head),
            Method::OPTIONS => Some(&mut self.options),
            Method::PATCH => Some(&mut self.patch),
            _ => None,
        }
    }

    /// Lists the verbs that have a registered slot, in a fixed order.
    pub(crate) fn allowed_methods(&self) -> Vec<Method> {
        let mut methods = Vec::with_capacity(7);
        if self.get.is_some() {
            methods.push(Method::GET);
        }
        if self.post.is_some() {
            methods.push(Method::POST);
        }
        if self.put.is_some() {
            methods.push(Method::PUT);
        }
        if self.delete.is_some() {
            methods.push(Method::DELETE);
        }
        if self.head.is_some() {
            methods.push(Method::HEAD);
        }
        if self.options.is_some() {
            methods.push(Method::OPTIONS);
        }
        if self.patch.is_some() {
            methods.push(Method::PATCH);
        }
        methods
    }
}
