//! Lazy path parameter resolution.
//!
//! Parameters are never materialized at match time. [`Params`] keeps a
//! borrowed view of the matched node chain and the original request path;
//! a value is carved out of the path only when a handler asks for it, by
//! walking the ancestor chain backwards and shrinking the path label by
//! label. Handlers that never read a parameter pay nothing.

use std::collections::HashMap;

use smallvec::SmallVec;
use thiserror::Error;

use crate::node::{Node, NodeId};
use crate::pattern::ParamNames;

/// Errors from the typed parameter accessors.
#[derive(Debug, Error)]
pub enum ParamError {
    /// The pattern does not capture a parameter with this name.
    #[error("param {name:?} not found")]
    NotFound {
        /// The requested parameter name.
        name: String,
    },

    /// The captured value failed to parse as the requested integer type.
    #[error("param {name:?}: {source}")]
    Parse {
        /// The requested parameter name.
        name: String,
        /// The underlying parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
}

/// One resolved parameter, as returned by [`Params::as_slice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'a> {
    /// The parameter name from the route pattern.
    pub key: &'a str,
    /// The raw bytes captured from the request path.
    pub value: &'a str,
}

/// A borrowed view over the parameters of a matched route.
///
/// Percent-encoded bytes are returned exactly as they appear in the path;
/// decoding is the caller's concern.
#[derive(Debug, Clone, Copy)]
pub struct Params<'a> {
    nodes: &'a [Node],
    node: Option<NodeId>,
    names: Option<&'a ParamNames>,
    path: &'a str,
    wildcard_tail: usize,
}

impl<'a> Params<'a> {
    pub(crate) fn new(
        nodes: &'a [Node],
        node: NodeId,
        names: &'a ParamNames,
        path: &'a str,
        wildcard_tail: usize,
    ) -> Self {
        Self {
            nodes,
            node: Some(node),
            names: Some(names),
            path,
            wildcard_tail,
        }
    }

    /// A view with no matched route, used for 404 dispatch.
    #[must_use]
    pub fn empty() -> Params<'static> {
        Params {
            nodes: &[],
            node: None,
            names: None,
            path: "",
            wildcard_tail: 0,
        }
    }

    /// Returns true when no route was matched.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.node.is_none()
    }

    /// The route pattern that matched the request, or `""`.
    #[must_use]
    pub fn route(&self) -> &'a str {
        match self.node {
            Some(id) => &self.nodes[id as usize].route,
            None => "",
        }
    }

    /// The number of parameters the matched pattern captures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.map_or(0, ParamNames::len)
    }

    /// Returns true when the matched pattern captures no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the raw value of the named parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a str> {
        let position = self.names?.position(name)?;
        self.find(position)
    }

    /// Resolves the parameter at `position` by reverse traversal.
    fn find(&self, position: usize) -> Option<&'a str> {
        let names = self.names?;
        let mut path = self.path;
        if path.is_empty() {
            return None;
        }

        let mut curr = self.node;
        let mut curr_position = names.len().checked_sub(1)?;
        if position > curr_position {
            return None;
        }

        // A catch-all occupies the highest position and is sliced off the
        // end of the path using the recorded tail length.
        let node = &self.nodes[self.node? as usize];
        if node.is_catch_all {
            if self.wildcard_tail > path.len() {
                return None;
            }
            let cut = path.len() - self.wildcard_tail;
            if curr_position == position {
                return Some(&path[cut..]);
            }
            curr_position -= 1;
            path = &path[..cut];
        }

        while let Some(id) = curr {
            let node = &self.nodes[id as usize];
            if !node.is_param() {
                let part_len = node.part.len();
                if part_len > path.len() {
                    return None;
                }
                path = &path[..path.len() - part_len];
                curr = node.parent;
                continue;
            }

            // A parameter ancestor captured the last segment of what
            // remains of the path.
            let slash = path.rfind('/')?;
            if curr_position == position {
                return Some(&path[slash + 1..]);
            }
            curr_position -= 1;
            path = &path[..slash + 1];
            curr = node.parent;
        }

        None
    }

    /// Iterates all parameters as (name, value) pairs in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        let names = self.names;
        (0..self.len()).filter_map(move |i| {
            let name = names?.get(i)?;
            let value = self.find(i)?;
            Some((name, value))
        })
    }

    /// Collects the parameters into a map.
    #[must_use]
    pub fn as_map(&self) -> HashMap<&'a str, &'a str> {
        self.iter().collect()
    }

    /// Collects the parameters into a slice in pattern order.
    #[must_use]
    pub fn as_slice(&self) -> SmallVec<[Param<'a>; 4]> {
        self.iter()
            .map(|(key, value)| Param { key, value })
            .collect()
    }

    /// Parses the named parameter as an `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::NotFound`] when the pattern does not capture
    /// `name`, or [`ParamError::Parse`] when the value is not an integer.
    pub fn int32(&self, name: &str) -> Result<i32, ParamError> {
        self.parse_int(name)
    }

    /// Parses the named parameter as an `i64`.
    ///
    /// # Errors
    ///
    /// See [`Params::int32`].
    pub fn int64(&self, name: &str) -> Result<i64, ParamError> {
        self.parse_int(name)
    }

    /// Parses the named parameter as a `u32`.
    ///
    /// # Errors
    ///
    /// See [`Params::int32`].
    pub fn uint32(&self, name: &str) -> Result<u32, ParamError> {
        self.parse_int(name)
    }

    /// Parses the named parameter as a `u64`.
    ///
    /// # Errors
    ///
    /// See [`Params::int32`].
    pub fn uint64(&self, name: &str) -> Result<u64, ParamError> {
        self.parse_int(name)
    }

    fn parse_int<F>(&self, name: &str) -> Result<F, ParamError>
    where
        F: std::str::FromStr<Err = std::num::ParseIntError>,
    {
        let value = self.get(name).ok_or_else(|| ParamError::NotFound {
            name: name.to_owned(),
        })?;
        value.parse().map_err(|source| ParamError::Parse {
            name: name.to_owned(),
            source,
        })
    }
}
