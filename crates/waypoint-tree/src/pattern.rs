//! Route pattern tokenizer.
//!
//! A registered pattern is split into *parts*: runs of literal bytes, `:`
//! placeholders capturing one segment, and a terminal `*` placeholder
//! capturing the rest of the path. Consecutive literal segments collapse
//! into a single static part (with a trailing `/` when a placeholder
//! follows), which maximizes label sharing in the radix tree and lets the
//! builder detect common prefixes with one byte-by-byte comparison.

use smallvec::SmallVec;

use crate::error::InsertError;

/// One unit of a tokenized route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Part {
    /// A run of literal bytes, possibly spanning several segments.
    Static(String),
    /// A `:name` segment capturing exactly one non-empty path segment.
    Param,
    /// A terminal `*name` segment capturing the rest of the path.
    CatchAll,
}

/// Parameter names in the order they appear in a pattern.
///
/// The index of a name is its ordinal position, so no separate
/// name-to-position table is needed; the resolver walks the tree in
/// reverse and counts positions down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamNames(SmallVec<[String; 4]>);

impl ParamNames {
    /// Returns the ordinal position of `name`, if the pattern captures it.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|n| n == name)
    }

    /// Returns the name at ordinal position `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Returns the number of captured parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the pattern captures no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the names in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    fn push(&mut self, route: &str, name: &str) -> Result<(), InsertError> {
        if name.is_empty() {
            return Err(InsertError::invalid(route, "parameter must have a name"));
        }
        if self.0.iter().any(|n| n == name) {
            return Err(InsertError::invalid(
                route,
                format!("duplicate parameter name {name:?}"),
            ));
        }
        self.0.push(name.to_owned());
        Ok(())
    }
}

/// Accumulates literal segments until a placeholder forces a flush.
#[derive(Default)]
struct RouteParser<'a> {
    parts: SmallVec<[Part; 8]>,
    acc: Vec<&'a str>,
}

impl<'a> RouteParser<'a> {
    fn accumulate(&mut self, segment: &'a str) {
        self.acc.push(segment);
    }

    /// Flushes the accumulated literals into one static part.
    ///
    /// `with_slash` appends the separator that precedes a placeholder;
    /// `more` seeds the next run with an empty literal so it starts with
    /// the `/` that follows the placeholder.
    fn finalize(&mut self, with_slash: bool, more: bool) {
        if !self.acc.is_empty() {
            let mut part = self.acc.join("/");
            if with_slash {
                part.push('/');
            }
            if !part.is_empty() {
                self.parts.push(Part::Static(part));
            }
        }
        self.acc.clear();
        if more {
            self.acc.push("");
        }
    }
}

/// Splits a route pattern into parts and ordered parameter names.
pub(crate) fn split_route(
    route: &str,
) -> Result<(SmallVec<[Part; 8]>, ParamNames), InsertError> {
    if route.is_empty() || !route.starts_with('/') {
        return Err(InsertError::invalid(route, "must start with '/'"));
    }

    let mut parser = RouteParser::default();
    let mut names = ParamNames::default();
    if route == "/" {
        return Ok((parser.parts, names));
    }

    let segments: Vec<&str> = route[1..].split('/').collect();
    for (i, segment) in segments.iter().enumerate() {
        let more = i + 1 < segments.len();
        if segment.is_empty() {
            parser.accumulate(segment);
            continue;
        }
        match segment.as_bytes()[0] {
            b':' => {
                parser.finalize(true, more);
                parser.parts.push(Part::Param);
                names.push(route, &segment[1..])?;
            }
            b'*' => {
                if more {
                    return Err(InsertError::invalid(
                        route,
                        "catch-all must be the final segment",
                    ));
                }
                parser.finalize(true, more);
                parser.parts.push(Part::CatchAll);
                names.push(route, &segment[1..])?;
            }
            _ => parser.accumulate(segment),
        }
    }
    parser.finalize(false, false);

    Ok((parser.parts, names))
}
