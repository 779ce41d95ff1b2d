//! Route tree construction and lookup.
//!
//! Insertion splits static labels on common prefixes so that sibling
//! children never share a first byte; lookup descends with a first-byte
//! indexed jump per node, preferring static children over the named
//! wildcard over the catch-all. A structural match that lacks a handler
//! for the request method is remembered and reported with an empty slot,
//! which is what lets the caller distinguish 405 from 404.

use http::Method;

use crate::error::InsertError;
use crate::method::{MethodMap, RouteSlot};
use crate::node::{Node, NodeId, ROOT};
use crate::params::Params;
use crate::pattern::{split_route, ParamNames, Part};

/// A radix tree mapping (method, path) to per-route payloads.
///
/// The tree is generic over the payload `T`: the embedding router stores
/// composed handlers, tests store plain ids. All structure is immutable
/// between registrations; lookups never allocate.
///
/// # Example
///
/// ```rust
/// use http::Method;
/// use waypoint_tree::{RouteSlot, Tree};
///
/// let mut tree = Tree::new();
/// let (node, params) = tree.add_route("/users/:id").unwrap();
/// tree.set_handler(node, &Method::GET, "/users/:id", RouteSlot::new(7u32, params))
///     .unwrap();
///
/// let m = tree.find(&Method::GET, "/users/42").unwrap();
/// let slot = m.slot().unwrap();
/// assert_eq!(slot.value, 7);
/// assert_eq!(m.params(slot, "/users/42").get("id"), Some("42"));
/// ```
#[derive(Debug, Clone)]
pub struct Tree<T> {
    nodes: Vec<Node>,
    maps: Vec<Option<MethodMap<T>>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("/")],
            maps: vec![None],
        }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        self.maps.push(None);
        id
    }

    /// Adds `route` to the tree, creating nodes as needed.
    ///
    /// Returns the terminal node and the captured parameter names. The
    /// terminal node keeps the first route spelling that reached it.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::InvalidRoute`] when the pattern is malformed.
    pub fn add_route(&mut self, route: &str) -> Result<(NodeId, ParamNames), InsertError> {
        let (parts, params) = split_route(route)?;

        let mut curr = ROOT;
        for part in &parts {
            curr = match part {
                Part::CatchAll => {
                    self.nodes[curr as usize].is_catch_all = true;
                    curr
                }
                Part::Param => self.colon_child(curr),
                Part::Static(label) => self.add_part(curr, label),
            };
        }

        if self.nodes[curr as usize].route.is_empty() {
            self.nodes[curr as usize].route = route.to_owned();
        }
        self.index_nodes(ROOT);

        Ok((curr, params))
    }

    fn colon_child(&mut self, parent: NodeId) -> NodeId {
        if let Some(colon) = self.nodes[parent as usize].colon {
            return colon;
        }
        let colon = self.alloc(Node::new(":"));
        self.nodes[parent as usize].colon = Some(colon);
        colon
    }

    /// Inserts one static label under `parent`, splitting on the common
    /// prefix with an existing child when necessary.
    fn add_part(&mut self, parent: NodeId, part: &str) -> NodeId {
        let first = part.as_bytes()[0];
        let child_count = self.nodes[parent as usize].children.len();

        for pos in 0..child_count {
            let child = self.nodes[parent as usize].children[pos];
            if self.nodes[child as usize].first_byte() != first {
                continue;
            }

            let (common, child_len) = {
                let child_part = self.nodes[child as usize].part.as_bytes();
                let part_bytes = part.as_bytes();
                let mut i = 0;
                while i < child_part.len() && i < part_bytes.len() && child_part[i] == part_bytes[i]
                {
                    i += 1;
                }
                (i, child_part.len())
            };

            if common < child_len && common < part.len() {
                // The labels diverge: a structural node takes the shared
                // prefix, the old child and the new label become siblings.
                let child_tail = self.nodes[child as usize].part[common..].to_owned();
                self.nodes[child as usize].part = child_tail;
                let leaf = self.alloc(Node::new(&part[common..]));
                let mid = self.alloc(Node::new(&part[..common]));
                self.nodes[mid as usize].children.push(child);
                self.nodes[mid as usize].children.push(leaf);
                self.nodes[parent as usize].children[pos] = mid;
                return leaf;
            }

            if common == child_len && common == part.len() {
                return child;
            }

            if common == child_len {
                // The child's label is a proper prefix: consume it and
                // recurse with the remainder.
                return self.add_part(child, &part[common..]);
            }

            // The new label is a proper prefix of the child's: the new node
            // takes the child's place and adopts it.
            let child_tail = self.nodes[child as usize].part[common..].to_owned();
            self.nodes[child as usize].part = child_tail;
            let mid = self.alloc(Node::new(part));
            self.nodes[mid as usize].children.push(child);
            self.nodes[parent as usize].children[pos] = mid;
            return mid;
        }

        let leaf = self.alloc(Node::new(part));
        self.nodes[parent as usize].children.push(leaf);
        leaf
    }

    /// Re-sorts and re-indexes the subtree rooted at `id`, refreshing
    /// parent backlinks along the way.
    fn index_nodes(&mut self, id: NodeId) {
        let mut children = std::mem::take(&mut self.nodes[id as usize].children);
        if !children.is_empty() {
            children.sort_by_key(|&c| self.nodes[c as usize].first_byte());
            let first_bytes: Vec<u8> = children
                .iter()
                .map(|&c| self.nodes[c as usize].first_byte())
                .collect();
            self.nodes[id as usize].index.rebuild(&first_bytes);
        }
        for &child in &children {
            self.nodes[child as usize].parent = Some(id);
            self.index_nodes(child);
        }
        self.nodes[id as usize].children = children;

        if let Some(colon) = self.nodes[id as usize].colon {
            self.nodes[colon as usize].parent = Some(id);
            self.index_nodes(colon);
        }
    }

    /// Registers `slot` for `method` at `node`.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::Conflict`] when the (node, method) pair is
    /// already taken, and [`InsertError::InvalidRoute`] for a verb outside
    /// the supported set.
    pub fn set_handler(
        &mut self,
        node: NodeId,
        method: &Method,
        route: &str,
        slot: RouteSlot<T>,
    ) -> Result<(), InsertError> {
        let existing = self.nodes[node as usize].route.clone();
        let map = self.maps[node as usize].get_or_insert_with(MethodMap::default);
        let entry = map.slot_mut(method).ok_or_else(|| InsertError::InvalidRoute {
            route: route.to_owned(),
            reason: format!("unsupported HTTP method {method}"),
        })?;
        if entry.is_some() {
            return Err(InsertError::Conflict {
                existing,
                route: route.to_owned(),
                method: method.clone(),
            });
        }
        *entry = Some(slot);
        Ok(())
    }

    /// Installs the shared not-allowed slot at `node` unless one exists.
    pub fn set_not_allowed(&mut self, node: NodeId, slot: RouteSlot<T>) {
        let map = self.maps[node as usize].get_or_insert_with(MethodMap::default);
        if map.not_allowed.is_none() {
            map.not_allowed = Some(slot);
        }
    }

    /// Returns true when `node` already carries a not-allowed slot.
    #[must_use]
    pub fn has_not_allowed(&self, node: NodeId) -> bool {
        self.maps[node as usize]
            .as_ref()
            .is_some_and(|m| m.not_allowed.is_some())
    }

    /// Looks up `path` for `method`.
    ///
    /// Returns `None` when no registered route matches the path at all.
    /// Returns a [`TreeMatch`] with an empty slot when a route exists but
    /// has no handler for `method` (the 405 case).
    #[must_use]
    pub fn find<'t>(&'t self, method: &Method, path: &str) -> Option<TreeMatch<'t, T>> {
        if !path.starts_with('/') {
            return None;
        }
        let rest = &path[1..];
        if rest.is_empty() {
            return self.maps[ROOT as usize].as_ref().map(|map| TreeMatch {
                tree: self,
                node: ROOT,
                slot: map.slot(method),
                wildcard_tail: 0,
            });
        }
        let (node, slot, wildcard_tail) = self.search(ROOT, method, rest);
        node.map(|node| TreeMatch {
            tree: self,
            node,
            slot,
            wildcard_tail,
        })
    }

    /// One step of the recursive descent.
    ///
    /// Returns `(matched node, matched slot, wildcard tail length)`. The
    /// node is reported without a slot when the subtree matched the path
    /// structurally but had no handler for the method.
    fn search<'t>(
        &'t self,
        node: NodeId,
        method: &Method,
        path: &str,
    ) -> (Option<NodeId>, Option<&'t RouteSlot<T>>, usize) {
        let mut found: Option<NodeId> = None;
        let n = &self.nodes[node as usize];

        if let Some(pos) = n.index.lookup(path.as_bytes()[0]) {
            let child = n.children[pos];
            let child_part = self.nodes[child as usize].part.as_str();
            if child_part == path {
                if let Some(map) = self.maps[child as usize].as_ref() {
                    if let Some(slot) = map.slot(method) {
                        return (Some(child), Some(slot), 0);
                    }
                    found = Some(child);
                }
            } else if let Some(remainder) = path.strip_prefix(child_part) {
                let (deep, slot, tail) = self.search(child, method, remainder);
                if slot.is_some() {
                    return (deep, slot, tail);
                }
                if deep.is_some() {
                    found = deep;
                }
            }
        }

        if let Some(colon) = n.colon {
            match path.find('/') {
                // An empty segment never matches a parameter.
                Some(0) => {}
                Some(i) => {
                    let (deep, slot, tail) = self.search(colon, method, &path[i..]);
                    if slot.is_some() {
                        return (deep, slot, tail);
                    }
                }
                None => {
                    if let Some(map) = self.maps[colon as usize].as_ref() {
                        if let Some(slot) = map.slot(method) {
                            return (Some(colon), Some(slot), 0);
                        }
                        if found.is_none() {
                            found = Some(colon);
                        }
                    }
                }
            }
        }

        if n.is_catch_all {
            if let Some(map) = self.maps[node as usize].as_ref() {
                if let Some(slot) = map.slot(method) {
                    return (Some(node), Some(slot), path.len());
                }
                if found.is_none() {
                    found = Some(node);
                }
            }
        }

        (found, None, 0)
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn map(&self, node: NodeId) -> Option<&MethodMap<T>> {
        self.maps[node as usize].as_ref()
    }
}

/// The outcome of a successful structural match.
#[derive(Debug, Clone, Copy)]
pub struct TreeMatch<'t, T> {
    tree: &'t Tree<T>,
    node: NodeId,
    slot: Option<&'t RouteSlot<T>>,
    wildcard_tail: usize,
}

impl<'t, T> TreeMatch<'t, T> {
    /// The slot matched for the request method, if any. `None` means the
    /// route exists but not for this verb.
    #[must_use]
    pub fn slot(&self) -> Option<&'t RouteSlot<T>> {
        self.slot
    }

    /// The not-allowed slot installed at the matched node, if any.
    #[must_use]
    pub fn not_allowed(&self) -> Option<&'t RouteSlot<T>> {
        self.tree.map(self.node)?.not_allowed.as_ref()
    }

    /// The registered route pattern that owns the matched node.
    #[must_use]
    pub fn route(&self) -> &'t str {
        &self.tree.nodes()[self.node as usize].route
    }

    /// True when the matched node is a catch-all terminus.
    #[must_use]
    pub fn is_catch_all(&self) -> bool {
        self.tree.nodes()[self.node as usize].is_catch_all
    }

    /// The verbs registered at the matched node, for an `Allow` header.
    #[must_use]
    pub fn allowed_methods(&self) -> Vec<Method> {
        self.tree
            .map(self.node)
            .map(MethodMap::allowed_methods)
            .unwrap_or_default()
    }

    /// Builds the lazy parameter view for `slot` over the request `path`.
    ///
    /// The slot is passed explicitly because the 405 path resolves
    /// parameters with the not-allowed slot's names rather than the
    /// matched method's.
    #[must_use]
    pub fn params<'a>(&self, slot: &'a RouteSlot<T>, path: &'a str) -> Params<'a>
    where
        't: 'a,
    {
        Params::new(
            self.tree.nodes(),
            self.node,
            slot.param_names(),
            path,
            self.wildcard_tail,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(tree: &mut Tree<u32>, method: Method, route: &str, value: u32) {
        let (node, params) = tree.add_route(route).unwrap();
        tree.set_handler(node, &method, route, RouteSlot::new(value, params))
            .unwrap();
    }

    fn value_of(tree: &Tree<u32>, method: &Method, path: &str) -> Option<u32> {
        tree.find(method, path)
            .and_then(|m| m.slot().map(|s| s.value))
    }

    #[test]
    fn test_static_match() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/users", 1);
        insert(&mut tree, Method::GET, "/users/active", 2);

        assert_eq!(value_of(&tree, &Method::GET, "/users"), Some(1));
        assert_eq!(value_of(&tree, &Method::GET, "/users/active"), Some(2));
        assert_eq!(value_of(&tree, &Method::GET, "/user"), None);
        assert_eq!(value_of(&tree, &Method::GET, "/users/"), None);
    }

    #[test]
    fn test_root_route() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/", 1);

        assert_eq!(value_of(&tree, &Method::GET, "/"), Some(1));
        assert_eq!(value_of(&tree, &Method::GET, "/x"), None);
    }

    #[test]
    fn test_prefix_split_keeps_both_routes() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/contact", 1);
        insert(&mut tree, Method::GET, "/contract", 2);
        insert(&mut tree, Method::GET, "/con", 3);

        assert_eq!(value_of(&tree, &Method::GET, "/contact"), Some(1));
        assert_eq!(value_of(&tree, &Method::GET, "/contract"), Some(2));
        assert_eq!(value_of(&tree, &Method::GET, "/con"), Some(3));
        assert_eq!(value_of(&tree, &Method::GET, "/cont"), None);
    }

    #[test]
    fn test_split_preserves_existing_subtree() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/static/js/app.js", 1);
        insert(&mut tree, Method::GET, "/static/css/app.css", 2);
        insert(&mut tree, Method::GET, "/st", 3);

        assert_eq!(value_of(&tree, &Method::GET, "/static/js/app.js"), Some(1));
        assert_eq!(
            value_of(&tree, &Method::GET, "/static/css/app.css"),
            Some(2)
        );
        assert_eq!(value_of(&tree, &Method::GET, "/st"), Some(3));
    }

    #[test]
    fn test_param_match() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/users/:id", 1);

        assert_eq!(value_of(&tree, &Method::GET, "/users/42"), Some(1));
        assert_eq!(value_of(&tree, &Method::GET, "/users"), None);
        assert_eq!(value_of(&tree, &Method::GET, "/users/42/posts"), None);
    }

    #[test]
    fn test_static_beats_param() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/users/current", 1);
        insert(&mut tree, Method::GET, "/users/:id", 2);

        assert_eq!(value_of(&tree, &Method::GET, "/users/current"), Some(1));
        assert_eq!(value_of(&tree, &Method::GET, "/users/123"), Some(2));
    }

    #[test]
    fn test_param_beats_catch_all() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/files/:name", 1);
        insert(&mut tree, Method::GET, "/files/*rest", 2);

        assert_eq!(value_of(&tree, &Method::GET, "/files/a"), Some(1));
        assert_eq!(value_of(&tree, &Method::GET, "/files/a/b"), Some(2));
    }

    #[test]
    fn test_empty_segment_does_not_match_param() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/:name", 1);

        assert_eq!(value_of(&tree, &Method::GET, "/x"), Some(1));
        assert_eq!(value_of(&tree, &Method::GET, "//"), None);
    }

    #[test]
    fn test_static_fallthrough_to_param_on_method_miss() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/apple/banana/cat", 1);
        insert(&mut tree, Method::POST, "/apple/banana/:abc", 2);

        assert_eq!(
            value_of(&tree, &Method::GET, "/apple/banana/cat"),
            Some(1)
        );
        assert_eq!(
            value_of(&tree, &Method::POST, "/apple/banana/cat"),
            Some(2)
        );
    }

    #[test]
    fn test_method_miss_reports_node_without_slot() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/hello", 1);

        let m = tree.find(&Method::POST, "/hello").unwrap();
        assert!(m.slot().is_none());
        assert_eq!(m.route(), "/hello");
        assert_eq!(m.allowed_methods(), vec![Method::GET]);
    }

    #[test]
    fn test_catch_all_tail_lengths() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/files/*path", 1);

        let m = tree.find(&Method::GET, "/files/a/b").unwrap();
        assert!(m.is_catch_all());
        let slot = m.slot().unwrap();
        assert_eq!(slot.value, 1);
        assert_eq!(m.params(slot, "/files/a/b").get("path"), Some("a/b"));

        // The slashed form matches the catch-all node exactly.
        let m = tree.find(&Method::GET, "/files/").unwrap();
        let slot = m.slot().unwrap();
        assert_eq!(m.params(slot, "/files/").get("path"), Some(""));

        // The unslashed form does not reach the catch-all.
        assert!(tree.find(&Method::GET, "/files").is_none());
    }

    #[test]
    fn test_root_catch_all_with_static_siblings() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/*path", 1);
        insert(&mut tree, Method::GET, "/static/*path", 2);

        let m = tree.find(&Method::GET, "/foo").unwrap();
        let slot = m.slot().unwrap();
        assert_eq!(slot.value, 1);
        assert_eq!(m.params(slot, "/foo").get("path"), Some("foo"));

        let m = tree.find(&Method::GET, "/static/x/y").unwrap();
        let slot = m.slot().unwrap();
        assert_eq!(slot.value, 2);
        assert_eq!(m.params(slot, "/static/x/y").get("path"), Some("x/y"));

        // "/static" misses the deeper catch-all and falls back to the root.
        let m = tree.find(&Method::GET, "/static").unwrap();
        let slot = m.slot().unwrap();
        assert_eq!(slot.value, 1);
        assert_eq!(m.params(slot, "/static").get("path"), Some("static"));
    }

    #[test]
    fn test_trailing_slash_routes_are_distinct() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/slash/", 1);
        insert(&mut tree, Method::GET, "/noslash", 2);

        assert_eq!(value_of(&tree, &Method::GET, "/slash/"), Some(1));
        assert_eq!(value_of(&tree, &Method::GET, "/slash"), None);
        assert_eq!(value_of(&tree, &Method::GET, "/noslash"), Some(2));
        assert_eq!(value_of(&tree, &Method::GET, "/noslash/"), None);
    }

    #[test]
    fn test_methods_are_independent() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/resource", 1);
        insert(&mut tree, Method::POST, "/resource", 2);
        insert(&mut tree, Method::DELETE, "/resource", 3);

        assert_eq!(value_of(&tree, &Method::GET, "/resource"), Some(1));
        assert_eq!(value_of(&tree, &Method::POST, "/resource"), Some(2));
        assert_eq!(value_of(&tree, &Method::DELETE, "/resource"), Some(3));
        assert!(tree
            .find(&Method::PUT, "/resource")
            .is_some_and(|m| m.slot().is_none()));
    }

    #[test]
    fn test_duplicate_registration_conflicts() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/users", 1);

        let (node, params) = tree.add_route("/users").unwrap();
        let err = tree
            .set_handler(node, &Method::GET, "/users", RouteSlot::new(2, params))
            .unwrap_err();
        assert!(matches!(err, InsertError::Conflict { .. }));
    }

    #[test]
    fn test_conflict_between_spellings() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/users/:id", 1);

        let (node, params) = tree.add_route("/users/:name").unwrap();
        let err = tree
            .set_handler(
                node,
                &Method::GET,
                "/users/:name",
                RouteSlot::new(2, params),
            )
            .unwrap_err();
        match err {
            InsertError::Conflict {
                existing, route, ..
            } => {
                assert_eq!(existing, "/users/:id");
                assert_eq!(route, "/users/:name");
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_method_is_rejected() {
        let mut tree = Tree::new();
        let (node, params) = tree.add_route("/trace").unwrap();
        let err = tree
            .set_handler(node, &Method::TRACE, "/trace", RouteSlot::new(1, params))
            .unwrap_err();
        assert!(matches!(err, InsertError::InvalidRoute { .. }));
    }

    #[test]
    fn test_first_route_spelling_wins() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/users/:id", 1);
        insert(&mut tree, Method::POST, "/users/:key", 2);

        let m = tree.find(&Method::POST, "/users/7").unwrap();
        assert_eq!(m.route(), "/users/:id");
    }

    #[test]
    fn test_deep_mixed_tree() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/", 1);
        insert(&mut tree, Method::GET, "/api/v1/users", 2);
        insert(&mut tree, Method::GET, "/api/v1/users/:id", 3);
        insert(&mut tree, Method::GET, "/api/v1/users/:id/posts/:pid", 4);
        insert(&mut tree, Method::GET, "/api/v2/assets/*blob", 5);

        assert_eq!(value_of(&tree, &Method::GET, "/"), Some(1));
        assert_eq!(value_of(&tree, &Method::GET, "/api/v1/users"), Some(2));
        assert_eq!(value_of(&tree, &Method::GET, "/api/v1/users/9"), Some(3));
        assert_eq!(
            value_of(&tree, &Method::GET, "/api/v1/users/9/posts/3"),
            Some(4)
        );
        assert_eq!(
            value_of(&tree, &Method::GET, "/api/v2/assets/img/logo.png"),
            Some(5)
        );
        assert_eq!(value_of(&tree, &Method::GET, "/api/v3"), None);
    }

    #[test]
    fn test_five_params_in_a_row() {
        let mut tree = Tree::new();
        insert(&mut tree, Method::GET, "/:a/:b/:c/:d/:e", 1);

        let m = tree.find(&Method::GET, "/1/2/3/4/5").unwrap();
        let slot = m.slot().unwrap();
        let params = m.params(slot, "/1/2/3/4/5");
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), Some("2"));
        assert_eq!(params.get("c"), Some("3"));
        assert_eq!(params.get("d"), Some("4"));
        assert_eq!(params.get("e"), Some("5"));
        assert_eq!(params.route(), "/:a/:b/:c/:d/:e");
    }

    #[test]
    fn test_literal_instantiation_matches_pattern() {
        let routes = [
            "/",
            "/users",
            "/users/:id",
            "/users/:id/posts",
            "/orgs/:org/repos/:repo",
            "/assets/*path",
        ];
        let mut tree = Tree::new();
        for (i, route) in routes.iter().enumerate() {
            insert(&mut tree, Method::GET, route, i as u32);
        }
        for (i, route) in routes.iter().enumerate() {
            let path = route.replace(":id", "x").replace(":org", "x");
            let path = path.replace(":repo", "x").replace("*path", "a/b/c");
            let m = tree.find(&Method::GET, &path).unwrap();
            assert_eq!(m.slot().map(|s| s.value), Some(i as u32), "route {route}");
            assert_eq!(m.route(), *route);
        }
    }
}
