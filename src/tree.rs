//! The tree document.
//!
//! A [`ValTree`] owns every node of one document in a generational arena.
//! Nodes point at each other with [`NodeId`]s: a parent keeps an ordered map
//! of child ids and each child keeps the id of its parent, so the parent link
//! never owns anything. Removing a subtree frees its slots, and any id still
//! held for a removed node simply stops resolving.
//!
//! Reading goes through [`NodeRef`], writing through [`NodeMut`]. The most
//! common operations are also available directly on the tree, where they act
//! on the root.
//!
//! ```rust
//! use valtree::ValTree;
//!
//! let mut tree = ValTree::new();
//! tree.add_child("orc.grunt.health", Some("100"));
//! tree.add_child_value("orc.wizard.health", &50).unwrap();
//!
//! assert_eq!(tree.query_for_integer("orc.grunt.health").unwrap(), Some(100));
//! assert!(tree.query("orc.grunt").unwrap().is_null());
//! assert_eq!(tree.to_string(), "orc\n grunt\n  health 100\n wizard\n  health 50\n");
//! ```

use crate::converter::{ConverterRegistry, ValueConverter};
use crate::error::Result;
use crate::map::ChildMap;
use crate::node::{Children, NodeMut, NodeRef};
use generational_arena::{Arena, Index};
use std::cell::Cell;
use std::sync::Arc;

/// Identifies a node within the [`ValTree`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) Index);

/// Storage for a single node.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub(crate) key: Option<String>,
    pub(crate) value: Option<String>,
    pub(crate) children: ChildMap,
    pub(crate) parent: Option<NodeId>,
    pub(crate) int_cache: Cell<Option<i32>>,
    pub(crate) float_cache: Cell<Option<f32>>,
}

impl Node {
    fn new(key: String, value: Option<String>, parent: NodeId) -> Self {
        Node {
            key: Some(key),
            value,
            parent: Some(parent),
            ..Default::default()
        }
    }

    /// Replaces the raw text; every typed cache goes stale with it.
    pub(crate) fn set_raw(&mut self, value: Option<String>) {
        self.value = value;
        self.int_cache.set(None);
        self.float_cache.set(None);
    }
}

/// A parsed or programmatically built key/value tree.
///
/// The tree owns its nodes and the [`ConverterRegistry`] used by the typed
/// accessors. The root node has no key and is never written out; its children
/// are the top level entries of the document.
#[derive(Debug, Clone)]
pub struct ValTree {
    pub(crate) arena: Arena<Node>,
    root: NodeId,
    registry: Arc<ConverterRegistry>,
}

impl ValTree {
    /// Creates an empty tree with the standard converters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(Arc::new(ConverterRegistry::new()))
    }

    /// Creates an empty tree that uses `registry` for typed access.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use valtree::converter::ConverterRegistry;
    /// use valtree::ValTree;
    ///
    /// let shared = Arc::new(ConverterRegistry::new());
    /// let first = ValTree::with_registry(Arc::clone(&shared));
    /// let second = ValTree::with_registry(shared);
    /// assert_eq!(first, second);
    /// ```
    #[must_use]
    pub fn with_registry(registry: Arc<ConverterRegistry>) -> Self {
        let mut arena = Arena::new();
        let root = NodeId(arena.insert(Node::default()));
        ValTree {
            arena,
            root,
            registry,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    /// A handle to this tree's registry, for sharing with other trees.
    #[must_use]
    pub fn shared_registry(&self) -> Arc<ConverterRegistry> {
        Arc::clone(&self.registry)
    }

    /// Registers a converter on this tree only.
    ///
    /// A registry shared with other trees is copied first, so they keep
    /// seeing the converters they had. Cached `i32` / `f32` values are
    /// dropped, so the next typed read goes through the new converter.
    pub fn register_converter<C: ValueConverter>(&mut self, converter: C) -> &mut Self {
        Arc::make_mut(&mut self.registry).register(converter);
        for (_, node) in self.arena.iter() {
            node.int_cache.set(None);
            node.float_cache.set(None);
        }
        self
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn root_ref(&self) -> NodeRef<'_> {
        NodeRef::new(self, self.root, &self.arena[self.root.0])
    }

    pub fn root_mut(&mut self) -> NodeMut<'_> {
        let root = self.root;
        NodeMut::new(self, root)
    }

    /// Looks up a node by id; `None` once the node has been removed.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.arena
            .get(id.0)
            .map(|node| NodeRef::new(self, id, node))
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<NodeMut<'_>> {
        if self.arena.contains(id.0) {
            Some(NodeMut::new(self, id))
        } else {
            None
        }
    }

    /// Total number of live nodes, the root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of top level entries.
    #[must_use]
    pub fn size(&self) -> usize {
        self.root_ref().size()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    #[must_use]
    pub fn child(&self, key: &str) -> Option<NodeRef<'_>> {
        self.root_ref().child(key)
    }

    pub fn children(&self) -> Children<'_> {
        self.root_ref().children()
    }

    /// Resolves a dot separated path from the root.
    #[must_use]
    pub fn query(&self, path: &str) -> Option<NodeRef<'_>> {
        self.root_ref().query(path)
    }

    pub fn query_mut(&mut self, path: &str) -> Option<NodeMut<'_>> {
        self.root_mut().query_mut(path)
    }

    #[must_use]
    pub fn query_for_string(&self, path: &str) -> Option<&str> {
        self.root_ref().query_for_string(path)
    }

    /// # Errors
    ///
    /// Fails when the value at `path` is not an `i32`.
    pub fn query_for_integer(&self, path: &str) -> Result<Option<i32>> {
        self.root_ref().query_for_integer(path)
    }

    /// # Errors
    ///
    /// Fails when the value at `path` is not an `f32`.
    pub fn query_for_float(&self, path: &str) -> Result<Option<f32>> {
        self.root_ref().query_for_float(path)
    }

    /// # Errors
    ///
    /// Fails when no converter is registered for `T` or the value does not convert.
    pub fn query_for<T: 'static>(&self, path: &str) -> Result<Option<T>> {
        self.root_ref().query_for(path)
    }

    /// Upserts the node at `path` below the root. See [`NodeMut::add_child`].
    pub fn add_child(&mut self, path: &str, value: Option<&str>) -> Option<NodeId> {
        self.root_mut().add_child(path, value)
    }

    /// # Errors
    ///
    /// Fails when no converter is registered for `T`.
    pub fn add_child_value<T: 'static>(&mut self, path: &str, value: &T) -> Result<Option<NodeId>> {
        self.root_mut().add_child_value(path, value)
    }

    pub fn insert_child(&mut self, key: &str, value: Option<&str>) -> Option<NodeId> {
        self.root_mut().insert_child(key, value)
    }

    /// Drops every node and resets the root.
    pub fn clear(&mut self) {
        self.reset(self.root);
    }

    /// Wipes key, value and caches of `id` and frees its whole subtree.
    ///
    /// The node itself stays where it is in its parent's map.
    pub(crate) fn reset(&mut self, id: NodeId) {
        let node = &mut self.arena[id.0];
        node.key = None;
        node.set_raw(None);
        let children = std::mem::take(&mut node.children);
        for (_, child) in children {
            self.remove_subtree(child);
        }
    }

    /// Creates a node under `parent`, evicting any sibling stored under `key`.
    pub(crate) fn attach(&mut self, parent: NodeId, key: &str, value: Option<String>) -> NodeId {
        let id = NodeId(self.arena.insert(Node::new(key.to_string(), value, parent)));
        if let Some(evicted) = self.arena[parent.0].children.insert(key.to_string(), id) {
            self.remove_subtree(evicted);
        }
        id
    }

    /// Walks `path` below `start`, creating missing segments.
    pub(crate) fn add_path(
        &mut self,
        start: NodeId,
        path: &str,
        value: Option<&str>,
    ) -> Option<NodeId> {
        let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
        let last = segments.len().checked_sub(1)?;

        let mut current = start;
        for (position, segment) in segments.into_iter().enumerate() {
            current = match self.arena[current.0].children.get(segment) {
                Some(existing) => {
                    if position == last {
                        self.arena[existing.0].set_raw(value.map(str::to_string));
                    }
                    existing
                }
                None => {
                    // New segments get the value only when the whole path ends with their key.
                    let assigned = if path.ends_with(segment) {
                        value.map(str::to_string)
                    } else {
                        None
                    };
                    self.attach(current, segment, assigned)
                }
            };
        }
        Some(current)
    }

    /// Re-keys `id`, moving it to the end of its parent's order or into the
    /// slot of the sibling it evicts.
    pub(crate) fn rename(&mut self, id: NodeId, key: &str) {
        if let Some(parent) = self.arena[id.0].parent {
            let siblings = &mut self.arena[parent.0].children;
            siblings.remove_id(id);
            if let Some(evicted) = siblings.insert(key.to_string(), id) {
                self.remove_subtree(evicted);
            }
        }
        self.arena[id.0].key = Some(key.to_string());
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.arena[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.arena[id.0]
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.arena.remove(next.0) {
                pending.extend(node.children.ids().copied());
            }
        }
    }
}

impl Default for ValTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ValTree {
    /// Trees are equal when their keys, values and shapes match; registries are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.root_ref() == other.root_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_child_creates_blank_intermediates() {
        let mut tree = ValTree::new();
        tree.add_child("a.b.c", Some("value"));

        assert!(tree.query("a").unwrap().is_null());
        assert!(tree.query("a.b").unwrap().is_null());
        assert_eq!(tree.query_for_string("a.b.c"), Some("value"));
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_add_child_keeps_existing_intermediate_values() {
        let mut tree = ValTree::new();
        tree.add_child("k1", Some("v1"));
        tree.add_child("k1.k2", Some("v2"));

        assert_eq!(tree.query_for_string("k1"), Some("v1"));
        assert_eq!(tree.query_for_string("k1.k2"), Some("v2"));
    }

    #[test]
    fn test_add_child_overwrites_final_segment() {
        let mut tree = ValTree::new();
        let first = tree.add_child("k", Some("v1"));
        let second = tree.add_child("k", Some("v2"));

        assert_eq!(first, second);
        assert_eq!(tree.query_for_string("k"), Some("v2"));
        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn test_add_child_suffix_rule_for_new_segments() {
        let mut tree = ValTree::new();
        tree.add_child("a.a", Some("x"));

        // "a.a" ends with "a", so the freshly created parent also gets the value
        assert_eq!(tree.query_for_string("a"), Some("x"));
        assert_eq!(tree.query_for_string("a.a"), Some("x"));
    }

    #[test]
    fn test_add_child_skips_empty_segments() {
        let mut tree = ValTree::new();
        assert!(tree.add_child("", Some("x")).is_none());
        assert!(tree.add_child("...", Some("x")).is_none());

        tree.add_child("a..b", Some("1"));
        assert_eq!(tree.query_for_string("a.b"), Some("1"));
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn test_attach_evicts_replaced_subtree() {
        let mut tree = ValTree::new();
        tree.add_child("k.deep.deeper", Some("1"));
        assert_eq!(tree.node_count(), 4);

        let old = tree.query("k.deep").unwrap().id();
        tree.insert_child("k", Some("fresh"));

        assert_eq!(tree.node_count(), 2);
        assert!(tree.get(old).is_none());
        assert_eq!(tree.query_for_string("k"), Some("fresh"));
    }

    #[test]
    fn test_clear_frees_all_nodes() {
        let mut tree = ValTree::new();
        tree.add_child("a.b", Some("1"));
        tree.add_child("c", Some("2"));
        tree.clear();

        assert_eq!(tree.node_count(), 1);
        assert!(tree.is_empty());
        assert!(tree.root_ref().key().is_none());
        assert!(tree.root_ref().is_null());
    }

    #[test]
    fn test_rename_moves_to_end_and_evicts_sibling() {
        let mut tree = ValTree::new();
        tree.add_child("a", Some("1"));
        tree.add_child("b", Some("2"));
        tree.add_child("c", Some("3"));

        let a = tree.child("a").unwrap().id();
        tree.rename(a, "c");

        let keys: Vec<_> = tree.children().filter_map(|n| n.key()).collect();
        assert_eq!(keys, vec!["b", "c"]);
        assert_eq!(tree.query_for_string("c"), Some("1"));
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn test_isolated_registries() {
        use crate::converter::{ConvertResult, ValueConverter};

        struct Loud;
        impl ValueConverter for Loud {
            type Value = String;
            fn from_text(&self, text: &str) -> ConvertResult<String> {
                Ok(text.to_uppercase())
            }
            fn to_text(&self, value: &String) -> String {
                value.clone()
            }
        }

        let mut quiet = ValTree::new();
        quiet.add_child("k", Some("hey"));
        let mut loud = quiet.clone();
        loud.register_converter(Loud);

        assert_eq!(quiet.query_for::<String>("k").unwrap().as_deref(), Some("hey"));
        assert_eq!(loud.query_for::<String>("k").unwrap().as_deref(), Some("HEY"));
    }
}
