//! Borrowed views of a single node.
//!
//! [`NodeRef`] is a cheap, copyable read handle; every navigation method hands
//! back further `NodeRef`s that borrow the same tree. [`NodeMut`] holds the tree
//! mutably and is consumed by the methods that move to another node, so only
//! one writer exists at a time.

use crate::error::Result;
use crate::map::ChildMap;
use crate::ser::Serializer;
use crate::tree::{Node, NodeId, ValTree};
use crate::WriteOptions;
use std::fmt;

/// A read handle to one node of a [`ValTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a ValTree,
    id: NodeId,
    node: &'a Node,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a ValTree, id: NodeId, node: &'a Node) -> Self {
        NodeRef { tree, id, node }
    }

    fn resolve(tree: &'a ValTree, id: NodeId) -> Option<Self> {
        tree.get(id)
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The tree this node belongs to.
    #[must_use]
    pub fn tree(&self) -> &'a ValTree {
        self.tree
    }

    /// The node's key; `None` for the root and for cleared nodes.
    #[must_use]
    pub fn key(&self) -> Option<&'a str> {
        self.node.key.as_deref()
    }

    /// The raw value text.
    #[must_use]
    pub fn string(&self) -> Option<&'a str> {
        self.node.value.as_deref()
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.node.value.is_none()
    }

    /// Number of direct children.
    #[must_use]
    pub fn size(&self) -> usize {
        self.node.children.len()
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.node.children.is_empty()
    }

    /// The value as an `i32`, converted once and cached until the value changes.
    ///
    /// # Errors
    ///
    /// Fails when the text is not an integer, or when the tree's registry has
    /// no `i32` converter.
    pub fn integer(&self) -> Result<Option<i32>> {
        if self.is_null() {
            return Ok(None);
        }
        if let Some(cached) = self.node.int_cache.get() {
            return Ok(Some(cached));
        }
        let value = self.value_as::<i32>()?;
        self.node.int_cache.set(value);
        Ok(value)
    }

    /// The value as an `f32`, converted once and cached until the value changes.
    ///
    /// # Errors
    ///
    /// Fails when the text is not a float, or when the tree's registry has no
    /// `f32` converter.
    pub fn float(&self) -> Result<Option<f32>> {
        if self.is_null() {
            return Ok(None);
        }
        if let Some(cached) = self.node.float_cache.get() {
            return Ok(Some(cached));
        }
        let value = self.value_as::<f32>()?;
        self.node.float_cache.set(value);
        Ok(value)
    }

    /// Converts the value with the converter registered for `T`.
    ///
    /// The converter is looked up even when the value is absent, so a missing
    /// registration is reported either way.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConverter`](crate::Error::MissingConverter) when
    /// nothing is registered for `T`, and
    /// [`Error::UnableToConvertFromText`](crate::Error::UnableToConvertFromText)
    /// when the converter rejects the text.
    pub fn value_as<T: 'static>(&self) -> Result<Option<T>> {
        self.tree.registry().convert_from_text(self.string())
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node
            .parent
            .and_then(|parent| Self::resolve(self.tree, parent))
    }

    /// The direct child stored under `key`.
    #[must_use]
    pub fn child(&self, key: &str) -> Option<NodeRef<'a>> {
        self.node
            .children
            .get(key)
            .and_then(|id| Self::resolve(self.tree, id))
    }

    /// Children in insertion order.
    pub fn children(&self) -> Children<'a> {
        Children::new(self.tree, Some(&self.node.children))
    }

    /// The parent's children, this node included. Empty for the root.
    pub fn siblings(&self) -> Children<'a> {
        match self.parent() {
            Some(parent) => parent.children(),
            None => Children::new(self.tree, None),
        }
    }

    #[must_use]
    pub fn first_child(&self) -> Option<NodeRef<'a>> {
        self.index(0)
    }

    /// The child at `position` in insertion order.
    #[must_use]
    pub fn index(&self, position: usize) -> Option<NodeRef<'a>> {
        self.node
            .children
            .get_index(position)
            .and_then(|(_, id)| Self::resolve(self.tree, id))
    }

    /// Follows a dot separated path of child keys.
    ///
    /// Keys are matched exactly, one segment per level. Empty segments are
    /// skipped, as [`NodeMut::add_child`] skips them, and a path with no
    /// segments matches nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtree::ValTree;
    ///
    /// let tree: ValTree = "orc\n grunt\n  health 100\n".parse().unwrap();
    /// let orc = tree.child("orc").unwrap();
    /// assert_eq!(orc.query("grunt.health").unwrap().string(), Some("100"));
    /// assert!(orc.query("grunt.mana").is_none());
    /// ```
    #[must_use]
    pub fn query(&self, path: &str) -> Option<NodeRef<'a>> {
        let mut segments = path.split('.').filter(|s| !s.is_empty()).peekable();
        segments.peek()?;
        segments.try_fold(*self, |current, segment| current.child(segment))
    }

    #[must_use]
    pub fn query_for_string(&self, path: &str) -> Option<&'a str> {
        self.query(path).and_then(|node| node.string())
    }

    /// # Errors
    ///
    /// Fails when the value at `path` is not an `i32`.
    pub fn query_for_integer(&self, path: &str) -> Result<Option<i32>> {
        match self.query(path) {
            Some(node) => node.integer(),
            None => Ok(None),
        }
    }

    /// # Errors
    ///
    /// Fails when the value at `path` is not an `f32`.
    pub fn query_for_float(&self, path: &str) -> Result<Option<f32>> {
        match self.query(path) {
            Some(node) => node.float(),
            None => Ok(None),
        }
    }

    /// # Errors
    ///
    /// Fails when no converter is registered for `T` or the value does not convert.
    pub fn query_for<T: 'static>(&self, path: &str) -> Result<Option<T>> {
        match self.query(path) {
            Some(node) => node.value_as(),
            None => Ok(None),
        }
    }

    pub(crate) fn child_map(&self) -> &'a ChildMap {
        &self.node.children
    }
}

impl<'a> IntoIterator for NodeRef<'a> {
    type Item = NodeRef<'a>;
    type IntoIter = Children<'a>;

    fn into_iter(self) -> Children<'a> {
        self.children()
    }
}

impl PartialEq for NodeRef<'_> {
    /// Structural equality: keys, values and children in order.
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(*self, *other)];
        while let Some((left, right)) = pending.pop() {
            if left.key() != right.key()
                || left.string() != right.string()
                || left.size() != right.size()
            {
                return false;
            }
            pending.extend(left.children().zip(right.children()));
        }
        true
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", &self.key())
            .field("value", &self.string())
            .field("children", &self.size())
            .finish()
    }
}

impl fmt::Display for NodeRef<'_> {
    /// Writes the children of this node in document form with default options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut serializer = Serializer::new(WriteOptions::default());
        serializer.serialize(*self);
        f.write_str(&serializer.into_inner())
    }
}

/// Iterator over the children of a node, in insertion order.
pub struct Children<'a> {
    tree: &'a ValTree,
    ids: Option<indexmap::map::Values<'a, String, NodeId>>,
}

impl<'a> Children<'a> {
    fn new(tree: &'a ValTree, children: Option<&'a ChildMap>) -> Self {
        Children {
            tree,
            ids: children.map(ChildMap::ids),
        }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<NodeRef<'a>> {
        let id = *self.ids.as_mut()?.next()?;
        self.tree.get(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.ids {
            Some(ids) => ids.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl fmt::Debug for Children<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Children")
            .field("remaining", &self.size_hint().0)
            .finish()
    }
}

/// A write handle to one node of a [`ValTree`].
///
/// Methods that move to another node consume the handle and return a new one
/// for the target.
pub struct NodeMut<'a> {
    tree: &'a mut ValTree,
    id: NodeId,
}

impl<'a> NodeMut<'a> {
    pub(crate) fn new(tree: &'a mut ValTree, id: NodeId) -> Self {
        NodeMut { tree, id }
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// A read view of this node for the duration of the borrow.
    #[must_use]
    pub fn to_ref(&self) -> NodeRef<'_> {
        NodeRef::new(self.tree, self.id, self.tree.node(self.id))
    }

    #[must_use]
    pub fn into_ref(self) -> NodeRef<'a> {
        let tree: &'a ValTree = self.tree;
        NodeRef::new(tree, self.id, tree.node(self.id))
    }

    /// Replaces the raw value text.
    pub fn set_string(&mut self, value: Option<&str>) {
        self.tree.node_mut(self.id).set_raw(value.map(str::to_string));
    }

    /// Replaces the value with `value` converted to text. `None` clears it.
    ///
    /// # Errors
    ///
    /// Fails when no converter is registered for `T`; the node is left unchanged.
    pub fn set_value<T: 'static>(&mut self, value: Option<&T>) -> Result<()> {
        let text = match value {
            Some(value) => Some(self.tree.registry().convert_to_text(Some(value))?),
            None => None,
        };
        self.tree.node_mut(self.id).set_raw(text);
        Ok(())
    }

    /// Re-keys this node and sets its value in one step.
    ///
    /// The node moves to the end of its parent's children under the new key.
    /// If a sibling already used that key, the sibling and its subtree are
    /// dropped and this node takes over its position. An empty `key` leaves
    /// the key alone and only sets the value, and so does any key on the
    /// root, which stays keyless.
    ///
    /// # Errors
    ///
    /// Fails when no converter is registered for `T`; the node is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtree::ValTree;
    ///
    /// let mut tree: ValTree = "a 1\nb 2\n".parse().unwrap();
    /// tree.query_mut("a").unwrap().set("c", &3).unwrap();
    /// assert_eq!(tree.to_string(), "b 2\nc 3\n");
    /// ```
    pub fn set<T: 'static>(&mut self, key: &str, value: &T) -> Result<()> {
        let text = self.tree.registry().convert_to_text(Some(value))?;
        if !key.is_empty() && self.id != self.tree.root() {
            self.tree.rename(self.id, key);
        }
        self.tree.node_mut(self.id).set_raw(Some(text));
        Ok(())
    }

    /// Upserts the node at a dot separated `path` below this node.
    ///
    /// Missing segments are created in order. The final segment always ends
    /// up holding `value`. A newly created intermediate segment gets `value`
    /// too when the whole path ends with its key, otherwise it stays blank.
    /// Existing intermediates are left untouched. Empty segments are skipped,
    /// and a path with no segments returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valtree::ValTree;
    ///
    /// let mut tree = ValTree::new();
    /// tree.add_child("key1", Some("val1"));
    /// tree.add_child("key1.key2", Some("val2"));
    /// assert_eq!(tree.to_string(), "key1 val1\n key2 val2\n");
    /// ```
    pub fn add_child(&mut self, path: &str, value: Option<&str>) -> Option<NodeId> {
        self.tree.add_path(self.id, path, value)
    }

    /// [`add_child`](Self::add_child) with a converted value.
    ///
    /// # Errors
    ///
    /// Fails when no converter is registered for `T`; nothing is created.
    pub fn add_child_value<T: 'static>(&mut self, path: &str, value: &T) -> Result<Option<NodeId>> {
        let text = self.tree.registry().convert_to_text(Some(value))?;
        Ok(self.add_child(path, Some(&text)))
    }

    /// Creates a direct child under a literal `key`, dots included.
    ///
    /// An existing child with the same key keeps its position but is replaced,
    /// subtree and all. Returns `None` for an empty key.
    pub fn insert_child(&mut self, key: &str, value: Option<&str>) -> Option<NodeId> {
        if key.is_empty() {
            return None;
        }
        Some(self.tree.attach(self.id, key, value.map(str::to_string)))
    }

    /// Drops the key, the value and every descendant of this node.
    pub fn clear(&mut self) {
        self.tree.reset(self.id);
    }

    pub fn child_mut(self, key: &str) -> Option<NodeMut<'a>> {
        let id = self.tree.node(self.id).children.get(key)?;
        Some(NodeMut::new(self.tree, id))
    }

    pub fn parent_mut(self) -> Option<NodeMut<'a>> {
        let id = self.tree.node(self.id).parent?;
        Some(NodeMut::new(self.tree, id))
    }

    /// Mutable counterpart of [`NodeRef::query`].
    pub fn query_mut(self, path: &str) -> Option<NodeMut<'a>> {
        let id = self.to_ref().query(path)?.id();
        Some(NodeMut::new(self.tree, id))
    }
}

impl fmt::Debug for NodeMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeMut").field(&self.to_ref()).finish()
    }
}
