//! Ordered child map for tree nodes.
//!
//! [`ChildMap`] is a thin wrapper around [`IndexMap`] from key to [`NodeId`].
//! Insertion order is the order children were first added, which is also the
//! order they are written back out, so parsing and saving a document keeps its
//! layout.
//!
//! Inserting under a key that is already present replaces the entry in place
//! and hands back the displaced id so the caller can drop that subtree.

use crate::NodeId;
use indexmap::IndexMap;

/// An ordered map of child keys to node ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChildMap(IndexMap<String, NodeId>);

impl ChildMap {
    #[must_use]
    pub fn new() -> Self {
        ChildMap(IndexMap::new())
    }

    /// Inserts `id` under `key`, keeping the position of an existing entry.
    ///
    /// Returns the id that was previously stored under `key`.
    pub fn insert(&mut self, key: String, id: NodeId) -> Option<NodeId> {
        self.0.insert(key, id)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<NodeId> {
        self.0.get(key).copied()
    }

    /// The child at position `index` in insertion order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&str, NodeId)> {
        self.0
            .get_index(index)
            .map(|(key, id)| (key.as_str(), *id))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes the entry pointing at `id`, whatever key it is stored under.
    ///
    /// Later entries shift down, so the remaining order is preserved.
    pub fn remove_id(&mut self, id: NodeId) -> Option<String> {
        let position = self.0.values().position(|child| *child == id)?;
        self.0.shift_remove_index(position).map(|(key, _)| key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, NodeId> {
        self.0.keys()
    }

    /// Returns an iterator over the ids, in insertion order.
    pub fn ids(&self) -> indexmap::map::Values<'_, String, NodeId> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, NodeId> {
        self.0.iter()
    }
}

impl IntoIterator for ChildMap {
    type Item = (String, NodeId);
    type IntoIter = indexmap::map::IntoIter<String, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChildMap {
    type Item = (&'a String, &'a NodeId);
    type IntoIter = indexmap::map::Iter<'a, String, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
