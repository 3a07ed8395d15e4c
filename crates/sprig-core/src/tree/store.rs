//! Ordered storage for one level of the tree.

use super::NodeId;

/// Ordered sequence of `(name, node)` pairs backing one level of a
/// [`CompositeTree`](super::CompositeTree).
///
/// Insertion order is preserved. Names are not required to be unique: every
/// lookup resolves to the first matching entry.
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    entries: Vec<(String, NodeId)>,
}

impl NodeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end.
    pub fn push(&mut self, name: String, id: NodeId) {
        self.entries.push((name, id));
    }

    /// First node registered under `name`.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, id)| *id)
    }

    /// Unlink the first node registered under `name`, keeping the order of
    /// the remaining entries.
    pub fn take(&mut self, name: &str) -> Option<NodeId> {
        let position = self.entries.iter().position(|(entry, _)| entry == name)?;
        Some(self.entries.remove(position).1)
    }

    /// Unlink every entry, returning the node handles in insertion order.
    pub fn take_all(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.entries)
            .into_iter()
            .map(|(_, id)| id)
            .collect()
    }

    /// Node at position `index`.
    pub fn id_at(&self, index: usize) -> Option<NodeId> {
        self.entries.get(index).map(|(_, id)| *id)
    }

    /// Name under which `id` was registered.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, entry)| *entry == id)
            .map(|(name, _)| name.as_str())
    }

    /// Iterate `(name, node)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.entries.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Iterate node handles in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.iter().map(|(_, id)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
