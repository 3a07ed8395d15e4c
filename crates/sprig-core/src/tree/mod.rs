//! Composite tree: named, owned children addressed through generational handles.
//!
//! Every node lives in a slot of a single arena owned by the [`CompositeTree`].
//! A node is linked into exactly one parent's [`NodeStore`] (the root has no
//! parent), so removing a node frees its whole subtree. Parents are recorded
//! as handles, which can never dangle: a freed slot bumps its generation and
//! every outstanding handle to it stops resolving.
//!
//! Dispatch is single-level. [`CompositeTree::apply_for_each`] runs an
//! operation on a node and its *direct* children only; reaching grandchildren
//! means re-issuing the dispatch from each child (see
//! [`CompositeTree::dispatch`]) or asking for it explicitly with
//! [`CompositeTree::apply_deep`].

mod store;

pub use store::NodeStore;

use std::fmt;
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// Tree lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("No child named '{0}'")]
    NotFound(String),
}

/// Result type for tree lookups.
pub type TreeResult<T> = Result<T, TreeError>;

/// Identifier for a node in a [`CompositeTree`] (generational).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    const fn idx(self) -> usize {
        self.index as usize
    }
}

#[derive(Debug)]
struct Slot<T> {
    parent: Option<NodeId>,
    children: NodeStore,
    value: T,
}

/// Arena-backed ownership tree with string-keyed children.
///
/// ```
/// use sprig_core::tree::CompositeTree;
///
/// let mut tree = CompositeTree::new("root");
/// let root = tree.root();
/// let child = tree.add(root, "child", "payload");
///
/// assert_eq!(tree.get(root, "child"), Ok(child));
/// assert_eq!(tree[child], "payload");
/// ```
pub struct CompositeTree<T> {
    slots: Vec<Option<Slot<T>>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    root: NodeId,
    len: usize,
}

impl<T> fmt::Debug for CompositeTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeTree")
            .field("root", &self.root)
            .field("nodes_alive", &self.len)
            .field("nodes_total", &self.slots.len())
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl<T> CompositeTree<T> {
    /// Create a tree owning `root` as its root node.
    pub fn new(root: T) -> Self {
        let mut tree = Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: NodeId::new(0, 0),
            len: 0,
        };
        tree.root = tree.allocate(None, root);
        tree
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a tree owns at least its root.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `id` still refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.generations.get(id.idx()) == Some(&id.generation)
            && self.slots.get(id.idx()).is_some_and(Option::is_some)
    }

    /// Add `value` as the last child of `parent` under `name`.
    ///
    /// Names are not checked for collisions; a duplicate name creates a
    /// separate entry that is only reachable by iteration.
    ///
    /// If `parent` is stale nothing is added, `value` is dropped and the stale
    /// `parent` handle is returned, so the result never resolves.
    pub fn add(&mut self, parent: NodeId, name: impl Into<String>, value: T) -> NodeId {
        self.add_with(parent, name, |_| value)
    }

    /// Add a child built in place by `ctor`, which receives the parent handle.
    ///
    /// `ctor` is not called when `parent` is stale; see [`add`](Self::add).
    pub fn add_with<F>(&mut self, parent: NodeId, name: impl Into<String>, ctor: F) -> NodeId
    where
        F: FnOnce(NodeId) -> T,
    {
        let name = name.into();
        if !self.is_alive(parent) {
            log::warn!("add('{}') on stale node {:?}", name, parent);
            return parent;
        }
        let id = self.allocate(Some(parent), ctor(parent));
        log::debug!("Added '{}' as {:?} under {:?}", name, id, parent);
        if let Some(slot) = self.slot_mut(parent) {
            slot.children.push(name, id);
        }
        id
    }

    /// First direct child of `parent` named `name`.
    ///
    /// Only the direct children are scanned, never grandchildren.
    pub fn get(&self, parent: NodeId, name: &str) -> TreeResult<NodeId> {
        self.slot(parent)
            .and_then(|slot| slot.children.find(name))
            .ok_or_else(|| TreeError::NotFound(name.to_string()))
    }

    /// Payload of the first direct child of `parent` named `name`.
    pub fn child(&self, parent: NodeId, name: &str) -> TreeResult<&T> {
        let id = self.get(parent, name)?;
        self.node(id)
            .ok_or_else(|| TreeError::NotFound(name.to_string()))
    }

    /// Mutable payload of the first direct child of `parent` named `name`.
    pub fn child_mut(&mut self, parent: NodeId, name: &str) -> TreeResult<&mut T> {
        let id = self.get(parent, name)?;
        self.node_mut(id)
            .ok_or_else(|| TreeError::NotFound(name.to_string()))
    }

    /// Payload of `id`, if alive.
    pub fn node(&self, id: NodeId) -> Option<&T> {
        self.slot(id).map(|slot| &slot.value)
    }

    /// Mutable payload of `id`, if alive.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slot_mut(id).map(|slot| &mut slot.value)
    }

    /// Remove the first direct child of `parent` named `name` together with
    /// its subtree. Does nothing if there is no such child.
    pub fn remove(&mut self, parent: NodeId, name: &str) {
        let Some(slot) = self.slot_mut(parent) else {
            log::warn!("remove('{}') on stale node {:?}", name, parent);
            return;
        };
        if let Some(id) = slot.children.take(name) {
            log::debug!("Removed '{}' ({:?}) from {:?}", name, id, parent);
            self.free_subtree(id);
        }
    }

    /// Remove every direct child of `parent` and their subtrees.
    pub fn clear(&mut self, parent: NodeId) {
        let Some(slot) = self.slot_mut(parent) else {
            log::warn!("clear() on stale node {:?}", parent);
            return;
        };
        let children = slot.children.take_all();
        log::debug!("Clearing {} children of {:?}", children.len(), parent);
        for id in children {
            self.free_subtree(id);
        }
    }

    /// Parent of `id` (`None` for the root or a stale handle).
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).and_then(|slot| slot.parent)
    }

    /// Name under which `id` is registered in its parent.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        let parent = self.parent_of(id)?;
        self.slot(parent)?.children.name_of(id)
    }

    /// Direct children of `id` as `(name, handle)` pairs, in insertion order.
    pub fn children_of(&self, id: NodeId) -> impl Iterator<Item = (&str, NodeId)> {
        self.slot(id)
            .into_iter()
            .flat_map(|slot| slot.children.iter())
    }

    /// Number of direct children of `id`.
    pub fn child_count(&self, id: NodeId) -> usize {
        self.slot(id).map_or(0, |slot| slot.children.len())
    }

    /// Run `op` on `id`, then on each of its direct children in insertion order.
    ///
    /// Grandchildren are not visited.
    pub fn apply_for_each<F>(&mut self, id: NodeId, mut op: F)
    where
        F: FnMut(&mut T),
    {
        let Some(slot) = self.slot_mut(id) else {
            log::warn!("apply_for_each on stale node {:?}", id);
            return;
        };
        op(&mut slot.value);

        let mut index = 0;
        while let Some(child) = self.slot(id).and_then(|slot| slot.children.id_at(index)) {
            if let Some(node) = self.node_mut(child) {
                op(node);
            }
            index += 1;
        }
    }

    /// Read-only counterpart of [`apply_for_each`](Self::apply_for_each).
    pub fn visit_each<F>(&self, id: NodeId, mut op: F)
    where
        F: FnMut(&T),
    {
        let Some(slot) = self.slot(id) else {
            log::warn!("visit_each on stale node {:?}", id);
            return;
        };
        op(&slot.value);
        for child in slot.children.ids() {
            if let Some(node) = self.node(child) {
                op(node);
            }
        }
    }

    /// Single-level dispatch where the operation receives the tree itself.
    ///
    /// `op` runs for `id` and then for each direct child. Because it gets
    /// `&mut Self`, it can re-issue `dispatch` from a child to walk further
    /// down. The child list is snapshotted first, so `op` may add or remove
    /// nodes; children removed before their turn are skipped.
    pub fn dispatch<F>(&mut self, id: NodeId, mut op: F)
    where
        F: FnMut(&mut Self, NodeId),
    {
        let Some(slot) = self.slot(id) else {
            log::warn!("dispatch on stale node {:?}", id);
            return;
        };
        let children: Vec<NodeId> = slot.children.ids().collect();
        op(self, id);
        for child in children {
            if self.is_alive(child) {
                op(self, child);
            }
        }
    }

    /// Run `op` on `id` and every descendant, pre-order.
    ///
    /// This is the transitive form of [`apply_for_each`](Self::apply_for_each)
    /// and must be asked for explicitly.
    pub fn apply_deep<F>(&mut self, id: NodeId, mut op: F)
    where
        F: FnMut(&mut T),
    {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(slot) = self.slot_mut(current) else {
                continue;
            };
            op(&mut slot.value);
            let len = stack.len();
            stack.extend(slot.children.ids());
            stack[len..].reverse();
        }
    }

    fn allocate(&mut self, parent: Option<NodeId>, value: T) -> NodeId {
        let slot = Slot {
            parent,
            children: NodeStore::new(),
            value,
        };
        self.len += 1;
        if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = Some(slot);
            return NodeId::new(idx as u32, self.generations[idx]);
        }
        self.slots.push(Some(slot));
        self.generations.push(0);
        NodeId::new((self.slots.len() - 1) as u32, 0)
    }

    /// Free `id` and all of its descendants. Iterative so deep trees cannot
    /// overflow the stack.
    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if !self.is_alive(current) {
                continue;
            }
            let idx = current.idx();
            if let Some(slot) = self.slots[idx].take() {
                stack.extend(slot.children.ids());
                self.generations[idx] = self.generations[idx].wrapping_add(1);
                self.free_list.push(idx);
                self.len -= 1;
            }
        }
    }

    fn slot(&self, id: NodeId) -> Option<&Slot<T>> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()].as_ref()
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Slot<T>> {
        if !self.is_alive(id) {
            return None;
        }
        self.slots[id.idx()].as_mut()
    }
}

impl<T> Index<NodeId> for CompositeTree<T> {
    type Output = T;

    /// Panics if `id` is stale.
    fn index(&self, id: NodeId) -> &T {
        self.node(id).expect("dangling NodeId")
    }
}

impl<T> IndexMut<NodeId> for CompositeTree<T> {
    /// Panics if `id` is stale.
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        self.node_mut(id).expect("dangling NodeId")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> CompositeTree<&'static str> {
        CompositeTree::new("root")
    }

    #[test]
    fn test_add_then_get() {
        let mut tree = tree();
        let root = tree.root();
        let child = tree.add(root, "child", "a");

        assert_eq!(tree.get(root, "child"), Ok(child));
        assert_eq!(tree[child], "a");
        assert_eq!(tree.parent_of(child), Some(root));
        assert_eq!(tree.parent_of(root), None);
        assert_eq!(tree.name_of(child), Some("child"));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_add_with_receives_parent() {
        let mut tree: CompositeTree<Option<NodeId>> = CompositeTree::new(None);
        let root = tree.root();
        let child = tree.add_with(root, "child", Some);
        assert_eq!(tree[child], Some(root));
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let tree = tree();
        assert_eq!(
            tree.get(tree.root(), "missing"),
            Err(TreeError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_get_does_not_search_grandchildren() {
        let mut tree = tree();
        let root = tree.root();
        let child = tree.add(root, "child", "a");
        tree.add(child, "grandchild", "b");

        assert!(tree.get(root, "grandchild").is_err());
        assert!(tree.get(child, "grandchild").is_ok());
    }

    #[test]
    fn test_remove_then_get_fails() {
        let mut tree = tree();
        let root = tree.root();
        let child = tree.add(root, "child", "a");
        let grandchild = tree.add(child, "grandchild", "b");

        tree.remove(root, "child");

        assert!(matches!(tree.get(root, "child"), Err(TreeError::NotFound(_))));
        assert!(!tree.is_alive(child));
        assert!(!tree.is_alive(grandchild));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut tree = tree();
        let root = tree.root();
        tree.add(root, "child", "a");
        tree.remove(root, "missing");
        assert_eq!(tree.child_count(root), 1);
    }

    #[test]
    fn test_clear_drops_all_levels() {
        let mut tree = tree();
        let root = tree.root();
        let a = tree.add(root, "a", "a");
        let b = tree.add(a, "b", "b");
        let c = tree.add(b, "c", "c");
        tree.add(root, "d", "d");

        tree.clear(root);

        assert_eq!(tree.child_count(root), 0);
        assert!(!tree.is_alive(a));
        assert!(!tree.is_alive(b));
        assert!(!tree.is_alive(c));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_duplicate_names_coexist() {
        let mut tree = tree();
        let root = tree.root();
        let first = tree.add(root, "x", "a");
        let second = tree.add(root, "x", "b");

        assert_eq!(tree.child_count(root), 2);
        assert_eq!(tree.get(root, "x"), Ok(first));
        assert_eq!(tree.child(root, "x"), Ok(&"a"));

        tree.remove(root, "x");

        assert!(!tree.is_alive(first));
        assert!(tree.is_alive(second));
        let remaining: Vec<_> = tree.children_of(root).collect();
        assert_eq!(remaining, vec![("x", second)]);
        assert_eq!(tree[second], "b");
    }

    #[test]
    fn test_stale_handle_after_slot_reuse() {
        let mut tree = tree();
        let root = tree.root();
        let old = tree.add(root, "old", "a");
        tree.remove(root, "old");
        let new = tree.add(root, "new", "b");

        assert!(!tree.is_alive(old));
        assert!(tree.node(old).is_none());
        assert_eq!(tree.node(new), Some(&"b"));
    }

    #[test]
    fn test_add_under_removed_parent_is_noop() {
        let mut tree = tree();
        let root = tree.root();
        let child = tree.add(root, "child", "a");
        tree.remove(root, "child");

        let orphan = tree.add(child, "orphan", "b");
        assert!(!tree.is_alive(orphan));
        assert_eq!(tree.node(orphan), None);
        assert_eq!(tree.len(), 1);

        let mut called = false;
        tree.add_with(child, "orphan", |_| {
            called = true;
            "c"
        });
        assert!(!called);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_apply_for_each_is_single_level() {
        let mut tree: CompositeTree<u32> = CompositeTree::new(0);
        let root = tree.root();
        let child = tree.add(root, "child", 0);
        let grandchild = tree.add(child, "grandchild", 0);

        tree.apply_for_each(root, |count| *count += 1);

        assert_eq!(tree[root], 1);
        assert_eq!(tree[child], 1);
        assert_eq!(tree[grandchild], 0);
    }

    #[test]
    fn test_apply_for_each_order() {
        let mut tree: CompositeTree<&'static str> = CompositeTree::new("root");
        let root = tree.root();
        tree.add(root, "a", "a");
        tree.add(root, "b", "b");

        let mut seen = Vec::new();
        tree.visit_each(root, |name| seen.push(*name));
        assert_eq!(seen, vec!["root", "a", "b"]);
    }

    #[test]
    fn test_dispatch_reissued_reaches_grandchildren() {
        let mut tree: CompositeTree<u32> = CompositeTree::new(0);
        let root = tree.root();
        let child = tree.add(root, "child", 0);
        let grandchild = tree.add(child, "grandchild", 0);

        tree.dispatch(root, |tree, id| {
            if id == root {
                tree[id] += 1;
            } else {
                tree.apply_for_each(id, |count| *count += 1);
            }
        });

        assert_eq!(tree[root], 1);
        assert_eq!(tree[child], 1);
        assert_eq!(tree[grandchild], 1);
    }

    #[test]
    fn test_dispatch_tolerates_removal() {
        let mut tree: CompositeTree<u32> = CompositeTree::new(0);
        let root = tree.root();
        let a = tree.add(root, "a", 0);
        let b = tree.add(root, "b", 0);

        let mut visited = Vec::new();
        tree.dispatch(root, |tree, id| {
            visited.push(id);
            if id == a {
                tree.remove(root, "b");
            }
        });

        assert_eq!(visited, vec![root, a]);
        assert!(!tree.is_alive(b));
    }

    #[test]
    fn test_apply_deep_preorder() {
        let mut tree: CompositeTree<&'static str> = CompositeTree::new("root");
        let root = tree.root();
        let a = tree.add(root, "a", "a");
        tree.add(a, "a1", "a1");
        tree.add(root, "b", "b");

        let mut seen = Vec::new();
        tree.apply_deep(root, |name| seen.push(*name));
        assert_eq!(seen, vec!["root", "a", "a1", "b"]);
    }

    #[test]
    fn test_child_mut() {
        let mut tree: CompositeTree<u32> = CompositeTree::new(0);
        let root = tree.root();
        tree.add(root, "child", 1);

        if let Ok(value) = tree.child_mut(root, "child") {
            *value = 5;
        }
        assert_eq!(tree.child(root, "child"), Ok(&5));
        assert!(tree.child_mut(root, "missing").is_err());
    }
}
