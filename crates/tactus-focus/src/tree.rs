//! The focus tree: a registry of attached, focusable nodes.
//!
//! Hosts register a node per focusable element in document order and
//! detach nodes when elements leave the UI. The tree tracks which node is
//! active and answers the container queries traps need. All operations
//! are synchronous and unsynchronized; callers stay on the UI thread.

use std::collections::HashMap;

use smallvec::SmallVec;

/// Unique identifier for a focusable node.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusId(usize);

impl FocusId {
    pub fn as_usize(self) -> usize {
        self.0
    }
}

/// Small inline buffer for container queries; most dialogs have a handful
/// of tabbables.
pub type Tabbables = SmallVec<[FocusId; 8]>;

struct FocusNodeData {
    parent: Option<FocusId>,
    children: Vec<FocusId>,
    tabbable: bool,
}

/// Registry of focusable nodes with document order and active focus.
pub struct FocusTree {
    nodes: HashMap<FocusId, FocusNodeData>,
    roots: Vec<FocusId>,
    active: Option<FocusId>,
    next_id: usize,
}

impl Default for FocusTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTree {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            roots: Vec::new(),
            active: None,
            next_id: 1,
        }
    }

    /// Registers a node as the last child of `parent` (document order).
    /// With no parent, or an unknown/detached parent, the node becomes a
    /// root.
    pub fn insert(&mut self, parent: Option<FocusId>, tabbable: bool) -> FocusId {
        let id = FocusId(self.next_id);
        self.next_id += 1;

        let parent = parent.filter(|p| self.is_attached(*p));
        self.nodes.insert(
            id,
            FocusNodeData {
                parent,
                children: Vec::new(),
                tabbable,
            },
        );
        match parent {
            Some(parent) => {
                if let Some(data) = self.nodes.get_mut(&parent) {
                    data.children.push(id);
                }
            }
            None => self.roots.push(id),
        }
        id
    }

    /// Detaches `id` and its whole subtree. Detached ids are never
    /// focusable again; if the active node was inside, focus is cleared.
    ///
    /// The subtree's entries are removed from the registry outright — a
    /// detached id answers every query the same as an unknown one, and a
    /// long-lived host inserts and detaches nodes for as long as it runs.
    pub fn detach(&mut self, id: FocusId) {
        if !self.is_attached(id) {
            return;
        }

        // Unlink from the parent's child list (or the root list).
        let parent = self.nodes.get(&id).and_then(|data| data.parent);
        match parent {
            Some(parent) => {
                if let Some(data) = self.nodes.get_mut(&parent) {
                    data.children.retain(|child| *child != id);
                }
            }
            None => self.roots.retain(|root| *root != id),
        }

        // Remove the subtree.
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(data) = self.nodes.remove(&current) {
                pending.extend(data.children);
            }
            if self.active == Some(current) {
                self.active = None;
            }
        }
    }

    pub fn is_attached(&self, id: FocusId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of registered (attached) nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn set_tabbable(&mut self, id: FocusId, tabbable: bool) {
        if let Some(data) = self.nodes.get_mut(&id) {
            data.tabbable = tabbable;
        }
    }

    /// The node currently holding focus, if any.
    pub fn focused(&self) -> Option<FocusId> {
        self.active
    }

    /// Moves focus to `id`. Unknown or detached nodes are refused and
    /// focus is left unchanged.
    pub fn request_focus(&mut self, id: FocusId) -> bool {
        if !self.is_attached(id) {
            return false;
        }
        self.active = Some(id);
        true
    }

    pub fn clear_focus(&mut self) {
        self.active = None;
    }

    /// Tabbable descendants of `container` in document order (depth-first,
    /// children in insertion order). The container itself is excluded.
    pub fn tabbables(&self, container: FocusId) -> Tabbables {
        let mut out = Tabbables::new();
        if !self.is_attached(container) {
            return out;
        }
        self.collect_tabbables(container, &mut out);
        out
    }

    fn collect_tabbables(&self, node: FocusId, out: &mut Tabbables) {
        let Some(data) = self.nodes.get(&node) else {
            return;
        };
        for child in &data.children {
            if let Some(child_data) = self.nodes.get(child) {
                if child_data.tabbable {
                    out.push(*child);
                }
            }
            self.collect_tabbables(*child, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_focus() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, false);
        let a = tree.insert(Some(root), true);

        assert!(tree.focused().is_none());
        assert!(tree.request_focus(a));
        assert_eq!(tree.focused(), Some(a));

        tree.clear_focus();
        assert!(tree.focused().is_none());
    }

    #[test]
    fn detach_clears_focus_inside_subtree() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, false);
        let inner = tree.insert(Some(root), false);
        let leaf = tree.insert(Some(inner), true);

        tree.request_focus(leaf);
        tree.detach(inner);

        assert!(!tree.is_attached(inner));
        assert!(!tree.is_attached(leaf));
        assert!(tree.focused().is_none());
        assert!(!tree.request_focus(leaf));
    }

    #[test]
    fn tabbables_in_document_order() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, false);
        let a = tree.insert(Some(root), true);
        let group = tree.insert(Some(root), false);
        let b = tree.insert(Some(group), true);
        let c = tree.insert(Some(root), true);

        assert_eq!(tree.tabbables(root).as_slice(), &[a, b, c]);
        assert_eq!(tree.tabbables(group).as_slice(), &[b]);
    }

    #[test]
    fn tabbables_skip_detached_and_non_tabbable() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, false);
        let a = tree.insert(Some(root), true);
        let b = tree.insert(Some(root), true);
        let c = tree.insert(Some(root), true);

        tree.detach(b);
        tree.set_tabbable(c, false);

        assert_eq!(tree.tabbables(root).as_slice(), &[a]);
    }

    #[test]
    fn detach_reclaims_registry_entries() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, false);

        // A long-lived list inserting and detaching rows must not grow
        // the registry.
        for _ in 0..1_000 {
            let row = tree.insert(Some(root), false);
            let cell = tree.insert(Some(row), true);
            tree.request_focus(cell);
            tree.detach(row);
        }

        assert_eq!(tree.node_count(), 1);
        assert!(tree.focused().is_none());
        assert!(tree.tabbables(root).is_empty());
    }

    #[test]
    fn unknown_parent_becomes_root() {
        let mut tree = FocusTree::new();
        let root = tree.insert(None, false);
        tree.detach(root);

        let orphan = tree.insert(Some(root), true);
        assert!(tree.is_attached(orphan));
        assert!(tree.request_focus(orphan));
    }
}
