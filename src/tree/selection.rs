//! Selection state and propagation.
//!
//! Selection is tracked per node key. Toggling a node also toggles every
//! node sharing its identity and the subtrees below all of them, then
//! re-derives ancestors: a parent is selected exactly when all of its
//! immediate children are.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use super::node::{NodeKey, NodeTree};

/// Tri-state checkbox status of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// All descendants selected (or a selected leaf)
    Selected,
    /// Nothing selected
    Unselected,
    /// Some but not all descendants selected
    Partial,
}

impl SelectionState {
    pub fn is_checked(self) -> bool {
        self == SelectionState::Selected
    }

    pub fn is_indeterminate(self) -> bool {
        self == SelectionState::Partial
    }
}

/// Set of selected node keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    keys: BTreeSet<NodeKey>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Selected keys in ascending (pre-order) order
    pub fn iter(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.keys.iter().copied()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Set `key` to `checked`, propagating through the tree.
    ///
    /// With `multi_select` off the selection is replaced by the nodes
    /// sharing `key`'s identity (or emptied when unchecking). Unknown keys
    /// are ignored.
    pub fn toggle(&mut self, tree: &NodeTree, key: NodeKey, checked: bool, multi_select: bool) {
        if tree.get(key).is_none() {
            return;
        }

        if !multi_select {
            self.keys.clear();
            if checked {
                self.keys.extend(tree.peers(key).iter().copied());
            }
            debug!(%key, checked, selected = self.keys.len(), "single toggle");
            return;
        }

        let affected = closure(tree, key);
        for k in &affected {
            if checked {
                self.keys.insert(*k);
            } else {
                self.keys.remove(k);
            }
        }
        self.recompute_ancestors(tree, &affected);

        debug!(
            %key,
            checked,
            affected = affected.len(),
            selected = self.keys.len(),
            "toggle"
        );
    }

    /// Select every node whose source item label is in `labels`
    pub fn select_labels<S: AsRef<str>>(&mut self, tree: &NodeTree, labels: &[S]) {
        if labels.is_empty() {
            return;
        }
        let wanted: HashSet<&str> = labels.iter().map(AsRef::<str>::as_ref).collect();
        let matches: Vec<NodeKey> = tree
            .iter()
            .filter(|n| !n.is_placeholder() && wanted.contains(n.item_label.as_str()))
            .map(|n| n.key)
            .collect();

        for key in matches {
            if !self.contains(key) {
                self.toggle(tree, key, true, true);
            }
        }
    }

    /// Tri-state of `key`: leaves report their own membership, parents the
    /// share of selected descendants
    pub fn state(&self, tree: &NodeTree, key: NodeKey) -> SelectionState {
        let total = tree.descendant_count(key);
        if total == 0 {
            return if self.contains(key) {
                SelectionState::Selected
            } else {
                SelectionState::Unselected
            };
        }

        let selected = tree.descendants(key).filter(|k| self.contains(*k)).count();
        if selected == total {
            SelectionState::Selected
        } else if selected == 0 {
            SelectionState::Unselected
        } else {
            SelectionState::Partial
        }
    }

    /// Whether every descendant of a non-leaf `key` is selected
    pub fn all_descendants_selected(&self, tree: &NodeTree, key: NodeKey) -> bool {
        tree.descendant_count(key) > 0 && tree.descendants(key).all(|k| self.contains(k))
    }

    /// Number of distinct identities among selected visible nodes
    pub fn identity_count(&self, tree: &NodeTree) -> usize {
        self.keys
            .iter()
            .filter_map(|k| tree.get(*k))
            .filter(|n| !n.is_placeholder())
            .map(|n| n.source_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    fn recompute_ancestors(&mut self, tree: &NodeTree, affected: &BTreeSet<NodeKey>) {
        let ancestors: BTreeSet<NodeKey> = affected
            .iter()
            .flat_map(|k| tree.ancestors(*k))
            .collect();

        // Children always have larger keys than their parents, so walking
        // keys in descending order settles every child before its parent.
        for key in ancestors.into_iter().rev() {
            let Some(node) = tree.get(key) else { continue };
            let all_children = node.children.iter().all(|c| self.keys.contains(c));
            if all_children {
                self.keys.insert(key);
            } else {
                self.keys.remove(&key);
            }
        }
    }
}

/// `key`, every node sharing an identity with anything reached, and all of
/// their descendants
fn closure(tree: &NodeTree, key: NodeKey) -> BTreeSet<NodeKey> {
    let mut reached = BTreeSet::new();
    let mut stack: Vec<NodeKey> = tree.peers(key).to_vec();
    stack.push(key);

    while let Some(current) = stack.pop() {
        if !reached.insert(current) {
            continue;
        }
        stack.extend(tree.peers(current).iter().copied());
        if let Some(node) = tree.get(current) {
            stack.extend(node.children.iter().copied());
        }
    }

    reached
}
