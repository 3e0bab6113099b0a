//! Display node arena and identity index.
//!
//! Nodes are stored in pre-order: a node's key is its index in the arena,
//! its descendants occupy the contiguous range that follows it, and every
//! child has a larger key than its parent.

use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

use crate::models::{ItemStyles, SourceItem};

/// Synthetic key of a display node, unique within one materialization pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeKey(u32);

impl NodeKey {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// A materialized node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    pub key: NodeKey,
    /// Identity of the source item; may repeat across nodes
    pub source_id: String,
    /// Display label (`label (remark)`); empty for excluded placeholders
    pub label: String,
    /// Source item label without the remark
    pub item_label: String,
    pub disabled: bool,
    pub styles: Option<ItemStyles>,
    pub end_icon: Option<String>,
    pub always_show_end_icon: bool,
    pub parent: Option<NodeKey>,
    pub children: Vec<NodeKey>,
    pub depth: usize,
    subtree_end: usize,
}

impl DisplayNode {
    /// Excluded placeholders (and empty labels) are never shown
    pub fn is_placeholder(&self) -> bool {
        self.label.is_empty()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Forest of display nodes with an `identity -> keys` index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeTree {
    nodes: Vec<DisplayNode>,
    roots: Vec<NodeKey>,
    by_source: HashMap<String, Vec<NodeKey>>,
}

impl NodeTree {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    pub fn get(&self, key: NodeKey) -> Option<&DisplayNode> {
        self.nodes.get(key.index())
    }

    /// All nodes in pre-order
    pub fn iter(&self) -> impl Iterator<Item = &DisplayNode> {
        self.nodes.iter()
    }

    /// Every key sharing `source_id`, in pre-order
    pub fn keys_for_source(&self, source_id: &str) -> &[NodeKey] {
        self.by_source
            .get(source_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every key sharing the identity of `key` (including `key` itself)
    pub fn peers(&self, key: NodeKey) -> &[NodeKey] {
        match self.get(key) {
            Some(node) => self.keys_for_source(&node.source_id),
            None => &[],
        }
    }

    /// All descendant keys of `key`, in pre-order
    pub fn descendants(&self, key: NodeKey) -> impl Iterator<Item = NodeKey> {
        self.descendant_range(key).map(NodeKey::from_index)
    }

    pub fn descendant_count(&self, key: NodeKey) -> usize {
        self.descendant_range(key).len()
    }

    /// Parent chain of `key`, nearest first
    pub fn ancestors(&self, key: NodeKey) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(key).and_then(|n| n.parent),
        }
    }

    /// First node (pre-order) whose source item label equals `label`
    pub fn find_by_item_label(&self, label: &str) -> Option<&DisplayNode> {
        self.nodes
            .iter()
            .find(|n| !n.is_placeholder() && n.item_label == label)
    }

    /// Number of distinct identities among visible (non-placeholder) nodes
    pub fn identity_count(&self) -> usize {
        self.by_source
            .values()
            .filter(|keys| {
                keys.iter()
                    .any(|k| self.get(*k).is_some_and(|n| !n.is_placeholder()))
            })
            .count()
    }

    fn descendant_range(&self, key: NodeKey) -> Range<usize> {
        match self.get(key) {
            Some(node) => key.index() + 1..node.subtree_end,
            None => 0..0,
        }
    }

    /// Append a node for `item`. Children must be pushed before `close`.
    pub(crate) fn open(
        &mut self,
        item: &SourceItem,
        parent: Option<NodeKey>,
        depth: usize,
        placeholder: bool,
    ) -> NodeKey {
        let key = NodeKey::from_index(self.nodes.len());
        let (label, disabled, styles, end_icon, always_show_end_icon) = if placeholder {
            (String::new(), false, None, None, false)
        } else {
            (
                item.display_label(),
                item.disabled,
                item.styles.clone(),
                item.end_icon.clone(),
                item.always_show_end_icon,
            )
        };

        self.nodes.push(DisplayNode {
            key,
            source_id: item.id.clone(),
            label,
            item_label: item.label.clone(),
            disabled,
            styles,
            end_icon,
            always_show_end_icon,
            parent,
            children: Vec::new(),
            depth,
            subtree_end: key.index() + 1,
        });
        self.by_source.entry(item.id.clone()).or_default().push(key);
        if parent.is_none() {
            self.roots.push(key);
        }
        key
    }

    /// Record children and seal the subtree range of `key`
    pub(crate) fn close(&mut self, key: NodeKey, children: Vec<NodeKey>) {
        let end = self.nodes.len();
        if let Some(node) = self.nodes.get_mut(key.index()) {
            node.children = children;
            node.subtree_end = end;
        }
    }
}

/// Iterator over a node's ancestors
pub struct Ancestors<'a> {
    tree: &'a NodeTree,
    next: Option<NodeKey>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.get(current).and_then(|n| n.parent);
        Some(current)
    }
}
