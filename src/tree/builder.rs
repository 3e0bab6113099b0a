//! Tree construction from source items.
//!
//! Turns the caller's item graph into a `NodeTree`, assigning keys in
//! depth-first pre-order so that the same input always yields the same keys.

use tracing::{debug, trace, warn};

use crate::models::SourceItem;

use super::exclude::ExcludedIds;
use super::node::{NodeKey, NodeTree};

/// Build the display forest for `items`.
///
/// Roots are the top-level items without a `parent_id`. An item's children
/// come from its nested `children` when present, otherwise from top-level
/// items whose `parent_id` names it. Excluded items keep their slot as an
/// empty placeholder with no children. Items with an empty id are dropped.
pub fn build_tree(items: &[SourceItem], excluded: &ExcludedIds) -> NodeTree {
    let mut builder = TreeBuilder {
        items,
        excluded,
        tree: NodeTree::default(),
        path: Vec::new(),
    };

    for item in items.iter().filter(|i| i.parent_id.is_none()) {
        builder.build_item(item, None, 0);
    }

    debug!(
        nodes = builder.tree.len(),
        roots = builder.tree.roots().len(),
        excluded = excluded.len(),
        "materialized tree"
    );
    builder.tree
}

struct TreeBuilder<'a> {
    items: &'a [SourceItem],
    excluded: &'a ExcludedIds,
    tree: NodeTree,
    /// Identities on the current root-to-node path
    path: Vec<&'a str>,
}

impl<'a> TreeBuilder<'a> {
    fn build_item(
        &mut self,
        item: &'a SourceItem,
        parent: Option<NodeKey>,
        depth: usize,
    ) -> Option<NodeKey> {
        if item.id.is_empty() {
            warn!(label = %item.label, "dropping item without id");
            return None;
        }

        if self.excluded.contains(&item.id) {
            let key = self.tree.open(item, parent, depth, true);
            self.tree.close(key, Vec::new());
            trace!(%key, id = %item.id, "excluded placeholder");
            return Some(key);
        }

        let key = self.tree.open(item, parent, depth, false);
        self.path.push(item.id.as_str());

        let children = match &item.children {
            Some(nested) => nested
                .iter()
                .filter_map(|child| self.build_item(child, Some(key), depth + 1))
                .collect(),
            None => self.build_linked_children(item, key, depth),
        };

        self.path.pop();
        self.tree.close(key, children);
        Some(key)
    }

    fn build_linked_children(
        &mut self,
        item: &'a SourceItem,
        key: NodeKey,
        depth: usize,
    ) -> Vec<NodeKey> {
        let items = self.items;
        let mut children = Vec::new();

        for child in items
            .iter()
            .filter(|c| c.parent_id.as_deref() == Some(item.id.as_str()))
        {
            if self.path.contains(&child.id.as_str()) {
                warn!(id = %child.id, parent = %item.id, "parent_id cycle cut");
                continue;
            }
            if let Some(child_key) = self.build_item(child, Some(key), depth + 1) {
                children.push(child_key);
            }
        }

        children
    }
}
