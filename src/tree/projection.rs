//! Project the selection back to source labels for the host.

use std::collections::HashSet;

use crate::models::SelectionMode;

use super::node::NodeTree;
use super::selection::Selection;

/// Labels of selected items, one per identity, filtered by `mode`.
///
/// A node counts as selected when its key is in the selection or all of its
/// descendants are. The walk covers the whole tree regardless of any search
/// filter; placeholders are never reported.
pub fn project_labels(tree: &NodeTree, selection: &Selection, mode: SelectionMode) -> Vec<String> {
    let mut collected: Vec<(&str, &str)> = Vec::new();
    let mut emitted: HashSet<&str> = HashSet::new();

    for node in tree.iter() {
        if node.is_placeholder() || emitted.contains(node.source_id.as_str()) {
            continue;
        }
        if selection.contains(node.key) || selection.all_descendants_selected(tree, node.key) {
            emitted.insert(node.source_id.as_str());
            collected.push((node.source_id.as_str(), node.item_label.as_str()));
        }
    }

    collected
        .into_iter()
        .filter(|(id, _)| match mode {
            SelectionMode::All => true,
            SelectionMode::Parent => !covered_by_parent(tree, id, &emitted),
            SelectionMode::Child => !has_collected_child(tree, id, &emitted),
        })
        .map(|(_, label)| label.to_string())
        .collect()
}

/// True when every occurrence of `id` sits under a collected parent
fn covered_by_parent(tree: &NodeTree, id: &str, collected: &HashSet<&str>) -> bool {
    let mut occurrences = tree
        .keys_for_source(id)
        .iter()
        .filter_map(|k| tree.get(*k))
        .filter(|n| !n.is_placeholder())
        .peekable();

    occurrences.peek().is_some()
        && occurrences.all(|node| {
            node.parent
                .and_then(|p| tree.get(p))
                .is_some_and(|parent| parent.source_id != id && collected.contains(parent.source_id.as_str()))
        })
}

/// True when some occurrence of `id` has a collected direct child
fn has_collected_child(tree: &NodeTree, id: &str, collected: &HashSet<&str>) -> bool {
    tree.keys_for_source(id)
        .iter()
        .filter_map(|k| tree.get(*k))
        .flat_map(|node| node.children.iter())
        .filter_map(|c| tree.get(*c))
        .any(|child| {
            !child.is_placeholder()
                && child.source_id != id
                && collected.contains(child.source_id.as_str())
        })
}
