//! Search filtering over the display forest.

use super::node::{NodeKey, NodeTree};

/// A node in a (possibly filtered) view of the forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleNode {
    pub key: NodeKey,
    pub children: Vec<VisibleNode>,
}

/// The unfiltered forest as a view
pub fn full_forest(tree: &NodeTree) -> Vec<VisibleNode> {
    tree.roots()
        .iter()
        .map(|root| full_node(tree, *root))
        .collect()
}

fn full_node(tree: &NodeTree, key: NodeKey) -> VisibleNode {
    let children = tree
        .get(key)
        .map(|n| n.children.iter().map(|c| full_node(tree, *c)).collect())
        .unwrap_or_default();
    VisibleNode { key, children }
}

/// Keep nodes whose label contains `query` (case-insensitive), plus their
/// ancestors. An empty query returns the forest unchanged.
pub fn filter_by_search(tree: &NodeTree, forest: &[VisibleNode], query: &str) -> Vec<VisibleNode> {
    if query.is_empty() {
        return forest.to_vec();
    }
    filter_nodes(tree, forest, &query.to_lowercase())
}

fn filter_nodes(tree: &NodeTree, nodes: &[VisibleNode], term: &str) -> Vec<VisibleNode> {
    let mut filtered = Vec::new();

    for node in nodes {
        let matches = tree
            .get(node.key)
            .is_some_and(|n| n.label.to_lowercase().contains(term));
        let children = filter_nodes(tree, &node.children, term);

        if matches || !children.is_empty() {
            filtered.push(VisibleNode {
                key: node.key,
                children,
            });
        }
    }

    filtered
}
