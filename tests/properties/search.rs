//! Properties of search filtering.

use proptest::prelude::*;

use treepick::tree::{build_tree, filter_by_search, full_forest, ExcludedIds, NodeTree, VisibleNode};

use crate::strategies::item_forest;

fn query() -> impl Strategy<Value = String> {
    proptest::string::string_regex("(item|ITEM|[0-9 ]){0,2}").unwrap()
}

fn keys(nodes: &[VisibleNode], out: &mut Vec<usize>) {
    for node in nodes {
        out.push(node.key.index());
        keys(&node.children, out);
    }
}

fn all_retained_are_justified(tree: &NodeTree, nodes: &[VisibleNode], term: &str) -> bool {
    nodes.iter().all(|node| {
        let label = tree.get(node.key).unwrap().label.to_lowercase();
        (label.contains(term) || !node.children.is_empty())
            && all_retained_are_justified(tree, &node.children, term)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An empty query leaves the forest unchanged.
    #[test]
    fn property_empty_query_is_identity(items in item_forest()) {
        let tree = build_tree(&items, &ExcludedIds::new());
        let forest = full_forest(&tree);
        prop_assert_eq!(filter_by_search(&tree, &forest, ""), forest);
    }

    /// PROPERTY: Filtering an already filtered forest by the same query is a
    /// no-op.
    #[test]
    fn property_filter_is_idempotent(items in item_forest(), q in query()) {
        let tree = build_tree(&items, &ExcludedIds::new());
        let once = filter_by_search(&tree, &full_forest(&tree), &q);
        let twice = filter_by_search(&tree, &once, &q);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Every matching node is kept, and every kept node either
    /// matches or leads to a match.
    #[test]
    fn property_filter_keeps_exactly_matches_and_ancestors(items in item_forest(), q in query()) {
        prop_assume!(!q.is_empty());
        let tree = build_tree(&items, &ExcludedIds::new());
        let filtered = filter_by_search(&tree, &full_forest(&tree), &q);
        let term = q.to_lowercase();

        prop_assert!(all_retained_are_justified(&tree, &filtered, &term));

        let mut kept = Vec::new();
        keys(&filtered, &mut kept);
        for node in tree.iter().filter(|n| n.label.to_lowercase().contains(&term)) {
            prop_assert!(kept.contains(&node.key.index()), "missing {}", node.key);
        }
    }
}
