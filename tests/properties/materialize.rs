//! Properties of tree materialization and exclusion.

use std::collections::HashSet;

use proptest::prelude::*;

use treepick::tree::{build_tree, resolve_exclusions, ExcludedIds};

use crate::strategies::{any_label, item_forest};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Keys are unique, dense, and follow pre-order even when
    /// identities repeat.
    #[test]
    fn property_keys_are_unique_preorder(items in item_forest()) {
        let tree = build_tree(&items, &ExcludedIds::new());

        let rendered: HashSet<String> = tree.iter().map(|n| n.key.to_string()).collect();
        prop_assert_eq!(rendered.len(), tree.len());

        for (i, node) in tree.iter().enumerate() {
            prop_assert_eq!(node.key.index(), i);
            prop_assert_eq!(node.key.to_string(), format!("node-{}", i));
            for child in &node.children {
                prop_assert!(*child > node.key);
                prop_assert_eq!(tree.get(*child).unwrap().parent, Some(node.key));
            }
        }
    }

    /// PROPERTY: The same input always yields the same tree.
    #[test]
    fn property_build_is_deterministic(items in item_forest()) {
        let excluded = ExcludedIds::new();
        prop_assert_eq!(build_tree(&items, &excluded), build_tree(&items, &excluded));
    }

    /// PROPERTY: Every occurrence of an excluded identity is an empty
    /// placeholder with no children.
    #[test]
    fn property_excluded_nodes_are_empty_placeholders(
        items in item_forest(),
        labels in proptest::collection::vec(any_label(), 0..3),
    ) {
        let excluded = resolve_exclusions(&items, &labels);
        let tree = build_tree(&items, &excluded);

        for node in tree.iter() {
            if excluded.contains(&node.source_id) {
                prop_assert!(node.is_placeholder());
                prop_assert!(node.children.is_empty());
            } else {
                prop_assert!(!node.is_placeholder());
            }
        }
    }

    /// PROPERTY: Excluding a label removes that item's whole subtree from the
    /// non-placeholder identities.
    #[test]
    fn property_exclusion_closes_over_descendants(
        items in item_forest(),
        label in any_label(),
    ) {
        let full = build_tree(&items, &ExcludedIds::new());
        let excluded = resolve_exclusions(&items, &[label.as_str()]);

        let Some(first) = full.find_by_item_label(&label) else {
            prop_assert!(excluded.is_empty());
            return Ok(());
        };
        prop_assert!(excluded.contains(&first.source_id));
        for key in full.descendants(first.key) {
            let node = full.get(key).unwrap();
            prop_assert!(excluded.contains(&node.source_id));
        }
    }
}
