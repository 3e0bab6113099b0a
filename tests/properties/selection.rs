//! Properties of selection propagation.

use proptest::prelude::*;

use treepick::tree::{build_tree, ExcludedIds, NodeKey, NodeTree, Selection, SelectionState};

use crate::strategies::{item_forest, toggles};

fn key_at(tree: &NodeTree, seed: usize) -> NodeKey {
    tree.iter().nth(seed % tree.len()).unwrap().key
}

fn apply(tree: &NodeTree, script: &[(usize, bool)]) -> Selection {
    let mut selection = Selection::new();
    for (seed, checked) in script {
        selection.toggle(tree, key_at(tree, *seed), *checked, true);
    }
    selection
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Checking a node checks every node sharing its identity and
    /// everything below all of them.
    #[test]
    fn property_check_reaches_duplicates_and_descendants(
        items in item_forest(),
        script in toggles(),
        seed in any::<usize>(),
    ) {
        let tree = build_tree(&items, &ExcludedIds::new());
        let mut selection = apply(&tree, &script);
        let key = key_at(&tree, seed);

        selection.toggle(&tree, key, true, true);

        let id = &tree.get(key).unwrap().source_id;
        for peer in tree.keys_for_source(id) {
            prop_assert!(selection.contains(*peer));
            for below in tree.descendants(*peer) {
                prop_assert!(selection.contains(below));
                let below_id = &tree.get(below).unwrap().source_id;
                for copy in tree.keys_for_source(below_id) {
                    prop_assert!(selection.contains(*copy));
                }
            }
        }
    }

    /// PROPERTY: Unchecking a node clears every copy of it.
    #[test]
    fn property_uncheck_clears_all_copies(
        items in item_forest(),
        script in toggles(),
        seed in any::<usize>(),
    ) {
        let tree = build_tree(&items, &ExcludedIds::new());
        let mut selection = apply(&tree, &script);
        let key = key_at(&tree, seed);

        selection.toggle(&tree, key, false, true);

        let id = &tree.get(key).unwrap().source_id;
        for peer in tree.keys_for_source(id) {
            prop_assert!(!selection.contains(*peer));
        }
    }

    /// PROPERTY: After any multi-select sequence, a parent is selected
    /// exactly when all of its children are.
    #[test]
    fn property_parent_matches_children(items in item_forest(), script in toggles()) {
        let tree = build_tree(&items, &ExcludedIds::new());
        let selection = apply(&tree, &script);

        for node in tree.iter().filter(|n| n.has_children()) {
            let all_children = node.children.iter().all(|c| selection.contains(*c));
            prop_assert_eq!(selection.contains(node.key), all_children, "node {}", node.key);
        }
    }

    /// PROPERTY: Tri-state of a parent reflects the share of selected
    /// descendants.
    #[test]
    fn property_tri_state_matches_descendants(items in item_forest(), script in toggles()) {
        let tree = build_tree(&items, &ExcludedIds::new());
        let selection = apply(&tree, &script);

        for node in tree.iter() {
            let state = selection.state(&tree, node.key);
            if !node.has_children() {
                prop_assert_eq!(state.is_checked(), selection.contains(node.key));
                continue;
            }
            let total = tree.descendants(node.key).count();
            let selected = tree.descendants(node.key).filter(|k| selection.contains(*k)).count();
            let expected = if selected == total {
                SelectionState::Selected
            } else if selected == 0 {
                SelectionState::Unselected
            } else {
                SelectionState::Partial
            };
            prop_assert_eq!(state, expected);
        }
    }

    /// PROPERTY: Repeating a toggle changes nothing.
    #[test]
    fn property_toggle_is_idempotent(
        items in item_forest(),
        script in toggles(),
        seed in any::<usize>(),
        checked in any::<bool>(),
    ) {
        let tree = build_tree(&items, &ExcludedIds::new());
        let mut selection = apply(&tree, &script);
        let key = key_at(&tree, seed);

        selection.toggle(&tree, key, checked, true);
        let once = selection.clone();
        selection.toggle(&tree, key, checked, true);

        prop_assert_eq!(selection, once);
    }
}
