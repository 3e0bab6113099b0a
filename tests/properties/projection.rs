//! Properties of label projection.

use std::collections::HashSet;

use proptest::prelude::*;

use treepick::tree::{build_tree, project_labels, ExcludedIds, Selection};
use treepick::SelectionMode;

use crate::strategies::{item_forest, toggles};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Each identity is reported at most once, in every mode, and
    /// the narrower modes report a subset of `all`.
    #[test]
    fn property_projection_dedups(items in item_forest(), script in toggles()) {
        let tree = build_tree(&items, &ExcludedIds::new());
        let mut selection = Selection::new();
        for (seed, checked) in &script {
            let key = tree.iter().nth(seed % tree.len()).unwrap().key;
            selection.toggle(&tree, key, *checked, true);
        }

        let all = project_labels(&tree, &selection, SelectionMode::All);
        let all_set: HashSet<&String> = all.iter().collect();
        prop_assert_eq!(all_set.len(), all.len());

        for mode in [SelectionMode::Parent, SelectionMode::Child] {
            let labels = project_labels(&tree, &selection, mode);
            let unique: HashSet<&String> = labels.iter().collect();
            prop_assert_eq!(unique.len(), labels.len());
            prop_assert!(labels.iter().all(|l| all_set.contains(l)));
        }
    }

    /// PROPERTY: Checking any node reports its label in `all` mode.
    #[test]
    fn property_checked_node_is_reported(items in item_forest(), seed in any::<usize>()) {
        let tree = build_tree(&items, &ExcludedIds::new());
        let node = tree.iter().nth(seed % tree.len()).unwrap();
        let mut selection = Selection::new();
        selection.toggle(&tree, node.key, true, true);

        let labels = project_labels(&tree, &selection, SelectionMode::All);
        prop_assert!(labels.contains(&node.item_label));
    }
}
