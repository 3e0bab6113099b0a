//! Shared generators for item forests.

use proptest::prelude::*;

use treepick::SourceItem;

/// Identities are drawn from a small pool so duplicates are common
const ID_POOL: u8 = 10;

fn item(n: u8) -> SourceItem {
    SourceItem::new(format!("id{n}"), format!("Item {n}"))
}

/// A nested forest where the same identity may appear in several places.
///
/// An identity always carries the same label.
pub fn item_forest() -> impl Strategy<Value = Vec<SourceItem>> {
    let leaf = (0..ID_POOL).prop_map(item);
    let node = leaf.prop_recursive(3, 32, 4, |inner| {
        (0..ID_POOL, proptest::collection::vec(inner, 1..4))
            .prop_map(|(n, children)| item(n).with_children(children))
    });
    proptest::collection::vec(node, 1..4)
}

/// A label that may or may not exist in the forest
pub fn any_label() -> impl Strategy<Value = String> {
    (0..ID_POOL + 2).prop_map(|n| format!("Item {n}"))
}

/// Toggle script: (node index seed, checked)
pub fn toggles() -> impl Strategy<Value = Vec<(usize, bool)>> {
    proptest::collection::vec((any::<usize>(), any::<bool>()), 1..8)
}
