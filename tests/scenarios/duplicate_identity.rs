//! Scenario: one member listed under two teams stays in sync.

use treepick::{SelectionMode, SelectionState, SourceItem, TreeView, ViewOptions};

fn teams() -> Vec<SourceItem> {
    vec![
        SourceItem::new("p1", "P1").with_children(vec![
            SourceItem::new("x", "X"),
            SourceItem::new("q", "Q"),
        ]),
        SourceItem::new("p2", "P2").with_children(vec![
            SourceItem::new("x", "X"),
            SourceItem::new("r", "R"),
        ]),
    ]
}

fn all_mode() -> ViewOptions {
    ViewOptions {
        selection_mode: SelectionMode::All,
        ..ViewOptions::default()
    }
}

#[test]
fn selecting_one_copy_selects_both_and_reports_once() {
    let mut view = TreeView::new(teams(), all_mode());
    let copies = view.tree().keys_for_source("x").to_vec();
    assert_eq!(copies.len(), 2);
    assert_ne!(copies[0], copies[1]);

    assert!(view.toggle(copies[0], true));

    assert!(view.selection().contains(copies[1]));
    assert_eq!(view.selected_labels(), vec!["X"]);
    for root in view.tree().roots().to_vec() {
        assert_eq!(view.checkbox_state(root), SelectionState::Partial);
    }
}

#[test]
fn unchecking_the_other_copy_clears_both() {
    let mut view = TreeView::new(teams(), all_mode());
    let copies = view.tree().keys_for_source("x").to_vec();

    view.toggle(copies[0], true);
    view.toggle(copies[1], false);

    assert!(view.selection().is_empty());
    assert!(view.selected_labels().is_empty());
}

#[test]
fn completing_one_team_reports_team_and_shared_member() {
    let mut view = TreeView::new(teams(), ViewOptions::default());
    let x = view.tree().keys_for_source("x")[0];
    let q = view.tree().find_by_item_label("Q").unwrap().key;

    view.toggle(x, true);
    view.toggle(q, true);

    // P1 is complete; the X copy under P2 is still the top-most selection
    assert_eq!(view.selected_labels(), vec!["P1", "X"]);
}

#[test]
fn rows_show_both_copies_checked() {
    let mut view = TreeView::new(teams(), all_mode());
    let x = view.tree().keys_for_source("x")[1];
    view.toggle(x, true);

    let checked: Vec<String> = view
        .rows()
        .into_iter()
        .filter(|r| r.state.is_checked())
        .map(|r| format!("{}@{}", r.label, r.key))
        .collect();
    assert_eq!(checked, vec!["X@node-1", "X@node-4"]);
}
