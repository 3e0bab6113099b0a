//! Scenario: checking every child rolls the selection up to the parent.

use std::cell::RefCell;
use std::rc::Rc;

use treepick::{SelectionMode, SelectionState, SourceItem, TreeView, ViewOptions};

fn abc() -> Vec<SourceItem> {
    vec![SourceItem::new("a", "A").with_children(vec![
        SourceItem::new("b", "B"),
        SourceItem::new("c", "C"),
    ])]
}

fn selected_keys(view: &TreeView) -> Vec<String> {
    view.selection()
        .iter()
        .map(|k| view.tree().get(k).unwrap().label.clone())
        .collect()
}

#[test]
fn selecting_both_children_reports_parent() {
    let reports: Rc<RefCell<Vec<Vec<String>>>> = Rc::default();
    let sink = Rc::clone(&reports);
    let mut view = TreeView::new(abc(), ViewOptions::default())
        .with_on_change(move |labels: &[String]| sink.borrow_mut().push(labels.to_vec()));
    let tree = view.tree().clone();
    let a = tree.find_by_item_label("A").unwrap().key;
    let b = tree.find_by_item_label("B").unwrap().key;
    let c = tree.find_by_item_label("C").unwrap().key;

    assert!(view.toggle(b, true));
    assert_eq!(selected_keys(&view), vec!["B"]);
    assert_eq!(view.checkbox_state(a), SelectionState::Partial);

    assert!(view.toggle(c, true));
    assert_eq!(selected_keys(&view), vec!["A", "B", "C"]);
    assert_eq!(view.checkbox_state(a), SelectionState::Selected);

    assert_eq!(
        *reports.borrow(),
        vec![vec!["B".to_string()], vec!["A".to_string()]]
    );
}

#[test]
fn child_mode_reports_leaves_for_the_same_selection() {
    let options = ViewOptions {
        selection_mode: SelectionMode::Child,
        ..ViewOptions::default()
    };
    let mut view = TreeView::new(abc(), options);
    let a = view.tree().find_by_item_label("A").unwrap().key;

    view.toggle(a, true);

    assert_eq!(view.selected_labels(), vec!["B", "C"]);
}

#[test]
fn unchecking_a_child_unchecks_the_parent() {
    let mut view = TreeView::new(abc(), ViewOptions::default());
    let a = view.tree().find_by_item_label("A").unwrap().key;
    let c = view.tree().find_by_item_label("C").unwrap().key;

    view.toggle(a, true);
    view.toggle(c, false);

    assert_eq!(selected_keys(&view), vec!["B"]);
    assert_eq!(view.selected_labels(), vec!["B"]);
}
