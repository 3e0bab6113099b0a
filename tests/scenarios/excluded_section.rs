//! Scenario: excluding a section hides it and everything under it.

use treepick::{SourceItem, TreeView, ViewOptions};

fn board() -> Vec<SourceItem> {
    vec![
        SourceItem::new("home", "Home"),
        SourceItem::new("board", "Board").with_children(vec![
            SourceItem::new("notices", "Notices").with_children(vec![
                SourceItem::new("general", "General"),
                SourceItem::new("events", "Events"),
                SourceItem::new("press", "Press"),
                SourceItem::new("jobs", "Jobs"),
            ]),
            SourceItem::new("qa", "Q&A"),
        ]),
    ]
}

fn row_labels(view: &TreeView) -> Vec<String> {
    view.rows().into_iter().map(|r| r.label).collect()
}

#[test]
fn excluded_section_and_children_disappear() {
    let full = TreeView::new(board(), ViewOptions::default());
    let view = TreeView::new(board(), ViewOptions::default())
        .with_excluded(vec!["Notices".to_string()]);

    assert_eq!(full.rows().len(), 8);
    assert_eq!(row_labels(&view), vec!["Home", "Board", "Q&A"]);
    assert_eq!(full.rows().len() - view.rows().len(), 5);
}

#[test]
fn siblings_keep_their_slots() {
    let full = TreeView::new(board(), ViewOptions::default());
    let view = TreeView::new(board(), ViewOptions::default())
        .with_excluded(vec!["Notices".to_string()]);

    // Keys before the excluded section are unchanged
    for label in ["Home", "Board"] {
        assert_eq!(
            full.tree().find_by_item_label(label).unwrap().key,
            view.tree().find_by_item_label(label).unwrap().key
        );
    }

    // Board still has two child slots, Q&A in the second one
    let board = view.tree().find_by_item_label("Board").unwrap();
    assert_eq!(board.children.len(), 2);
    let placeholder = view.tree().get(board.children[0]).unwrap();
    assert!(placeholder.is_placeholder());
    assert!(placeholder.children.is_empty());
    assert_eq!(view.tree().get(board.children[1]).unwrap().label, "Q&A");
}

#[test]
fn excluded_labels_cannot_be_selected() {
    let mut view = TreeView::new(board(), ViewOptions::default())
        .with_excluded(vec!["Notices".to_string()]);

    assert!(view.tree().find_by_item_label("General").is_none());

    let qa = view.tree().find_by_item_label("Q&A").unwrap().key;
    view.toggle(qa, true);
    assert_eq!(view.selected_labels(), vec!["Q&A"]);
}
