//! Terminal rendering functions for tree menu.
//!
//! This module provides functions to render tree rows, status bars,
//! and help text to strings for terminal output.

use treepick::tree::{SelectionState, TreeRow, ViewOptions};

use crate::ui::theme::{glyph, icons, icons_ascii};

/// Checkbox glyph for a tri-state value
pub fn state_icon(state: SelectionState, supports_unicode: bool) -> &'static str {
    match state {
        SelectionState::Selected => glyph(supports_unicode, icons::SELECTED, icons_ascii::SELECTED),
        SelectionState::Unselected => {
            glyph(supports_unicode, icons::UNSELECTED, icons_ascii::UNSELECTED)
        }
        SelectionState::Partial => glyph(supports_unicode, icons::PARTIAL, icons_ascii::PARTIAL),
    }
}

/// Render a single tree row to a string
pub fn render_tree_row(
    row: &TreeRow,
    is_active: bool,
    options: &ViewOptions,
    supports_unicode: bool,
) -> String {
    let indent = "  ".repeat(row.depth);
    let cursor = if is_active {
        format!("{} ", glyph(supports_unicode, icons::CURSOR, icons_ascii::CURSOR))
    } else {
        String::from("  ")
    };

    // Expansion icon (only for nodes with visible children)
    let expand_icon = if !row.has_children {
        String::from("  ")
    } else if row.expanded {
        format!("{} ", glyph(supports_unicode, icons::EXPAND, icons_ascii::EXPAND))
    } else {
        format!("{} ", glyph(supports_unicode, icons::COLLAPSE, icons_ascii::COLLAPSE))
    };

    let checkbox = if options.checkbox {
        format!("{} ", state_icon(row.state, supports_unicode))
    } else {
        String::new()
    };

    let mut line = format!("{}{}{}{}{}", cursor, indent, expand_icon, checkbox, row.label);

    if row.disabled {
        line.push_str(" (disabled)");
    }
    if row.highlighted {
        line.push_str(" *");
    }
    if let Some(icon) = &row.end_icon {
        let visible = row.always_show_end_icon || !options.show_end_icon_on_hover || is_active;
        if visible {
            line.push_str("  ");
            line.push_str(icon);
        }
    }

    line
}

/// Render the status bar showing selection counts and the active query
pub fn render_status_bar(
    selected: usize,
    total: usize,
    query: &str,
    supports_unicode: bool,
) -> String {
    let selected_icon = state_icon(SelectionState::Selected, supports_unicode);
    let partial_icon = state_icon(SelectionState::Partial, supports_unicode);
    let unselected_icon = state_icon(SelectionState::Unselected, supports_unicode);

    let mut status = format!("Selected: {}/{} items", selected, total);
    if !query.is_empty() {
        let search_icon = glyph(supports_unicode, icons::SEARCH, icons_ascii::SEARCH);
        status.push_str(&format!("    {} {}", search_icon, query));
    }

    format!(
        "{}\n\n{} = selected    {} = partial    {} = not selected",
        status, selected_icon, partial_icon, unselected_icon
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(searching: bool) -> String {
    if searching {
        return String::from("Type to filter    [Enter] Done    [Esc] Clear search");
    }
    String::from(
        "[/] Search    [c] Clear    [Enter] Confirm    [q] Quit\n\
         (Use ↑↓ to navigate, Space to toggle, →← to expand/collapse)",
    )
}
