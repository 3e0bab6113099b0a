use std::path::Path;

use anyhow::Result;
use treepick::{SelectionState, ViewOptions};

use crate::cli::TreeArgs;
use crate::ui::widgets::tree_menu::render_tree_row;

use super::common::{build_view, load_config};

pub fn cmd_show(
    tree: &TreeArgs,
    search: Option<&str>,
    collapsed: bool,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let defaults = config.view_options();
    let options = ViewOptions {
        default_expanded: defaults.default_expanded && !collapsed,
        ..defaults
    };

    let mut view = build_view(tree, options)?;
    if let Some(query) = search {
        view.apply_search_now(query);
    }
    let rows = view.rows();

    if json {
        let rows: Vec<serde_json::Value> = rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "key": row.key.to_string(),
                    "depth": row.depth,
                    "label": row.label,
                    "state": state_name(row.state),
                    "expanded": row.expanded,
                    "has_children": row.has_children,
                    "disabled": row.disabled,
                    "end_icon": row.end_icon,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        println!(
            "{}",
            render_tree_row(row, false, view.options(), config.output.unicode)
        );
    }
    Ok(())
}

fn state_name(state: SelectionState) -> &'static str {
    match state {
        SelectionState::Selected => "selected",
        SelectionState::Unselected => "unselected",
        SelectionState::Partial => "partial",
    }
}
