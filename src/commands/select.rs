use std::path::Path;

use anyhow::Result;
use treepick::{SelectionMode, TreeView, ViewOptions};

use crate::cli::TreeArgs;

use super::common::{build_view, load_config};

pub fn cmd_select(
    tree: &TreeArgs,
    toggle: &[String],
    untoggle: &[String],
    mode: Option<SelectionMode>,
    single: bool,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let defaults = config.view_options();
    let options = ViewOptions {
        selection_mode: mode.unwrap_or(defaults.selection_mode),
        multi_select: defaults.multi_select && !single,
        ..defaults
    };

    let mut view = build_view(tree, options)?;
    for label in toggle {
        apply_label(&mut view, label, true);
    }
    for label in untoggle {
        apply_label(&mut view, label, false);
    }

    let labels = view.selected_labels();
    if json {
        println!("{}", serde_json::to_string(&labels)?);
    } else {
        for label in &labels {
            println!("{}", label);
        }
    }
    Ok(())
}

/// Toggle the first node carrying `label`; its duplicates follow
fn apply_label(view: &mut TreeView, label: &str, checked: bool) {
    let Some(key) = view.tree().find_by_item_label(label).map(|n| n.key) else {
        tracing::warn!(label, "no item with this label");
        return;
    };
    if !view.toggle(key, checked) {
        tracing::warn!(label, %key, "toggle rejected");
    }
}
