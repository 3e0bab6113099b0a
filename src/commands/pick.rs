use std::path::Path;

use anyhow::{bail, Result};
use treepick::{SelectionMode, ViewOptions};

use crate::cli::TreeArgs;
use crate::ui::terminal::detect_capabilities;
use crate::ui::widgets::tree_menu::{run_interactive, TreeMenu};

use super::common::{build_view, load_config};

pub fn cmd_pick(
    tree: &TreeArgs,
    mode: Option<SelectionMode>,
    single: bool,
    collapsed: bool,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let defaults = config.view_options();
    let options = ViewOptions {
        selection_mode: mode.unwrap_or(defaults.selection_mode),
        multi_select: defaults.multi_select && !single,
        default_expanded: defaults.default_expanded && !collapsed,
        ..defaults
    };

    let mut caps = detect_capabilities();
    if !caps.is_tty {
        bail!("treepick pick needs an interactive terminal; use `treepick select` in scripts");
    }
    caps.supports_unicode &= config.output.unicode;

    let view = build_view(tree, options)?;
    let mut menu = TreeMenu::new(view);
    let title = format!("Treepick: {}", tree.items.display());

    let Some(labels) = run_interactive(&mut menu, &caps, &title)? else {
        tracing::info!("picker closed without confirming");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string(&labels)?);
    } else {
        for label in &labels {
            println!("{}", label);
        }
    }
    Ok(())
}
