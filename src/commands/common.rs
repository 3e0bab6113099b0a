use std::path::Path;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use treepick::{load_items, Config, ConfigWarning, TreeView, ViewOptions};

use crate::cli::TreeArgs;
use crate::ui::theme::{colors, glyph, icons, icons_ascii, paint};

/// Resolve configuration: explicit file, else project/user discovery, then
/// environment overrides. Unknown keys are reported on stderr.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            Config::discover(Some(&cwd))
        }
    };

    let config = match path {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            print_config_warnings(&warnings, config.output.unicode);
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => Config::default(),
    };

    Ok(config.with_env_overrides())
}

fn print_config_warnings(warnings: &[ConfigWarning], unicode: bool) {
    let icon = glyph(unicode, icons::WARNING, icons_ascii::WARNING);
    let color = std::io::stderr().is_terminal();

    for warning in warnings {
        let location = warning
            .line
            .map(|line| format!(":{}", line))
            .unwrap_or_default();
        eprintln!(
            "{} Unknown config key '{}' in {}{}{}",
            paint(icon, colors::WARNING, color),
            warning.key,
            warning.file.display(),
            location,
            warning
                .suggestion
                .as_ref()
                .map(|s| format!(". Did you mean '{}'?", s))
                .unwrap_or_default()
        );
    }
}

/// Load the item file and build a view with the shared tree arguments
pub fn build_view(args: &TreeArgs, options: ViewOptions) -> Result<TreeView> {
    let items = load_items(&args.items)
        .with_context(|| format!("Failed to load items from {}", args.items.display()))?;

    Ok(TreeView::new(items, options)
        .with_excluded(args.exclude.clone())
        .with_initial_selections(args.select.clone()))
}
