//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TreepickError, TreepickResult};
use crate::models::SelectionMode;

use super::types::Config;
use super::PROJECT_CONFIG_FILE;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TreepickResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TreepickError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// First existing config file: project, then user
pub fn discover(project_root: Option<&Path>) -> Option<PathBuf> {
    let project = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    project
        .into_iter()
        .chain(user_config_path())
        .find(|path| path.exists())
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    if let Some(path) = discover(project_root) {
        match Config::load(&path) {
            Ok(config) => return with_env_overrides(config),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "ignoring config"),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (TREEPICK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |name| std::env::var(name).ok())
}

/// Env override logic with an injectable lookup
pub(crate) fn apply_env<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // TREEPICK_SELECTION_MODE
    if let Some(mode) = get_env("TREEPICK_SELECTION_MODE") {
        match mode.parse::<SelectionMode>() {
            Ok(mode) => config.view.selection_mode = mode,
            Err(e) => tracing::warn!(error = %e, "ignoring TREEPICK_SELECTION_MODE"),
        }
    }

    // TREEPICK_NO_UNICODE
    if let Some(val) = get_env("TREEPICK_NO_UNICODE") {
        if !val.is_empty() && val != "0" && val.to_lowercase() != "false" {
            config.output.unicode = false;
        }
    }

    config
}

/// `<config dir>/treepick/config.toml`
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("treepick").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "view",
        "default_expanded",
        "collapsible",
        "checkbox",
        "multi_select",
        "selectable",
        "show_search",
        "show_selection",
        "show_end_icon_on_hover",
        "selection_mode",
        "search_debounce_ms",
        "output",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_chars.len()]
}
