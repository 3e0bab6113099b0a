//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TreepickResult;
use crate::models::SelectionMode;
use crate::tree::{ViewOptions, SEARCH_DEBOUNCE_MS};

use super::loader::{self, ConfigWarning};

/// Tree widget behavior (`[view]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_true")]
    pub default_expanded: bool,

    #[serde(default = "default_true")]
    pub collapsible: bool,

    #[serde(default = "default_true")]
    pub checkbox: bool,

    #[serde(default = "default_true")]
    pub multi_select: bool,

    #[serde(default = "default_true")]
    pub selectable: bool,

    #[serde(default = "default_true")]
    pub show_search: bool,

    #[serde(default)]
    pub show_selection: bool,

    #[serde(default)]
    pub show_end_icon_on_hover: bool,

    #[serde(default)]
    pub selection_mode: SelectionMode,

    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_expanded: true,
            collapsible: true,
            checkbox: true,
            multi_select: true,
            selectable: true,
            show_search: true,
            show_selection: false,
            show_end_icon_on_hover: false,
            selection_mode: SelectionMode::default(),
            search_debounce_ms: default_debounce_ms(),
        }
    }
}

/// Terminal output (`[output]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Use unicode glyphs for checkboxes and expanders
    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { unicode: true }
    }
}

fn default_true() -> bool {
    true
}

fn default_debounce_ms() -> u64 {
    SEARCH_DEBOUNCE_MS
}

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TreepickResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TreepickResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Locate the config file to use: project config, then user config
    pub fn discover(project_root: Option<&Path>) -> Option<PathBuf> {
        loader::discover(project_root)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (TREEPICK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Widget options derived from `[view]`
    pub fn view_options(&self) -> ViewOptions {
        let view = &self.view;
        ViewOptions {
            default_expanded: view.default_expanded,
            collapsible: view.collapsible,
            checkbox: view.checkbox,
            multi_select: view.multi_select,
            selectable: view.selectable,
            show_search: view.show_search,
            show_selection: view.show_selection,
            show_end_icon_on_hover: view.show_end_icon_on_hover,
            selection_mode: view.selection_mode,
            search_debounce: Duration::from_millis(view.search_debounce_ms),
        }
    }
}
