//! Configuration module for Treepick
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TREEPICK_*)
//! 3. Project config (./.treepick.toml)
//! 4. User config (~/.config/treepick/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{Config, OutputConfig, ViewConfig};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = ".treepick.toml";
