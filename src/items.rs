//! Item file loading.
//!
//! Item files are JSON arrays of [`SourceItem`]s, nested through `children`
//! or flat through `parent_id`.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{TreepickError, TreepickResult};
use crate::models::SourceItem;

/// Read a JSON item file
pub fn load_items(path: &Path) -> TreepickResult<Vec<SourceItem>> {
    if !path.exists() {
        return Err(TreepickError::ItemFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let items = parse_items(&content).map_err(|e| TreepickError::InvalidItems {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(path = %path.display(), top_level = items.len(), "loaded items");
    Ok(items)
}

/// Parse items from JSON text
pub fn parse_items(content: &str) -> Result<Vec<SourceItem>, serde_json::Error> {
    serde_json::from_str(content)
}
