//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_treepick")
}

/// Write `items` as an item file inside `dir`
pub fn write_items(dir: &Path, items: &serde_json::Value) -> PathBuf {
    let path = dir.join("items.json");
    std::fs::write(&path, serde_json::to_string_pretty(items).unwrap()).unwrap();
    path
}

/// Department board with a duplicated member and a Notices section
pub fn board_items() -> serde_json::Value {
    json!([
        { "id": "home", "label": "Home" },
        { "id": "board", "label": "Board", "children": [
            { "id": "notices", "label": "Notices", "children": [
                { "id": "general", "label": "General" },
                { "id": "events", "label": "Events" },
                { "id": "press", "label": "Press" },
                { "id": "jobs", "label": "Jobs" }
            ]},
            { "id": "qa", "label": "Q&A" }
        ]},
        { "id": "teams", "label": "Teams", "children": [
            { "id": "p1", "label": "Platform", "children": [
                { "id": "x", "label": "Xavier" },
                { "id": "q", "label": "Quinn" }
            ]},
            { "id": "p2", "label": "Product", "children": [
                { "id": "x", "label": "Xavier" },
                { "id": "r", "label": "Riley", "remark": "lead" }
            ]}
        ]}
    ])
}

/// Temp dir with the board item file written into it
pub fn board_fixture() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = write_items(dir.path(), &board_items());
    (dir, path)
}
