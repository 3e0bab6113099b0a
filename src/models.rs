//! Core data models for Treepick
//!
//! Defines the caller-supplied item graph and the reporting policy:
//! - `SourceItem`: one entity in the input hierarchy (nested or flat)
//! - `ItemStyles`: per-item presentation hints passed through to rendering
//! - `SelectionMode`: which selected labels are reported to the host

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TreepickError;

/// Per-item presentation hints
///
/// The engine never interprets these; they are carried onto display nodes
/// so a renderer can apply them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// An item in the caller-supplied hierarchy
///
/// `id` is not required to be unique: the same id may appear under several
/// parents, and every occurrence is treated as one logical entity when
/// selecting. Items may nest through `children`, or sit in a flat list and
/// point at their parent through `parent_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceItem {
    /// Caller-assigned identity. Items with an empty id are dropped.
    #[serde(default)]
    pub id: String,

    /// Display text
    pub label: String,

    /// Extra text shown in parentheses after the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,

    /// Parent identity for the flat form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(default)]
    pub disabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<ItemStyles>,

    /// Nested children. Takes precedence over `parent_id` lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SourceItem>>,

    /// Decoration rendered at the end of the row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_icon: Option<String>,

    /// Show `end_icon` even when the renderer only shows it on hover
    #[serde(default)]
    pub always_show_end_icon: bool,
}

impl SourceItem {
    /// Create an item with an id and label
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the remark
    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }

    /// Set the parent id (flat form)
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Set nested children
    pub fn with_children(mut self, children: Vec<SourceItem>) -> Self {
        self.children = Some(children);
        self
    }

    /// Mark the item disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set the end decoration
    pub fn with_end_icon(mut self, icon: impl Into<String>) -> Self {
        self.end_icon = Some(icon.into());
        self
    }

    /// Label as displayed: `label (remark)` when a remark is present
    pub fn display_label(&self) -> String {
        match &self.remark {
            Some(remark) => format!("{} ({})", self.label, remark),
            None => self.label.clone(),
        }
    }
}

/// Which selected labels are reported to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Every selected item
    All,
    /// Only the top-most selected item of each branch
    #[default]
    Parent,
    /// Only selected items without selected children
    Child,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::All => "all",
            SelectionMode::Parent => "parent",
            SelectionMode::Child => "child",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = TreepickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(SelectionMode::All),
            "parent" => Ok(SelectionMode::Parent),
            "child" => Ok(SelectionMode::Child),
            other => Err(TreepickError::UnknownSelectionMode {
                value: other.to_string(),
            }),
        }
    }
}
