//! Treepick - searchable multi-select tree picker
//!
//! Treepick materializes a caller-supplied item graph into a keyed display
//! tree, keeps selection synchronized across items that appear in several
//! places, filters the tree by a search query, and reports the selection
//! back as labels.

pub mod config;
pub mod error;
pub mod items;
pub mod models;
pub mod tree;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use error::{TreepickError, TreepickResult};
pub use items::load_items;
pub use models::{ItemStyles, SelectionMode, SourceItem};
pub use tree::{NodeKey, NodeTree, Selection, SelectionState, TreeRow, TreeView, ViewOptions};
