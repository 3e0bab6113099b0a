//! Tree engine
//!
//! Turns a source item graph into a keyed display forest and keeps the
//! selection consistent across duplicated identities.
//!
//! # Module Structure
//!
//! - `exclude` - exclusion labels to a closed set of identities
//! - `builder` - materialization of display nodes
//! - `node` - node arena and identity index
//! - `search` - search filtering of the forest
//! - `debounce` - settle delay for typed queries
//! - `selection` - selection propagation and tri-state
//! - `projection` - selected keys back to labels
//! - `view` - stateful controller combining the above

mod builder;
mod debounce;
mod exclude;
mod node;
mod projection;
mod search;
mod selection;
mod view;

pub use builder::build_tree;
pub use debounce::{SearchDebouncer, SEARCH_DEBOUNCE_MS};
pub use exclude::{resolve_exclusions, ExcludedIds};
pub use node::{Ancestors, DisplayNode, NodeKey, NodeTree};
pub use projection::project_labels;
pub use search::{filter_by_search, full_forest, VisibleNode};
pub use selection::{Selection, SelectionState};
pub use view::{SelectionSink, TreeRow, TreeView, ViewOptions};
