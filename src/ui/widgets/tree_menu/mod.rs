//! Tree Menu Widget
//!
//! Interactive picker over a `TreeView`: cursor navigation, tri-state
//! checkboxes, expand/collapse and a debounced search prompt.
//!
//! # Module Structure
//!
//! - `menu` - TreeMenu state management and action handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod render;

pub use input::run_interactive;
pub use menu::TreeMenu;
pub use render::render_tree_row;
