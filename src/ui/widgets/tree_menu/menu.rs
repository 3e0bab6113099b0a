//! TreeMenu state management and action handling.
//!
//! The menu wraps a [`TreeView`] with a cursor over its visible rows and a
//! search-entry mode, and maps user actions onto view operations.

use std::time::Instant;

use treepick::tree::{NodeKey, TreeRow, TreeView};

use super::render::{render_help_bar, render_status_bar, render_tree_row};

/// Tree menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Toggle selection
    Toggle,
    /// Expand node
    Expand,
    /// Collapse node
    Collapse,
    /// Enter search mode
    StartSearch,
    /// Append a character to the query
    SearchInput(char),
    /// Remove the last character of the query
    SearchBackspace,
    /// Leave search mode, keeping the query
    EndSearch,
    /// Leave search mode and drop the query
    ClearSearch,
    /// Deselect everything
    ClearSelection,
    /// Confirm selection
    Confirm,
    /// Quit without confirming
    Quit,
}

/// Interactive tree menu over a [`TreeView`]
pub struct TreeMenu {
    view: TreeView,
    /// Current cursor position in the visible rows
    pub cursor: usize,
    rows: Vec<TreeRow>,
    searching: bool,
    query: String,
}

impl TreeMenu {
    pub fn new(view: TreeView) -> Self {
        let query = view.search_text().to_string();
        let mut menu = Self {
            view,
            cursor: 0,
            rows: Vec::new(),
            searching: false,
            query,
        };
        menu.rebuild_rows();
        menu
    }

    /// Refresh rows from the view, keeping the cursor on the same node
    /// when it is still visible
    pub fn rebuild_rows(&mut self) {
        let current = self.current_key();
        self.rows = self.view.rows();

        if let Some(pos) = current.and_then(|k| self.rows.iter().position(|r| r.key == k)) {
            self.cursor = pos;
        } else if self.rows.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }

    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Query as typed so far
    pub fn query(&self) -> &str {
        &self.query
    }

    fn current_key(&self) -> Option<NodeKey> {
        self.rows.get(self.cursor).map(|r| r.key)
    }

    /// Handle a tree action. Returns true when the menu should close.
    pub fn handle_action(&mut self, action: TreeAction) -> bool {
        self.handle_action_at(action, Instant::now())
    }

    /// Handle a tree action with an explicit clock for search debouncing
    pub fn handle_action_at(&mut self, action: TreeAction, now: Instant) -> bool {
        match action {
            TreeAction::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                false
            }
            TreeAction::Down => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
                false
            }
            TreeAction::Toggle => {
                if let Some(key) = self.current_key() {
                    self.view.toggle_checkbox(key);
                    self.rebuild_rows();
                }
                false
            }
            TreeAction::Expand => {
                if let Some(key) = self.current_key() {
                    self.view.set_expanded(key, true);
                    self.rebuild_rows();
                }
                false
            }
            TreeAction::Collapse => {
                if let Some(key) = self.current_key() {
                    self.view.set_expanded(key, false);
                    self.rebuild_rows();
                }
                false
            }
            TreeAction::StartSearch => {
                self.searching = self.view.options().show_search;
                false
            }
            TreeAction::SearchInput(c) => {
                if self.searching {
                    self.query.push(c);
                    self.view.set_search(self.query.clone(), now);
                }
                false
            }
            TreeAction::SearchBackspace => {
                if self.searching && self.query.pop().is_some() {
                    self.view.set_search(self.query.clone(), now);
                }
                false
            }
            TreeAction::EndSearch => {
                self.searching = false;
                false
            }
            TreeAction::ClearSearch => {
                self.searching = false;
                self.query.clear();
                self.view.apply_search_now("");
                self.rebuild_rows();
                false
            }
            TreeAction::ClearSelection => {
                self.view.clear_selection();
                self.rebuild_rows();
                false
            }
            TreeAction::Confirm => true,
            TreeAction::Quit => true,
        }
    }

    /// Settle a due search query. Returns true when rows changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.view.poll_search(now) {
            self.rebuild_rows();
            return true;
        }
        false
    }

    /// When the next search query is due, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.view.search_deadline()
    }

    /// Labels the host receives on confirm
    pub fn selected_labels(&self) -> Vec<String> {
        self.view.selected_labels()
    }

    /// Distinct selected identities
    pub fn selected_count(&self) -> usize {
        self.view.selection().identity_count(self.view.tree())
    }

    /// Distinct identities in the tree
    pub fn total_count(&self) -> usize {
        self.view.tree().identity_count()
    }

    /// Render the visible rows to a string
    pub fn render(&self, supports_unicode: bool) -> String {
        let mut out = String::new();

        for (i, row) in self.rows.iter().enumerate() {
            let is_active = i == self.cursor;
            let line = render_tree_row(row, is_active, self.view.options(), supports_unicode);
            out.push_str(&line);
            out.push('\n');
        }

        out
    }

    /// Render the status bar
    pub fn render_status_bar(&self, supports_unicode: bool) -> String {
        render_status_bar(
            self.selected_count(),
            self.total_count(),
            &self.query,
            supports_unicode,
        )
    }

    /// Render the help bar
    pub fn render_help_bar(&self) -> String {
        render_help_bar(self.searching)
    }
}
