//! TreeView state controller.
//!
//! Owns the materialized tree together with the selected and expanded sets
//! and the search debouncer, and applies the widget options (selectable,
//! multi-select, collapsible, ...) before handing work to the engine.

use std::collections::{BTreeSet, HashSet};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::models::{ItemStyles, SelectionMode, SourceItem};

use super::builder::build_tree;
use super::debounce::{SearchDebouncer, SEARCH_DEBOUNCE_MS};
use super::exclude::{resolve_exclusions, ExcludedIds};
use super::node::{NodeKey, NodeTree};
use super::projection::project_labels;
use super::search::{filter_by_search, full_forest, VisibleNode};
use super::selection::{Selection, SelectionState};

/// Widget behavior flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    /// Expand every parent when the tree is first built
    pub default_expanded: bool,
    /// Allow expanding/collapsing; when off everything stays expanded
    pub collapsible: bool,
    /// Show checkboxes
    pub checkbox: bool,
    pub multi_select: bool,
    /// When off, selection is cleared and toggles are rejected
    pub selectable: bool,
    pub show_search: bool,
    /// Highlight rows whose key is selected
    pub show_selection: bool,
    /// Only show end icons on the active row
    pub show_end_icon_on_hover: bool,
    pub selection_mode: SelectionMode,
    pub search_debounce: Duration,
}

impl Default for ViewOptions {
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
            search_debounce: Duration::from_millis(SEARCH_DEBOUNCE_MS),
        }
    }
}

/// Receives the projected labels after every selection change
pub trait SelectionSink {
    fn selection_changed(&mut self, labels: &[String]);
}

impl<F> SelectionSink for F
where
    F: FnMut(&[String]),
{
    fn selection_changed(&mut self, labels: &[String]) {
        self(labels)
    }
}

/// One visible row, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub key: NodeKey,
    /// Depth level (0 = root)
    pub depth: usize,
    pub label: String,
    pub state: SelectionState,
    pub expanded: bool,
    /// Whether the node has visible children under the current search
    pub has_children: bool,
    pub disabled: bool,
    /// Row key is in the selected set and highlighting is on
    pub highlighted: bool,
    pub end_icon: Option<String>,
    pub always_show_end_icon: bool,
    pub styles: Option<ItemStyles>,
}

/// Stateful tree widget model
pub struct TreeView {
    items: Vec<SourceItem>,
    exclude: Vec<String>,
    initial_selections: Vec<String>,
    options: ViewOptions,
    excluded_ids: ExcludedIds,
    tree: NodeTree,
    selection: Selection,
    expanded: BTreeSet<NodeKey>,
    search: SearchDebouncer,
    visible: Vec<VisibleNode>,
    last_reset: u64,
    built: bool,
    disposed: bool,
    on_change: Option<Box<dyn SelectionSink>>,
}

impl TreeView {
    /// Build a view over `items`
    pub fn new(items: Vec<SourceItem>, options: ViewOptions) -> Self {
        let search = SearchDebouncer::new(options.search_debounce);
        let mut view = Self {
            items,
            exclude: Vec::new(),
            initial_selections: Vec::new(),
            options,
            excluded_ids: ExcludedIds::new(),
            tree: NodeTree::default(),
            selection: Selection::new(),
            expanded: BTreeSet::new(),
            search,
            visible: Vec::new(),
            last_reset: 0,
            built: false,
            disposed: false,
            on_change: None,
        };
        view.rebuild();
        view
    }

    pub fn with_excluded(mut self, labels: Vec<String>) -> Self {
        self.set_excluded(labels);
        self
    }

    pub fn with_initial_selections(mut self, labels: Vec<String>) -> Self {
        self.set_initial_selections(labels);
        self
    }

    pub fn with_on_change(mut self, sink: impl SelectionSink + 'static) -> Self {
        self.on_change = Some(Box::new(sink));
        self
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn expanded(&self) -> &BTreeSet<NodeKey> {
        &self.expanded
    }

    /// Forest filtered by the settled search query
    pub fn visible_forest(&self) -> &[VisibleNode] {
        &self.visible
    }

    /// Replace the item graph and rebuild
    pub fn set_items(&mut self, items: Vec<SourceItem>) {
        self.items = items;
        self.rebuild();
    }

    /// Replace the exclusion labels and rebuild
    pub fn set_excluded(&mut self, labels: Vec<String>) {
        self.exclude = labels;
        self.rebuild();
    }

    /// Select items by label without notifying the sink. Ignored while the
    /// view is not selectable.
    pub fn set_initial_selections(&mut self, labels: Vec<String>) {
        if self.options.selectable {
            self.selection.select_labels(&self.tree, &labels);
        }
        self.initial_selections = labels;
    }

    /// Apply new options, re-deriving expansion and clearing selection when
    /// the relevant flags change
    pub fn set_options(&mut self, options: ViewOptions) {
        let expansion_changed = options.default_expanded != self.options.default_expanded
            || options.collapsible != self.options.collapsible;
        let selectable_lost = self.options.selectable && !options.selectable;

        self.search.set_delay(options.search_debounce);
        self.options = options;

        if expansion_changed {
            self.expanded = self.default_expansion();
        }
        if selectable_lost {
            self.selection.clear();
            self.notify();
        }
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        let options = ViewOptions {
            selectable,
            ..self.options.clone()
        };
        self.set_options(options);
    }

    /// Toggle `key` to `checked`. Returns false when the toggle was rejected
    /// (not selectable, disabled node, unknown key, disposed view).
    pub fn toggle(&mut self, key: NodeKey, checked: bool) -> bool {
        if self.disposed || !self.options.selectable {
            return false;
        }
        match self.tree.get(key) {
            Some(node) if !node.disabled && !node.is_placeholder() => {}
            _ => return false,
        }

        self.selection
            .toggle(&self.tree, key, checked, self.options.multi_select);
        self.notify();
        true
    }

    /// Flip the checkbox of `key` based on its displayed state
    pub fn toggle_checkbox(&mut self, key: NodeKey) -> bool {
        let checked = self.checkbox_state(key).is_checked();
        self.toggle(key, !checked)
    }

    pub fn checkbox_state(&self, key: NodeKey) -> SelectionState {
        self.selection.state(&self.tree, key)
    }

    /// Expand or collapse `key`. Ignored when not collapsible or for leaves.
    pub fn toggle_expand(&mut self, key: NodeKey) -> bool {
        if !self.options.collapsible || !self.tree.get(key).is_some_and(|n| n.has_children()) {
            return false;
        }
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }
        true
    }

    pub fn set_expanded(&mut self, key: NodeKey, expanded: bool) -> bool {
        if self.is_expanded(key) == expanded {
            return false;
        }
        self.toggle_expand(key)
    }

    pub fn is_expanded(&self, key: NodeKey) -> bool {
        !self.options.collapsible || self.expanded.contains(&key)
    }

    /// Record a keystroke in the search box
    pub fn set_search(&mut self, query: impl Into<String>, now: Instant) {
        if self.disposed {
            return;
        }
        self.search.input(query, now);
    }

    /// Apply a settled search query. Returns true when the filter changed.
    pub fn poll_search(&mut self, now: Instant) -> bool {
        if self.search.poll(now) {
            self.refilter();
            return true;
        }
        false
    }

    /// Filter immediately, skipping the debounce
    pub fn apply_search_now(&mut self, query: impl Into<String>) {
        self.search.settle_now(query);
        self.refilter();
    }

    /// Text currently in the search box
    pub fn search_text(&self) -> &str {
        self.search.current()
    }

    pub fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Clear selection when `counter` moved past the last seen value
    pub fn apply_reset(&mut self, counter: u64) {
        if counter <= self.last_reset {
            return;
        }
        self.last_reset = counter;
        debug!(counter, "selection reset");
        self.clear_selection();
    }

    pub fn clear_selection(&mut self) {
        if self.disposed {
            return;
        }
        self.selection.clear();
        self.notify();
    }

    /// Labels the host would receive right now
    pub fn selected_labels(&self) -> Vec<String> {
        project_labels(&self.tree, &self.selection, self.options.selection_mode)
    }

    /// Visible rows in display order: placeholders skipped, collapsed
    /// subtrees hidden, search applied
    pub fn rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        for node in &self.visible {
            self.collect_rows(node, &mut rows);
        }
        rows
    }

    /// Cancel pending work and detach the sink
    pub fn dispose(&mut self) {
        self.search.cancel();
        self.on_change = None;
        self.disposed = true;
    }

    fn collect_rows(&self, visible: &VisibleNode, rows: &mut Vec<TreeRow>) {
        let Some(node) = self.tree.get(visible.key) else {
            return;
        };
        if node.is_placeholder() {
            return;
        }

        let has_children = visible
            .children
            .iter()
            .any(|c| self.tree.get(c.key).is_some_and(|n| !n.is_placeholder()));
        let expanded = has_children && self.is_expanded(node.key);

        rows.push(TreeRow {
            key: node.key,
            depth: node.depth,
            label: node.label.clone(),
            state: self.checkbox_state(node.key),
            expanded,
            has_children,
            disabled: node.disabled,
            highlighted: self.options.show_selection && self.selection.contains(node.key),
            end_icon: node.end_icon.clone(),
            always_show_end_icon: node.always_show_end_icon,
            styles: node.styles.clone(),
        });

        if expanded {
            for child in &visible.children {
                self.collect_rows(child, rows);
            }
        }
    }

    fn rebuild(&mut self) {
        let previous_labels = self.built.then(|| self.selected_labels());
        let previously_expanded: HashSet<String> = self
            .expanded
            .iter()
            .filter_map(|k| self.tree.get(*k))
            .map(|n| n.source_id.clone())
            .collect();

        self.excluded_ids = resolve_exclusions(&self.items, &self.exclude);
        self.tree = build_tree(&self.items, &self.excluded_ids);

        self.selection.clear();
        if self.options.selectable {
            self.selection
                .select_labels(&self.tree, &self.initial_selections);
        }

        self.expanded = if self.built {
            self.tree
                .iter()
                .filter(|n| n.has_children() && previously_expanded.contains(&n.source_id))
                .map(|n| n.key)
                .collect()
        } else {
            self.default_expansion()
        };
        self.built = true;

        self.refilter();
        debug!(
            nodes = self.tree.len(),
            selected = self.selection.len(),
            expanded = self.expanded.len(),
            "tree rebuilt"
        );

        if previous_labels.is_some_and(|before| before != self.selected_labels()) {
            self.notify();
        }
    }

    fn default_expansion(&self) -> BTreeSet<NodeKey> {
        if self.options.default_expanded || !self.options.collapsible {
            self.tree
                .iter()
                .filter(|n| n.has_children())
                .map(|n| n.key)
                .collect()
        } else {
            BTreeSet::new()
        }
    }

    fn refilter(&mut self) {
        let forest = full_forest(&self.tree);
        self.visible = filter_by_search(&self.tree, &forest, self.search.settled());
    }

    fn notify(&mut self) {
        let labels = self.selected_labels();
        debug!(count = labels.len(), "selection changed");
        if let Some(sink) = self.on_change.as_mut() {
            sink.selection_changed(&labels);
        }
    }
}

impl Drop for TreeView {
    fn drop(&mut self) {
        self.search.cancel();
    }
}
