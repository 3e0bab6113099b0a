//! Resolve exclusion labels to a closed set of identities.

use std::collections::HashSet;

use tracing::trace;

use crate::models::SourceItem;

/// Identities to render as empty placeholders
pub type ExcludedIds = HashSet<String>;

/// Resolve `labels` against `items`.
///
/// Each label excludes the first item (depth-first, source order) whose
/// label matches exactly, together with all of its descendants, nested or
/// linked through `parent_id`. Labels that match nothing are ignored.
pub fn resolve_exclusions<S: AsRef<str>>(items: &[SourceItem], labels: &[S]) -> ExcludedIds {
    let mut excluded = ExcludedIds::new();

    for label in labels {
        let label = label.as_ref();
        match find_by_label(items, label) {
            Some(item) => add_with_descendants(items, item, &mut excluded),
            None => trace!(label, "exclusion label matched no item"),
        }
    }

    excluded
}

fn find_by_label<'a>(items: &'a [SourceItem], label: &str) -> Option<&'a SourceItem> {
    for item in items {
        if item.label == label {
            return Some(item);
        }
        if let Some(children) = &item.children {
            if let Some(found) = find_by_label(children, label) {
                return Some(found);
            }
        }
    }
    None
}

fn add_with_descendants(roots: &[SourceItem], item: &SourceItem, excluded: &mut ExcludedIds) {
    // An id already present has had its descendants visited; this also
    // stops parent_id loops.
    if item.id.is_empty() || !excluded.insert(item.id.clone()) {
        return;
    }

    match &item.children {
        Some(children) => {
            for child in children {
                add_with_descendants(roots, child, excluded);
            }
        }
        None => {
            for child in roots
                .iter()
                .filter(|c| c.parent_id.as_deref() == Some(item.id.as_str()))
            {
                add_with_descendants(roots, child, excluded);
            }
        }
    }
}
