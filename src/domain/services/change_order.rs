//! Change selection and ordering
//!
//! Picks the changes aimed at one file and orders them: input order first,
//! priority as a stable override on top.

use crate::domain::entities::FileChange;

/// Changes whose path equals `path`, ordered by priority
///
/// `sort_by_key` is stable, so changes of equal priority keep their
/// relative input order.
pub fn select<'a, M>(changes: &'a [FileChange<M>], path: &str) -> Vec<&'a FileChange<M>> {
    let mut selected: Vec<&FileChange<M>> = changes
        .iter()
        .filter(|change| change.path() == path)
        .collect();
    selected.sort_by_key(|change| change.priority());
    selected
}
