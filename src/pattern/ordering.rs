use crate::path::Path;
use std::cmp::Ordering;

#[inline]
pub(crate) fn specified_first<T>(
    a: Option<&T>,
    b: Option<&T>,
    cmp: impl FnOnce(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn context_path_order(a: &Path, b: &Path) -> Ordering {
    a.depth()
        .cmp(&b.depth())
        .then_with(|| a.as_str().cmp(b.as_str()))
}

/// Deeper prefixes first, then lexical.
pub fn prefix_order(a: &Path, b: &Path) -> Ordering {
    b.depth()
        .cmp(&a.depth())
        .then_with(|| a.as_str().cmp(b.as_str()))
}
