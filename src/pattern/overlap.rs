use crate::pattern::{PartialUrl, SinglePattern};
use hashbrown::HashSet as FastHashSet;
use std::hash::Hash;

// Value sets at or below this size are intersected by scanning.
const SCAN_THRESHOLD: usize = 8;

impl PartialUrl {
    /// The first of this pattern's combinations that `other` also stands for.
    pub fn shared_combination(&self, other: &PartialUrl) -> Option<SinglePattern> {
        let ours = self.slices();
        let theirs = other.slices();
        Some(SinglePattern::from_parts(
            first_common(ours.schemes, theirs.schemes)?,
            first_common(ours.hosts, theirs.hosts)?,
            first_common(ours.ports, theirs.ports)?,
            first_common(ours.context_paths, theirs.context_paths)?,
            first_common(ours.prefixes, theirs.prefixes)?,
        ))
    }
}

// `Some(None)` when both are wildcards, `None` when the field cannot agree.
fn first_common<T: Clone + Eq + Hash>(
    ours: Option<&[T]>,
    theirs: Option<&[T]>,
) -> Option<Option<T>> {
    match (ours, theirs) {
        (None, None) => Some(None),
        (Some(ours), Some(theirs)) => {
            let found = if theirs.len() <= SCAN_THRESHOLD {
                ours.iter().find(|value| theirs.contains(*value))
            } else {
                let index: FastHashSet<&T> = theirs.iter().collect();
                ours.iter().find(|value| index.contains(value))
            };
            found.cloned().map(Some)
        }
        _ => None,
    }
}
