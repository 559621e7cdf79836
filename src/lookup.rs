//! Generic key-to-position index building.

use std::collections::HashMap;
use std::hash::Hash;

/// Build a lookup from a key to the item's position in `items`.
///
/// Single left-to-right pass; when two items share a key, the later item's
/// position overwrites the earlier one. Duplicate keys are not expected
/// input, so no error is raised for them.
///
/// The lookup stores positions rather than references or clones, so the
/// owning sequence stays the single owner of its items. Used uniformly for
/// tables-by-id, fields-by-id, and operators-by-name.
pub fn build_lookup<T, K, F>(items: &[T], key: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut lookup = HashMap::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        lookup.insert(key(item), idx);
    }
    lookup
}
