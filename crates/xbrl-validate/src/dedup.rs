//! Grouping of entities by canonical signature.
//!
//! Used to find duplicated contexts and units: two entities are duplicates
//! exactly when their signatures compare equal. Groups, and the members
//! within each group, keep first-seen document order, so the first member of
//! a group is the canonical one to cite in "duplicate of X" messages.

use std::collections::HashMap;
use std::hash::Hash;

/// Bucket `items` by equality of `key`, preserving discovery order.
pub fn group_by_key<'a, T, K, F>(
    items: impl IntoIterator<Item = &'a T>,
    mut key: F,
) -> Vec<Vec<&'a T>>
where
    T: ?Sized,
    K: Eq + Hash,
    F: FnMut(&'a T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Vec<&'a T>> = Vec::new();
    for item in items {
        match index.entry(key(item)) {
            std::collections::hash_map::Entry::Occupied(slot) => {
                groups[*slot.get()].push(item);
            }
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push(vec![item]);
            }
        }
    }
    groups
}
