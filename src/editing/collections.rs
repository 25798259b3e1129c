//! Ordered-collection helpers used by editors.

use std::collections::HashMap;
use std::hash::Hash;

/// Removes repeated values in place, keeping the **last** occurrence of each.
///
/// Kept elements stay in their original relative order, so
/// `["a", "b", "a"]` becomes `["b", "a"]`.
pub fn remove_duplicates<T: PartialEq>(items: &mut Vec<T>) {
    let mut kept: Vec<T> = Vec::with_capacity(items.len());
    for item in items.drain(..).rev() {
        if !kept.contains(&item) {
            kept.push(item);
        }
    }
    kept.reverse();
    *items = kept;
}

/// Copying variant of [`remove_duplicates`].
pub fn removing_duplicates<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    remove_duplicates(&mut out);
    out
}

/// Method-call form of the duplicate helpers.
pub trait RemoveDuplicates {
    fn remove_duplicates(&mut self);

    fn removing_duplicates(&self) -> Self;
}

impl<T: PartialEq + Clone> RemoveDuplicates for Vec<T> {
    fn remove_duplicates(&mut self) {
        remove_duplicates(self);
    }

    fn removing_duplicates(&self) -> Self {
        removing_duplicates(self)
    }
}

/// Maps each item to a key; later items win on key collisions.
pub fn index_by<T, K, F>(items: &[T], mut key: F) -> HashMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    items.iter().map(|item| (key(item), item.clone())).collect()
}

/// Maps each item to a computed value, keyed by the item itself.
pub fn index_with<T, V, F>(items: &[T], mut value: F) -> HashMap<T, V>
where
    T: Clone + Eq + Hash,
    F: FnMut(&T) -> V,
{
    items.iter().map(|item| (item.clone(), value(item))).collect()
}
