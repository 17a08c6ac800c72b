//! Deduplication of sequences
//!
//! The unsorted paths track what they have seen in a hash set, so equality is
//! whatever `Eq`/`Hash` say. For [`Value`](crate::Value) that is SameValueZero,
//! so repeated `NaN`s collapse into one and `-0` matches `0`.

use std::collections::HashSet;
use std::hash::Hash;
use tracing::trace;

/// Drop repeats from an already-sorted sequence
///
/// Element `i` of the input is kept when it differs from element `i - 1` of
/// the output built so far, not from its predecessor in the input. Once the
/// output is shorter than the input the lookup runs past its end and the
/// element is kept, so `[1, 1, 2, 2]` becomes `[1, 2, 2]`.
pub fn uniq_sorted<T: PartialEq + Clone>(sequence: &[T]) -> Vec<T> {
    let Some(head) = sequence.first() else {
        return Vec::new();
    };

    let mut result = vec![head.clone()];
    for (idx, item) in sequence.iter().enumerate().skip(1) {
        if result.get(idx - 1) != Some(item) {
            result.push(item.clone());
        }
    }
    result
}

/// Elements in first-occurrence order with repeats removed
///
/// With `sorted` the input is assumed sorted and [`uniq_sorted`] is used.
pub fn uniq<T: Hash + Eq + Clone>(collection: &[T], sorted: bool) -> Vec<T> {
    if sorted {
        return uniq_sorted(collection);
    }

    let mut seen: HashSet<&T> = HashSet::with_capacity(collection.len());
    let kept: Vec<T> = collection
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect();
    trace!(before = collection.len(), after = kept.len(), "deduplicated");
    kept
}

/// Keep the first element for each distinct `iteratee(element)`
///
/// The original elements are returned, not the computed keys. With `sorted`
/// the iteratee is ignored and [`uniq_sorted`] is used.
pub fn uniq_by<T, K, F>(collection: &[T], sorted: bool, mut iteratee: F) -> Vec<T>
where
    T: PartialEq + Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    if sorted {
        return uniq_sorted(collection);
    }

    let mut seen_keys: HashSet<K> = HashSet::new();
    collection
        .iter()
        .filter(|item| seen_keys.insert(iteratee(*item)))
        .cloned()
        .collect()
}
