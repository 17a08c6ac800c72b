//! Head and tail queries over sequences
//!
//! `first` and `last` either return a single element or a sub-sequence,
//! depending on whether a count was given. A count of `0` counts as "no count".

use tracing::trace;

/// Result of a head/tail query
#[derive(Debug, Clone, PartialEq)]
pub enum Take<T> {
    /// No count was requested: the single element, if any
    One(Option<T>),
    /// A count was requested: up to that many elements
    Many(Vec<T>),
}

impl<T> Take<T> {
    /// The single element, or `None` for a sub-sequence result
    pub fn one(self) -> Option<T> {
        match self {
            Take::One(item) => item,
            Take::Many(_) => None,
        }
    }

    /// The result as a sequence, whichever shape it has
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Take::One(item) => item.into_iter().collect(),
            Take::Many(items) => items,
        }
    }
}

/// Copy `collection[start..end]` with out-of-range indices clamped
///
/// Negative indices count back from the end. A start at or past the end
/// yields an empty sequence.
pub fn slice<T: Clone>(collection: &[T], start: i64, end: i64) -> Vec<T> {
    let len = collection.len();
    let from = resolve_index(start, len);
    let to = resolve_index(end, len);
    if from >= to {
        return Vec::new();
    }
    collection[from..to].to_vec()
}

fn resolve_index(index: i64, len: usize) -> usize {
    let len = len as i64;
    let resolved = if index < 0 {
        len.saturating_add(index).max(0)
    } else {
        index.min(len)
    };
    resolved as usize
}

/// The first element, or the first `count` elements
pub fn first<T: Clone>(collection: &[T], count: Option<i64>) -> Take<T> {
    match count {
        Some(n) if n != 0 => {
            trace!(count = n, len = collection.len(), "taking head slice");
            Take::Many(slice(collection, 0, n))
        }
        _ => Take::One(collection.first().cloned()),
    }
}

/// The last element, or the last `count` elements
///
/// The slice starts at `len - count`, so a count larger than the sequence
/// wraps around as a negative index and a negative count yields nothing.
pub fn last<T: Clone>(collection: &[T], count: Option<i64>) -> Take<T> {
    match count {
        Some(n) if n != 0 => {
            let len = collection.len() as i64;
            trace!(count = n, len, "taking tail slice");
            Take::Many(slice(collection, len.saturating_sub(n), len))
        }
        _ => Take::One(collection.last().cloned()),
    }
}
