//! Structural transforms: unpacking and flattening nested sequences

use crate::value::Value;
use tracing::trace;

/// An element that may itself be a sequence of elements of the same kind
pub trait Nestable: Sized {
    /// The nested elements, when this element is a sequence
    fn as_sequence(&self) -> Option<&[Self]>;
}

impl Nestable for Value {
    fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

/// A typed tree of sequences
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> Nestable for Nested<T> {
    fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Nested::List(items) => Some(items.as_slice()),
            Nested::Item(_) => None,
        }
    }
}

impl<T> Nested<T> {
    /// The leaf value, if this is not a list
    pub fn into_item(self) -> Option<T> {
        match self {
            Nested::Item(item) => Some(item),
            Nested::List(_) => None,
        }
    }
}

/// Append every element of `sequence` onto `receiver`, one level deep
pub fn unpack<T: Clone>(receiver: &mut Vec<T>, sequence: &[T]) {
    receiver.extend_from_slice(sequence);
}

/// Flatten `collection` into a fresh sequence
///
/// With `shallow` only one level of nesting is removed; otherwise nesting of
/// any depth is removed. A non-sequence input becomes a one-element result.
pub fn flatten<T: Nestable + Clone>(collection: &T, shallow: bool) -> Vec<T> {
    flatten_into(collection, shallow, Vec::new())
}

/// Flatten `collection` onto the end of `accumulator` and return it
pub fn flatten_into<T: Nestable + Clone>(
    collection: &T,
    shallow: bool,
    mut accumulator: Vec<T>,
) -> Vec<T> {
    let Some(items) = collection.as_sequence() else {
        accumulator.push(collection.clone());
        return accumulator;
    };

    trace!(len = items.len(), shallow, "flattening sequence");
    if shallow {
        for item in items {
            match item.as_sequence() {
                Some(inner) => unpack(&mut accumulator, inner),
                None => accumulator.push(item.clone()),
            }
        }
    } else {
        for item in items {
            accumulator = flatten_into(item, false, accumulator);
        }
    }
    accumulator
}
