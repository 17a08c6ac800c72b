use crate::core::Traversable;
use crate::error::{common, FiError, Result};
use crate::value::{Object, Value, Values};

/// A value that has been checked to be a sequence or a mapping
#[derive(Debug, Clone, Copy)]
pub enum CollectionRef<'a> {
    Sequence(&'a [Value]),
    Mapping(&'a Object<Value>),
}

impl<'a> CollectionRef<'a> {
    /// Classify `value`, rejecting primitives
    pub fn of(value: &'a Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(CollectionRef::Sequence(items.as_slice())),
            Value::Object(object) => Ok(CollectionRef::Mapping(object)),
            other => Err(FiError::not_a_collection(other.type_name())),
        }
    }

    /// `(key, value)` pairs; sequence keys are the element indices
    pub fn entries(&self) -> Vec<(String, &'a Value)> {
        match *self {
            CollectionRef::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| (idx.to_string(), item))
                .collect(),
            CollectionRef::Mapping(object) => object
                .iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        }
    }
}

/// Borrow `value` as a sequence
pub fn as_sequence(value: &Value) -> Result<&[Value]> {
    match value {
        Value::Array(items) => Ok(items.as_slice()),
        other => Err(common::not_a_sequence(other.type_name())),
    }
}

/// Iterator over the values of a [`CollectionRef`]
pub enum CollectionIter<'a> {
    Sequence(std::slice::Iter<'a, Value>),
    Mapping(Values<'a, Value>),
}

impl<'a> Iterator for CollectionIter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            CollectionIter::Sequence(iter) => iter.next(),
            CollectionIter::Mapping(iter) => iter.next(),
        }
    }
}

impl Traversable for CollectionRef<'_> {
    type Item = Value;
    type Iter<'a>
        = CollectionIter<'a>
    where
        Self: 'a;

    fn traverse(&self) -> Self::Iter<'_> {
        match *self {
            CollectionRef::Sequence(items) => CollectionIter::Sequence(items.iter()),
            CollectionRef::Mapping(object) => CollectionIter::Mapping(object.values()),
        }
    }

    fn size(&self) -> usize {
        match *self {
            CollectionRef::Sequence(items) => items.len(),
            CollectionRef::Mapping(object) => object.len(),
        }
    }
}
