//! Traversal primitives shared by sequences and mappings
//!
//! A mapping is traversed through its values in key order, so every function
//! here behaves the same whether it is handed a slice or an [`Object`].

use crate::value::{Object, Values};

/// Anything whose values can be walked in a fixed order
pub trait Traversable {
    type Item;
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Values in traversal order
    fn traverse(&self) -> Self::Iter<'_>;

    /// Element count for a sequence, key count for a mapping
    fn size(&self) -> usize;
}

impl<T> Traversable for [T] {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    fn traverse(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Traversable for [T; N] {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    fn traverse(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn size(&self) -> usize {
        N
    }
}

impl<T> Traversable for Vec<T> {
    type Item = T;
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    fn traverse(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Traversable for Object<T> {
    type Item = T;
    type Iter<'a>
        = Values<'a, T>
    where
        Self: 'a;

    fn traverse(&self) -> Self::Iter<'_> {
        self.values()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// Call `iteratee` once per element, in order, and hand back the collection
pub fn each<C, F>(collection: &C, mut iteratee: F) -> &C
where
    C: Traversable + ?Sized,
    F: FnMut(&C::Item),
{
    for item in collection.traverse() {
        iteratee(item);
    }
    collection
}

/// Build a new sequence with `iteratee` applied to every element
pub fn map<C, U, F>(collection: &C, iteratee: F) -> Vec<U>
where
    C: Traversable + ?Sized,
    F: FnMut(&C::Item) -> U,
{
    collection.traverse().map(iteratee).collect()
}

/// Left fold whose accumulator defaults to the first element
///
/// Without a seed the first element becomes the accumulator and only the
/// remaining elements are folded. The callback receives the accumulator, the
/// current element and the whole sequence being folded. An empty collection
/// without a seed yields `None`.
pub fn reduce<C, F>(collection: &C, callback: F, seed: Option<C::Item>) -> Option<C::Item>
where
    C: Traversable + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item, &[&C::Item]) -> C::Item,
{
    let items: Vec<&C::Item> = collection.traverse().collect();
    match seed {
        Some(seed) => Some(fold_refs(&items, seed, callback)),
        None => {
            let (head, rest) = items.split_first()?;
            Some(fold_refs(rest, (*head).clone(), callback))
        }
    }
}

/// Left fold from an explicit seed of any type
pub fn fold<C, A, F>(collection: &C, seed: A, callback: F) -> A
where
    C: Traversable + ?Sized,
    F: FnMut(A, &C::Item, &[&C::Item]) -> A,
{
    let items: Vec<&C::Item> = collection.traverse().collect();
    fold_refs(&items, seed, callback)
}

fn fold_refs<T, A, F>(items: &[&T], seed: A, mut callback: F) -> A
where
    F: FnMut(A, &T, &[&T]) -> A,
{
    items
        .iter()
        .fold(seed, |acc, item| callback(acc, *item, items))
}

/// First element satisfying `predicate`
pub fn find<C, P>(collection: &C, mut predicate: P) -> Option<&C::Item>
where
    C: Traversable + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    collection.traverse().find(|item| predicate(*item))
}

/// Every element satisfying `predicate`, in original order
pub fn filter<C, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Traversable + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    collection
        .traverse()
        .filter(|item| predicate(*item))
        .cloned()
        .collect()
}

/// Element count for a sequence, key count for a mapping
pub fn size<C: Traversable + ?Sized>(collection: &C) -> usize {
    collection.size()
}
