//! Collection operations as pure functions
//!
//! Every function here takes its input by reference and returns a new
//! container. The only exceptions are [`each`], which hands back the very
//! collection it was given, and [`unpack`], which appends to its receiver.
//! Nothing here performs I/O or keeps state between calls.

pub mod compact;
pub mod dedup;
pub mod introspection;
pub mod ordering;
pub mod query;
pub mod structure;
pub mod traversal;

pub use compact::{compact, Compactable};
pub use dedup::{uniq, uniq_by, uniq_sorted};
pub use introspection::{functions, keys, values};
pub use ordering::{sort_by, SortKey};
pub use query::{first, last, slice, Take};
pub use structure::{flatten, flatten_into, unpack, Nestable, Nested};
pub use traversal::{each, filter, find, fold, map, reduce, size, Traversable};
