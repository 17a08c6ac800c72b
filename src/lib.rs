//! # fi
//!
//! Functional helpers for in-memory collections: iterate, map, reduce, find,
//! filter, measure, slice, compact, sort, flatten, deduplicate and introspect.
//!
//! ## Usage
//!
//! ```
//! use fi::{first, flatten, reduce, uniq, Take, Value};
//!
//! assert_eq!(reduce(&[1, 2, 3, 4, 5], |acc, v, _| acc + v * 3, None), Some(43));
//! assert_eq!(uniq(&[1, 2, 2, 3, 1], false), vec![1, 2, 3]);
//! assert_eq!(first(&[1, 2, 3, 4], Some(2)), Take::Many(vec![1, 2]));
//!
//! let nested = Value::array(vec![Value::from(1), Value::array([2, 3])]);
//! assert_eq!(flatten(&nested, false).len(), 3);
//! ```
//!
//! ## Modules
//!
//! - `core` - Typed operations over slices and ordered mappings
//! - `dynamic` - The same operations over [`Value`]s whose shape is known only at runtime
//! - `value` - Dynamic values, insertion-ordered mappings and stored functions
//! - `error` - Error type and codes for the dynamic layer and the `fi` binary
//! - `app` - Configuration, logging and fatal error handling for the binary
//! - `cli` - Command-line interface applying operations to JSON documents
pub mod app;
pub mod cli;
pub mod core;
pub mod dynamic;
pub mod error;
pub mod value;

pub use crate::core::{
    compact, each, filter, find, first, flatten, flatten_into, fold, functions, keys, last,
    map, reduce, size, slice, sort_by, uniq, uniq_by, uniq_sorted, unpack, values,
    Compactable, Nestable, Nested, SortKey, Take, Traversable,
};
pub use crate::error::{FiError, Result};
pub use crate::value::{Callable, Object, Value};

/// Where to start reading about the functional style these helpers follow
pub fn library_method() -> &'static str {
    "Start by reading https://medium.com/javascript-scene/master-the-javascript-interview-what-is-functional-programming-7f218c68b3a0"
}
