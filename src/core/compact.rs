//! Removal of "empty" elements
//!
//! The excluded set is fixed: `false`, null, zero, the empty string, the
//! absent value and `NaN`. Everything else, including negative numbers,
//! whitespace strings and empty containers, is kept.

use crate::value::Value;

/// Whether an element belongs to the set that `compact` drops
pub trait Compactable {
    fn is_excluded(&self) -> bool;
}

impl Compactable for Value {
    fn is_excluded(&self) -> bool {
        match self {
            Value::Bool(false) | Value::Null | Value::Undefined => true,
            Value::Number(n) => *n == 0.0 || n.is_nan(),
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl Compactable for bool {
    fn is_excluded(&self) -> bool {
        !*self
    }
}

macro_rules! compactable_integer {
    ($($ty:ty),*) => {
        $(
            impl Compactable for $ty {
                fn is_excluded(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

compactable_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Compactable for f32 {
    fn is_excluded(&self) -> bool {
        *self == 0.0 || self.is_nan()
    }
}

impl Compactable for f64 {
    fn is_excluded(&self) -> bool {
        *self == 0.0 || self.is_nan()
    }
}

impl Compactable for String {
    fn is_excluded(&self) -> bool {
        self.is_empty()
    }
}

impl Compactable for &str {
    fn is_excluded(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Compactable> Compactable for Option<T> {
    fn is_excluded(&self) -> bool {
        self.as_ref().is_none_or(Compactable::is_excluded)
    }
}

/// Copy of `collection` without excluded elements
pub fn compact<T: Compactable + Clone>(collection: &[T]) -> Vec<T> {
    collection
        .iter()
        .filter(|item| !item.is_excluded())
        .cloned()
        .collect()
}
