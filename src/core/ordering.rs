//! Sorting by a numeric key

/// A number that `sort_by` can rank
///
/// Every primitive numeric type ranks by its `f64` reading, so integers past
/// 2^53 may tie with their neighbours.
pub trait SortKey {
    fn sort_key(self) -> f64;
}

macro_rules! sort_key_as_f64 {
    ($($ty:ty),*) => {
        $(
            impl SortKey for $ty {
                fn sort_key(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

sort_key_as_f64!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Copy of `collection` sorted ascending by `callback(element)`
///
/// The sort is stable and each key is computed once. `-0` ranks with `0`;
/// `NaN` keys rank after every number and keep their relative order.
pub fn sort_by<T, K, F>(collection: &[T], mut callback: F) -> Vec<T>
where
    T: Clone,
    K: SortKey,
    F: FnMut(&T) -> K,
{
    let mut keyed: Vec<(f64, &T)> = collection
        .iter()
        .map(|item| (normalize_key(callback(item).sort_key()), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

fn normalize_key(key: f64) -> f64 {
    if key.is_nan() {
        // positive NaN orders after +inf under total_cmp
        f64::NAN.abs()
    } else if key == 0.0 {
        0.0
    } else {
        key
    }
}
