//! Collection operations over dynamic values
//!
//! These mirror the typed functions in [`crate::core`] for input whose shape
//! is only known at runtime. A value that is not the kind of collection an
//! operation needs is reported as a type error naming the operation. Absent
//! results come back as [`Value::Undefined`].

mod collection;
mod iteratee;

pub use collection::{as_sequence, CollectionIter, CollectionRef};
pub use iteratee::Iteratee;

use crate::core::{self as ops, Take};
use crate::error::Result;
use crate::value::Value;
use tracing::debug;

fn collection<'a>(value: &'a Value, operation: &'static str) -> Result<CollectionRef<'a>> {
    CollectionRef::of(value).map_err(|e| e.in_operation(operation))
}

fn sequence<'a>(value: &'a Value, operation: &'static str) -> Result<&'a [Value]> {
    as_sequence(value).map_err(|e| e.in_operation(operation))
}

fn take_to_value(take: Take<Value>) -> Value {
    match take {
        Take::One(item) => item.unwrap_or_default(),
        Take::Many(items) => Value::Array(items),
    }
}

/// Call `iteratee` for every element and hand back the input
pub fn each<F>(value: &Value, iteratee: F) -> Result<&Value>
where
    F: FnMut(&Value),
{
    let items = collection(value, "each")?;
    ops::each(&items, iteratee);
    Ok(value)
}

pub fn map(value: &Value, iteratee: &Iteratee) -> Result<Value> {
    let items = collection(value, "map")?;
    Ok(Value::Array(ops::map(&items, |item| iteratee.apply(item))))
}

/// Fold the elements; a falsy `seed` counts as no seed at all
pub fn reduce<F>(value: &Value, callback: F, seed: Value) -> Result<Value>
where
    F: FnMut(Value, &Value, &[&Value]) -> Value,
{
    let items = collection(value, "reduce")?;
    let seed = seed.is_truthy().then_some(seed);
    debug!(len = ops::size(&items), seeded = seed.is_some(), "reduce");
    Ok(ops::reduce(&items, callback, seed).unwrap_or_default())
}

pub fn find<P>(value: &Value, predicate: P) -> Result<Value>
where
    P: FnMut(&Value) -> bool,
{
    let items = collection(value, "find")?;
    Ok(ops::find(&items, predicate).cloned().unwrap_or_default())
}

pub fn filter<P>(value: &Value, predicate: P) -> Result<Value>
where
    P: FnMut(&Value) -> bool,
{
    let items = collection(value, "filter")?;
    Ok(Value::Array(ops::filter(&items, predicate)))
}

pub fn size(value: &Value) -> Result<usize> {
    collection(value, "size").map(|items| ops::size(&items))
}

pub fn first(value: &Value, count: Option<i64>) -> Result<Value> {
    let items = sequence(value, "first")?;
    Ok(take_to_value(ops::first(items, count)))
}

pub fn last(value: &Value, count: Option<i64>) -> Result<Value> {
    let items = sequence(value, "last")?;
    Ok(take_to_value(ops::last(items, count)))
}

pub fn compact(value: &Value) -> Result<Value> {
    let items = sequence(value, "compact")?;
    Ok(Value::Array(ops::compact(items)))
}

/// Sort ascending by the numeric reading of `iteratee(element)`
pub fn sort_by(value: &Value, iteratee: &Iteratee) -> Result<Value> {
    let items = sequence(value, "sort_by")?;
    debug!(len = items.len(), ?iteratee, "sort_by");
    Ok(Value::Array(ops::sort_by(items, |item| {
        iteratee.apply(item).to_number()
    })))
}

/// Never fails: a non-sequence becomes a one-element sequence
pub fn flatten(value: &Value, shallow: bool) -> Value {
    Value::Array(ops::flatten(value, shallow))
}

pub fn uniq(value: &Value, sorted: bool, iteratee: Option<&Iteratee>) -> Result<Value> {
    let items = sequence(value, "uniq")?;
    debug!(len = items.len(), sorted, keyed = iteratee.is_some(), "uniq");
    let kept = match iteratee {
        Some(iteratee) => ops::uniq_by(items, sorted, |item| iteratee.apply(item)),
        None => ops::uniq(items, sorted),
    };
    Ok(Value::Array(kept))
}

/// Key names; a sequence yields its indices as strings
pub fn keys(value: &Value) -> Result<Value> {
    let entries = collection(value, "keys")?.entries();
    Ok(Value::array(entries.into_iter().map(|(key, _)| key)))
}

pub fn values(value: &Value) -> Result<Value> {
    let entries = collection(value, "values")?.entries();
    Ok(Value::array(
        entries.into_iter().map(|(_, item)| item.clone()),
    ))
}

/// Sorted names of the entries that hold functions
pub fn functions(value: &Value) -> Result<Value> {
    let mut names: Vec<String> = collection(value, "functions")?
        .entries()
        .into_iter()
        .filter(|(_, item)| item.is_callable())
        .map(|(key, _)| key)
        .collect();
    names.sort();
    Ok(Value::array(names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::value::Callable;

    fn numbers(items: &[i32]) -> Value {
        Value::array(items.iter().copied())
    }

    #[test]
    fn test_each_returns_input() {
        let value = numbers(&[1, 2, 3]);
        let mut seen = 0;
        let returned = each(&value, |_| seen += 1).expect("sequence");
        assert!(std::ptr::eq(returned, &value));
        assert_eq!(seen, 3);
    }

    #[test]
    fn test_map_over_mapping_values() {
        let obj = Value::object([("a", 1), ("b", 2)]);
        let double = Iteratee::from(Callable::new(|args| {
            Value::Number(args[0].to_number() * 2.0)
        }));
        assert_eq!(map(&obj, &double).expect("mapping"), numbers(&[2, 4]));
    }

    #[test]
    fn test_reduce_treats_falsy_seed_as_absent() {
        let add_triple = |acc: Value, v: &Value, _: &[&Value]| {
            Value::Number(acc.to_number() + v.to_number() * 3.0)
        };
        let items = numbers(&[1, 2, 3, 4, 5]);
        assert_eq!(
            reduce(&items, add_triple, Value::Undefined).expect("sequence"),
            Value::from(43)
        );
        assert_eq!(
            reduce(&items, add_triple, Value::from(0)).expect("sequence"),
            Value::from(43)
        );
        assert_eq!(
            reduce(&items, add_triple, Value::from(10)).expect("sequence"),
            Value::from(55)
        );
        assert_eq!(
            reduce(&numbers(&[]), add_triple, Value::Undefined).expect("sequence"),
            Value::Undefined
        );
    }

    #[test]
    fn test_find_and_filter() {
        let items = numbers(&[1, 5, 12, 20]);
        assert_eq!(
            find(&items, |v| v.to_number() > 10.0).expect("sequence"),
            Value::from(12)
        );
        assert_eq!(
            find(&items, |v| v.to_number() > 100.0).expect("sequence"),
            Value::Undefined
        );
        assert_eq!(
            filter(&items, |v| v.to_number() > 10.0).expect("sequence"),
            numbers(&[12, 20])
        );
    }

    #[test]
    fn test_each_over_mapping_visits_values_and_returns_it() {
        let obj = Value::object([("b", 2), ("a", 1), ("c", 3)]);
        let mut seen = Vec::new();
        let returned = each(&obj, |v| seen.push(v.clone())).expect("mapping");
        assert!(std::ptr::eq(returned, &obj));
        assert_eq!(seen, vec![Value::from(2), Value::from(1), Value::from(3)]);
    }

    #[test]
    fn test_find_and_filter_over_mapping_values() {
        let scores = Value::object([("ann", 4), ("bob", 15), ("cy", 22)]);
        assert_eq!(
            find(&scores, |v| v.to_number() > 10.0).expect("mapping"),
            Value::from(15)
        );
        assert_eq!(
            find(&scores, |v| v.to_number() > 100.0).expect("mapping"),
            Value::Undefined
        );
        assert_eq!(
            filter(&scores, |v| v.to_number() > 10.0).expect("mapping"),
            numbers(&[15, 22])
        );
    }

    #[test]
    fn test_reduce_over_mapping_values() {
        let obj = Value::object([("a", 1), ("b", 2), ("c", 3), ("d", 4), ("e", 5)]);
        let add_triple = |acc: Value, v: &Value, _: &[&Value]| {
            Value::Number(acc.to_number() + v.to_number() * 3.0)
        };
        assert_eq!(
            reduce(&obj, add_triple, Value::Undefined).expect("mapping"),
            Value::from(43)
        );
        assert_eq!(
            reduce(&obj, add_triple, Value::from(10)).expect("mapping"),
            Value::from(55)
        );
        assert_eq!(
            reduce(&Value::object(Vec::<(&str, i32)>::new()), add_triple, Value::Undefined)
                .expect("mapping"),
            Value::Undefined
        );
    }

    #[test]
    fn test_size_of_both_shapes_and_primitives() {
        assert_eq!(size(&numbers(&[1, 2, 3])).expect("sequence"), 3);
        assert_eq!(
            size(&Value::object([("a", 1), ("b", 2)])).expect("mapping"),
            2
        );
        let err = size(&Value::from(true)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::TYPE_NOT_A_COLLECTION);
        assert!(err.user_message().starts_with("size expected"));
    }

    #[test]
    fn test_first_and_last() {
        let items = numbers(&[1, 2, 3, 4]);
        assert_eq!(first(&items, None).expect("sequence"), Value::from(1));
        assert_eq!(first(&items, Some(2)).expect("sequence"), numbers(&[1, 2]));
        assert_eq!(last(&items, Some(2)).expect("sequence"), numbers(&[3, 4]));
        assert_eq!(last(&items, None).expect("sequence"), Value::from(4));
        assert_eq!(
            first(&numbers(&[]), None).expect("sequence"),
            Value::Undefined
        );
        assert!(first(&Value::object([("a", 1)]), None).is_err());
    }

    #[test]
    fn test_compact_and_flatten() {
        let messy = Value::array(vec![
            Value::from(0),
            Value::from(1),
            Value::Bool(false),
            Value::from(""),
            Value::Null,
        ]);
        assert_eq!(compact(&messy).expect("sequence"), numbers(&[1]));
        assert_eq!(flatten(&Value::from(7), false), numbers(&[7]));
    }

    #[test]
    fn test_sort_by_property() {
        let people = Value::array(vec![
            Value::object([("age", 40)]),
            Value::object([("age", 12)]),
        ]);
        let sorted = sort_by(&people, &Iteratee::property("age")).expect("sequence");
        assert_eq!(sorted.get("0").get("age"), &Value::from(12));
    }

    #[test]
    fn test_uniq_paths() {
        let items = numbers(&[1, 2, 2, 3, 1]);
        assert_eq!(uniq(&items, false, None).expect("sequence"), numbers(&[1, 2, 3]));

        let parity = Iteratee::from(Callable::new(|args| {
            Value::Number(args[0].to_number() % 2.0)
        }));
        assert_eq!(
            uniq(&items, false, Some(&parity)).expect("sequence"),
            numbers(&[1, 2])
        );
    }

    #[test]
    fn test_introspection() {
        let obj = Value::object([
            ("z", Value::Function(Callable::new(|_| Value::Null))),
            ("a", Value::from(1)),
            ("m", Value::Function(Callable::new(|_| Value::Null))),
        ]);
        assert_eq!(
            keys(&obj).expect("mapping"),
            Value::array(["z", "a", "m"])
        );
        assert_eq!(values(&obj).expect("mapping").get("1"), &Value::from(1));
        assert_eq!(functions(&obj).expect("mapping"), Value::array(["m", "z"]));
        assert_eq!(
            keys(&Value::array(["x", "y"])).expect("sequence"),
            Value::array(["0", "1"])
        );
        assert!(keys(&Value::Null).is_err());
    }
}
