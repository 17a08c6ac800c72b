//! Mapping introspection

use crate::value::{Object, Value};

/// Key names in insertion order
pub fn keys<T>(obj: &Object<T>) -> Vec<String> {
    obj.keys().map(str::to_string).collect()
}

/// Values in key order
pub fn values<T: Clone>(obj: &Object<T>) -> Vec<T> {
    obj.values().cloned().collect()
}

/// Names of the keys holding functions, sorted ascending
pub fn functions(obj: &Object<Value>) -> Vec<String> {
    let mut names: Vec<String> = obj
        .iter()
        .filter(|(_, value)| value.is_callable())
        .map(|(key, _)| key.to_string())
        .collect();
    names.sort();
    names
}
