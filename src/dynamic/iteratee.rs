use crate::value::{Callable, Value};

/// How an element is turned into the value an operation works with
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Iteratee {
    /// The element itself
    #[default]
    Identity,
    /// The element's property of this name (undefined when absent)
    Property(String),
    /// A caller-supplied function, called with the element as its only argument
    Function(Callable),
}

impl Iteratee {
    pub fn property(name: impl Into<String>) -> Self {
        Iteratee::Property(name.into())
    }

    pub fn apply(&self, element: &Value) -> Value {
        match self {
            Iteratee::Identity => element.clone(),
            Iteratee::Property(name) => element.get(name).clone(),
            Iteratee::Function(func) => func.call(std::slice::from_ref(element)),
        }
    }
}

impl From<Option<String>> for Iteratee {
    fn from(key: Option<String>) -> Self {
        key.map_or(Iteratee::Identity, Iteratee::Property)
    }
}

impl From<Callable> for Iteratee {
    fn from(func: Callable) -> Self {
        Iteratee::Function(func)
    }
}
