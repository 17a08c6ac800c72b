use super::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

type CallableFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A function stored inside a [`Value`]
///
/// Cloning shares the underlying closure. Two callables are equal only when
/// they share the same closure.
#[derive(Clone)]
pub struct Callable {
    name: Option<String>,
    func: Arc<CallableFn>,
}

impl Callable {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    pub fn named<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the function with positional arguments
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl Eq for Callable {}

impl Hash for Callable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.func) as *const () as usize).hash(state);
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "[Function: {}]", name),
            None => f.write_str("[Function (anonymous)]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_passes_arguments() {
        let double = Callable::named("double", |args: &[Value]| {
            Value::Number(args.first().map(Value::to_number).unwrap_or(f64::NAN) * 2.0)
        });
        assert_eq!(double.call(&[Value::from(21)]), Value::from(42));
        assert_eq!(double.name(), Some("double"));
        assert_eq!(format!("{:?}", double), "[Function: double]");
    }

    #[test]
    fn test_equality_is_identity() {
        let a = Callable::new(|_| Value::Null);
        let b = Callable::new(|_| Value::Null);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
