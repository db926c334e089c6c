//! Core types for the subscription registry.

use std::fmt;
use std::sync::Arc;

/// Key partitioning the subscriber space.
///
/// A message published under a topic reaches only handlers registered under
/// that exact topic. `Default` is the reserved key used when no explicit
/// topic is supplied; it behaves as an ordinary topic in every operation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Topic {
    /// A caller-defined key, compared by value.
    Named(String),
    /// The shared "no topic supplied" sentinel.
    Default,
}

impl Topic {
    /// Shorthand for `Topic::Named`.
    pub fn named(name: impl Into<String>) -> Self {
        Topic::Named(name.into())
    }
}

impl fmt::Debug for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::Named(name) => write!(f, "Topic({})", name),
            Topic::Default => write!(f, "Topic(default)"),
        }
    }
}

impl From<&str> for Topic {
    fn from(name: &str) -> Self {
        Topic::Named(name.to_string())
    }
}

impl From<String> for Topic {
    fn from(name: String) -> Self {
        Topic::Named(name)
    }
}

impl From<Option<&str>> for Topic {
    fn from(name: Option<&str>) -> Self {
        match name {
            Some(name) => Topic::Named(name.to_string()),
            None => Topic::Default,
        }
    }
}

impl From<Option<String>> for Topic {
    fn from(name: Option<String>) -> Self {
        match name {
            Some(name) => Topic::Named(name),
            None => Topic::Default,
        }
    }
}

/// A registered callback, invoked with a reference to each published value.
///
/// Handlers are reference-counted: cloning a `Handler` yields the *same*
/// handler for unsubscribe purposes, while two handlers built from identical
/// closures are distinct. Nothing beyond "callable with one argument" is
/// required of the wrapped function.
pub struct Handler<T>(Arc<dyn Fn(&T) + Send + Sync>);

impl<T> Handler<T> {
    /// Wrap a callback.
    pub fn new(f: impl Fn(&T) + Send + Sync + 'static) -> Self {
        Handler(Arc::new(f))
    }

    /// Identity comparison: true when both sides share one allocation.
    ///
    /// Compares the data pointer only; vtable addresses are not stable
    /// across codegen units.
    pub fn same(&self, other: &Handler<T>) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.0) as *const u8,
            Arc::as_ptr(&other.0) as *const u8,
        )
    }

    /// Invoke the callback with `value`.
    pub(crate) fn call(&self, value: &T) {
        (self.0)(value)
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Handler(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Arc::as_ptr(&self.0) as *const u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_from_str() {
        assert_eq!(Topic::from("updates"), Topic::Named("updates".to_string()));
        assert_eq!(Topic::named("updates"), Topic::from("updates"));
    }

    #[test]
    fn test_topic_from_option() {
        assert_eq!(Topic::from(Some("updates")), Topic::named("updates"));
        assert_eq!(Topic::from(None::<&str>), Topic::Default);
        assert_eq!(Topic::from(None::<String>), Topic::Default);
    }

    #[test]
    fn test_default_topic_is_its_own_key() {
        assert_ne!(Topic::Default, Topic::named("default"));
        assert_ne!(Topic::Default, Topic::named(""));
    }

    #[test]
    fn test_handler_identity() {
        let a = Handler::new(|_: &u32| {});
        let b = Handler::new(|_: &u32| {});

        assert!(a.same(&a));
        assert!(a.same(&a.clone()));
        // Identical closures are still distinct handlers.
        assert!(!a.same(&b));
    }

    #[test]
    fn test_handler_call() {
        use std::sync::atomic::{AtomicU32, Ordering};
        use std::sync::Arc;

        let seen = Arc::new(AtomicU32::new(0));
        let sink = seen.clone();
        let handler = Handler::new(move |value: &u32| sink.store(*value, Ordering::SeqCst));

        handler.call(&7);
        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }
}
