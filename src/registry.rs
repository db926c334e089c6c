//! Subscription registry: per-topic handler lists with synchronous fan-out.

use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::trace;

use crate::types::{Handler, Topic};

/// Maintains, per topic, an ordered list of handlers, and fans published
/// values out to them synchronously on the caller's thread.
///
/// All methods take `&self`; the map lives behind a [`parking_lot::RwLock`],
/// so individual operations are atomic even when the registry is shared
/// across threads. Dispatch never holds the lock: `publish` clones the
/// topic's handler list and iterates the snapshot, so a handler may
/// subscribe or unsubscribe reentrantly without corrupting iteration.
///
/// `publish` is public; an owner that wants to keep it restricted holds its
/// registry in a private field and re-exposes only the surface it likes:
///
/// ```
/// use fanout::{Handler, SubscriptionRegistry};
///
/// struct Mailbox {
///     registry: SubscriptionRegistry<String>,
/// }
///
/// impl Mailbox {
///     fn subscribe(&self, handler: Handler<String>) {
///         self.registry.subscribe("mail", handler);
///     }
///
///     fn deliver(&self, message: String) {
///         self.registry.publish("mail", &message);
///     }
/// }
///
/// let mailbox = Mailbox { registry: SubscriptionRegistry::new() };
/// mailbox.subscribe(Handler::new(|m: &String| println!("got: {}", m)));
/// mailbox.deliver("hello".to_string());
/// ```
pub struct SubscriptionRegistry<T> {
    /// Handler lists by topic, insertion order preserved per topic.
    handlers: RwLock<HashMap<Topic, Vec<Handler<T>>>>,
}

impl<T> SubscriptionRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Register `handler` under `topic`.
    ///
    /// Appends to the topic's list. There is no duplicate detection: the
    /// same handler may be registered multiple times and is invoked once
    /// per registration.
    pub fn subscribe(&self, topic: impl Into<Topic>, handler: Handler<T>) {
        let topic = topic.into();
        let mut map = self.handlers.write();
        let list = map.entry(topic.clone()).or_default();
        list.push(handler);
        trace!(?topic, handlers = list.len(), "subscribed");
    }

    /// Remove every registration of `handler` under `topic`.
    ///
    /// An unknown topic or an unmatched handler is a silent no-op.
    /// Registrations of the same handler under other topics are untouched.
    pub fn unsubscribe(&self, topic: impl Into<Topic>, handler: &Handler<T>) {
        let topic = topic.into();
        let mut map = self.handlers.write();
        if let Some(list) = map.get_mut(&topic) {
            let before = list.len();
            list.retain(|h| !h.same(handler));
            let removed = before - list.len();
            if list.is_empty() {
                // Absent entry and empty list are equivalent; drop the entry.
                map.remove(&topic);
            }
            if removed > 0 {
                trace!(?topic, removed, "unsubscribed");
            }
        }
    }

    /// Clear every topic's handler list.
    ///
    /// Until new subscriptions arrive, every subsequent publish is a no-op.
    pub fn unsubscribe_all(&self) {
        let mut map = self.handlers.write();
        let topics = map.len();
        map.clear();
        trace!(topics, "cleared all subscriptions");
    }

    /// Invoke every handler currently registered under `topic`, in
    /// registration order, passing `value`. Publishing to a topic with no
    /// subscribers is a no-op.
    ///
    /// Dispatch runs over a snapshot of the list taken at call time, with
    /// the lock released: handlers may subscribe or unsubscribe during
    /// dispatch, and those changes apply to later publishes only. A handler
    /// that panics unwinds through this call and the remaining snapshot
    /// handlers are not invoked; the registry itself stays consistent.
    pub fn publish(&self, topic: impl Into<Topic>, value: &T) {
        let topic = topic.into();
        let snapshot = match self.handlers.read().get(&topic) {
            Some(list) => list.clone(),
            None => return,
        };
        trace!(?topic, handlers = snapshot.len(), "publishing");
        for handler in &snapshot {
            handler.call(value);
        }
    }

    /// Number of registrations currently held under `topic`.
    pub fn handler_count(&self, topic: impl Into<Topic>) -> usize {
        self.handlers.read().get(&topic.into()).map_or(0, Vec::len)
    }

    /// True when no topic has any handler.
    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }
}

impl<T> Default for SubscriptionRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
