//! # Fanout
//!
//! A minimal in-process publish/subscribe registry with synchronous dispatch.
//!
//! ## Core Concepts
//!
//! - **Topics**: opaque keys partitioning the subscriber space, including a
//!   reserved default key for "no topic supplied"
//! - **Handlers**: reference-counted callbacks, compared by identity for
//!   unsubscribe
//! - **Publish**: synchronous fan-out of one value to every handler of a
//!   topic, in registration order, over a snapshot of the list
//!
//! There is no transport, persistence, or scheduler: publish runs handlers
//! in-line on the caller's thread, and a registry's lifetime is exactly its
//! owner's. Owners that want a narrowed surface keep the registry private
//! and re-expose only `subscribe`/`unsubscribe`, calling `publish`
//! themselves.
//!
//! ## Example
//!
//! ```
//! use fanout::{Handler, SubscriptionRegistry};
//!
//! let registry = SubscriptionRegistry::new();
//!
//! let greeter = Handler::new(|name: &String| println!("hello, {}", name));
//! registry.subscribe("arrivals", greeter.clone());
//!
//! registry.publish("arrivals", &"ada".to_string());
//!
//! registry.unsubscribe("arrivals", &greeter);
//! registry.publish("arrivals", &"nobody listens".to_string());
//! ```

pub mod registry;
pub mod types;

// Re-exports
pub use registry::SubscriptionRegistry;
pub use types::{Handler, Topic};
