//! In-memory adapters.
//!
//! Back every port with process-local state. Used by tests and for running
//! the service without a database.

mod in_memory_subscription_store;

pub use in_memory_subscription_store::InMemorySubscriptionStore;
