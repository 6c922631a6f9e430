//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `memory` - In-memory store for tests and local runs
//! - `postgres` - sqlx-backed persistence

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemorySubscriptionStore;
pub use postgres::{
    PostgresHealthProbe, PostgresRecordSource, PostgresSubscriptionRepository,
};
