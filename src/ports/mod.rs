//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SubscriptionRepository` - CRUD persistence for subscriptions
//! - `RecordSource` - Filtered interval supply for cost aggregation
//! - `HealthProbe` - Store reachability for readiness checks

mod health_probe;
mod record_source;
mod subscription_repository;

pub use health_probe::HealthProbe;
pub use record_source::RecordSource;
pub use subscription_repository::{
    PageRequest, SubscriptionRepository, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
