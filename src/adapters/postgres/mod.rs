//! PostgreSQL adapters - Database implementations for the ports.
//!
//! - `PostgresSubscriptionRepository` - Subscription CRUD
//! - `PostgresRecordSource` - Filtered interval stream for cost queries
//! - `PostgresHealthProbe` - Readiness ping
//! - `connect` / `run_migrations` - Pool setup

mod filter;
mod health_probe;
mod pool;
mod record_source;
mod subscription_repository;

pub use health_probe::PostgresHealthProbe;
pub use pool::{connect, run_migrations};
pub use record_source::PostgresRecordSource;
pub use subscription_repository::PostgresSubscriptionRepository;
