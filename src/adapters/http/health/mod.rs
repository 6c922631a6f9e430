//! HTTP adapter for health probes.

mod handlers;
mod routes;

pub use handlers::{HealthState, READINESS_TIMEOUT};
pub use routes::health_routes;
