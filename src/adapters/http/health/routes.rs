//! HTTP routes for health probes.

use axum::{routing::get, Router};

use super::handlers::{liveness, readiness, HealthState};

pub fn health_routes(state: HealthState) -> Router {
    Router::new()
        .route("/healthz", get(liveness))
        .route("/readyz", get(readiness))
        .with_state(state)
}
