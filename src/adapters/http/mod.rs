//! HTTP adapters - REST API implementations.
//!
//! Each module has its own HTTP adapter for endpoint exposure. `api_router`
//! assembles them under their public paths.

pub mod cost;
pub mod error;
pub mod health;
pub mod middleware;
pub mod subscription;

use axum::Router;

pub use cost::{cost_routes, CostHandlers};
pub use error::ErrorResponse;
pub use health::{health_routes, HealthState};
pub use middleware::apply_middleware;
pub use subscription::{subscription_routes, SubscriptionHandlers};

/// Routes for the full API, without middleware.
pub fn api_router(
    subscriptions: SubscriptionHandlers,
    cost: CostHandlers,
    health: HealthState,
) -> Router {
    Router::new()
        .merge(health_routes(health))
        .nest("/api/v1/subscriptions", subscription_routes(subscriptions))
        .nest("/api/v1/cost", cost_routes(cost))
}
