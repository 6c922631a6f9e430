//! HTTP routes for cost endpoints.

use axum::{routing::get, Router};

use super::handlers::{total_cost, CostHandlers};

/// Creates the cost router, to be nested under `/api/v1/cost`.
pub fn cost_routes(handlers: CostHandlers) -> Router {
    Router::new()
        .route("/total", get(total_cost))
        .with_state(handlers)
}
