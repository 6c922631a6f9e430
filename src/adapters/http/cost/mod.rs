//! HTTP adapter for cost endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{TotalCostParams, TotalCostResponse};
pub use handlers::CostHandlers;
pub use routes::cost_routes;
