//! HTTP adapter for subscription endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ListSubscriptionsParams, SubscriptionRequest, SubscriptionResponse};
pub use handlers::SubscriptionHandlers;
pub use routes::subscription_routes;
