//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod cost;
pub mod subscription;

pub use cost::{TotalCostHandler, TotalCostQuery, TotalCostView};
pub use subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, DeleteSubscriptionCommand,
    DeleteSubscriptionHandler, GetSubscriptionHandler, GetSubscriptionQuery,
    ListSubscriptionsHandler, ListSubscriptionsQuery, UpdateSubscriptionCommand,
    UpdateSubscriptionHandler,
};
