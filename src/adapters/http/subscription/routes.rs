//! HTTP routes for subscription endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_subscription, delete_subscription, get_subscription, list_subscriptions,
    update_subscription, SubscriptionHandlers,
};

/// Creates the subscription router, to be nested under `/api/v1/subscriptions`.
pub fn subscription_routes(handlers: SubscriptionHandlers) -> Router {
    Router::new()
        .route("/", get(list_subscriptions).post(create_subscription))
        .route(
            "/:id",
            get(get_subscription)
                .put(update_subscription)
                .delete(delete_subscription),
        )
        .with_state(handlers)
}
