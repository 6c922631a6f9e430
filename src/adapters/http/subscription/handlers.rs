//! HTTP handlers for subscription endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    handle_json_rejection, handle_query_rejection, handle_subscription_error, invalid_id,
};
use crate::application::handlers::subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, DeleteSubscriptionCommand,
    DeleteSubscriptionHandler, GetSubscriptionHandler, GetSubscriptionQuery,
    ListSubscriptionsHandler, ListSubscriptionsQuery, UpdateSubscriptionCommand,
    UpdateSubscriptionHandler,
};
use crate::domain::foundation::SubscriptionId;

use super::dto::{ListSubscriptionsParams, SubscriptionRequest, SubscriptionResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SubscriptionHandlers {
    create_handler: Arc<CreateSubscriptionHandler>,
    get_handler: Arc<GetSubscriptionHandler>,
    list_handler: Arc<ListSubscriptionsHandler>,
    update_handler: Arc<UpdateSubscriptionHandler>,
    delete_handler: Arc<DeleteSubscriptionHandler>,
}

impl SubscriptionHandlers {
    pub fn new(
        create_handler: Arc<CreateSubscriptionHandler>,
        get_handler: Arc<GetSubscriptionHandler>,
        list_handler: Arc<ListSubscriptionsHandler>,
        update_handler: Arc<UpdateSubscriptionHandler>,
        delete_handler: Arc<DeleteSubscriptionHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
            update_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/v1/subscriptions - Create a subscription
pub async fn create_subscription(
    State(handlers): State<SubscriptionHandlers>,
    body: Result<Json<SubscriptionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return handle_json_rejection(rejection),
    };

    let cmd = CreateSubscriptionCommand {
        service_name: req.service_name,
        price: req.price,
        user_id: req.user_id,
        start_date: req.start_date,
        end_date: req.end_date,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(subscription) => (
            StatusCode::CREATED,
            Json(SubscriptionResponse::from(&subscription)),
        )
            .into_response(),
        Err(e) => handle_subscription_error(e),
    }
}

/// GET /api/v1/subscriptions/:id - Get one subscription
pub async fn get_subscription(
    State(handlers): State<SubscriptionHandlers>,
    Path(subscription_id): Path<String>,
) -> Response {
    let subscription_id = match subscription_id.parse::<SubscriptionId>() {
        Ok(id) => id,
        Err(_) => return invalid_id("subscription"),
    };

    match handlers
        .get_handler
        .handle(GetSubscriptionQuery { subscription_id })
        .await
    {
        Ok(subscription) => (
            StatusCode::OK,
            Json(SubscriptionResponse::from(&subscription)),
        )
            .into_response(),
        Err(e) => handle_subscription_error(e),
    }
}

/// GET /api/v1/subscriptions - List subscriptions
pub async fn list_subscriptions(
    State(handlers): State<SubscriptionHandlers>,
    params: Result<Query<ListSubscriptionsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => return handle_query_rejection(rejection),
    };

    let query = ListSubscriptionsQuery {
        limit: params.limit(),
        offset: params.offset(),
        user_id: params.user_id,
        service_name: params.service_name,
    };

    match handlers.list_handler.handle(query).await {
        Ok(subscriptions) => {
            let response: Vec<SubscriptionResponse> =
                subscriptions.iter().map(SubscriptionResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_subscription_error(e),
    }
}

/// PUT /api/v1/subscriptions/:id - Replace a subscription
pub async fn update_subscription(
    State(handlers): State<SubscriptionHandlers>,
    Path(subscription_id): Path<String>,
    body: Result<Json<SubscriptionRequest>, JsonRejection>,
) -> Response {
    let subscription_id = match subscription_id.parse::<SubscriptionId>() {
        Ok(id) => id,
        Err(_) => return invalid_id("subscription"),
    };
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return handle_json_rejection(rejection),
    };

    let cmd = UpdateSubscriptionCommand {
        subscription_id,
        service_name: req.service_name,
        price: req.price,
        user_id: req.user_id,
        start_date: req.start_date,
        end_date: req.end_date,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_subscription_error(e),
    }
}

/// DELETE /api/v1/subscriptions/:id - Delete a subscription
pub async fn delete_subscription(
    State(handlers): State<SubscriptionHandlers>,
    Path(subscription_id): Path<String>,
) -> Response {
    let subscription_id = match subscription_id.parse::<SubscriptionId>() {
        Ok(id) => id,
        Err(_) => return invalid_id("subscription"),
    };

    match handlers
        .delete_handler
        .handle(DeleteSubscriptionCommand { subscription_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_subscription_error(e),
    }
}
