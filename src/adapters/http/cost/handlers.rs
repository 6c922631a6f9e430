//! HTTP handlers for cost endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_query_rejection, handle_subscription_error};
use crate::application::handlers::cost::{TotalCostHandler, TotalCostQuery};

use super::dto::{TotalCostParams, TotalCostResponse};

#[derive(Clone)]
pub struct CostHandlers {
    total_handler: Arc<TotalCostHandler>,
}

impl CostHandlers {
    pub fn new(total_handler: Arc<TotalCostHandler>) -> Self {
        Self { total_handler }
    }
}

/// GET /api/v1/cost/total - Total cost over a month window
pub async fn total_cost(
    State(handlers): State<CostHandlers>,
    params: Result<Query<TotalCostParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => return handle_query_rejection(rejection),
    };

    let query = TotalCostQuery {
        from: params.from,
        to: params.to,
        user_id: params.user_id,
        service_name: params.service_name,
    };

    match handlers.total_handler.handle(query).await {
        Ok(view) => (StatusCode::OK, Json(TotalCostResponse::from(view))).into_response(),
        Err(e) => handle_subscription_error(e),
    }
}
