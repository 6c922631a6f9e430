//! Error responses shared by every HTTP endpoint.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::subscription::SubscriptionError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Maps a subscription error to its HTTP response.
pub fn handle_subscription_error(error: SubscriptionError) -> Response {
    match error {
        SubscriptionError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Subscription", &id.to_string())),
        )
            .into_response(),
        SubscriptionError::ValidationFailed { ref field, .. } => {
            let body = ErrorResponse {
                code: error.code().to_string(),
                message: error.message(),
                details: None,
            }
            .with_details(serde_json::json!({ "field": field }));
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        SubscriptionError::InvalidPrice(_) | SubscriptionError::InvalidDateRange { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                code: error.code().to_string(),
                message: error.message(),
                details: None,
            }),
        )
            .into_response(),
        SubscriptionError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Request failed on infrastructure error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}

/// Maps a rejected JSON body to 400.
pub fn handle_json_rejection(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(format!(
            "Invalid request body: {}",
            rejection.body_text()
        ))),
    )
        .into_response()
}

/// Maps a rejected query string to 400.
pub fn handle_query_rejection(rejection: QueryRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(format!(
            "Invalid query string: {}",
            rejection.body_text()
        ))),
    )
        .into_response()
}

/// 400 response for a path id that is not a UUID.
pub fn invalid_id(resource_type: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(format!("Invalid {} ID", resource_type))),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{BillingMonth, SubscriptionId};

    #[test]
    fn error_response_bad_request_creates_correctly() {
        let error = ErrorResponse::bad_request("Invalid input");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Invalid input");
        assert!(error.details.is_none());
    }

    #[test]
    fn error_response_omits_absent_details() {
        let json = serde_json::to_value(ErrorResponse::internal("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"code": "INTERNAL_ERROR", "message": "boom"}));
    }

    #[test]
    fn validation_errors_map_to_400() {
        let month: BillingMonth = "01-2025".parse().unwrap();
        let errors = [
            SubscriptionError::invalid_price(0),
            SubscriptionError::invalid_date_range(month, month),
            SubscriptionError::validation("user_id", "must be a UUID"),
        ];
        for error in errors {
            assert_eq!(handle_subscription_error(error).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn query_rejection_maps_to_json_400() {
        use crate::adapters::http::cost::TotalCostParams;
        use axum::{body::to_bytes, extract::Query, http::Uri};

        let uri: Uri = "/total?from=01-2025&from=02-2025&to=03-2025".parse().unwrap();
        let rejection = Query::<TotalCostParams>::try_from_uri(&uri).unwrap_err();

        let response = handle_query_rejection(rejection);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json["message"].as_str().unwrap().starts_with("Invalid query string"));
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_subscription_error(SubscriptionError::not_found(SubscriptionId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_subscription_error(SubscriptionError::infrastructure("db down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
