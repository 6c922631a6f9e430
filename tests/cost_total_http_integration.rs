//! Integration tests for the total cost endpoint and the service probes.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use subscription_tracker::adapters::memory::InMemorySubscriptionStore;
use subscription_tracker::config::AppConfig;
use subscription_tracker::domain::foundation::{DomainError, ErrorCode};
use subscription_tracker::domain::subscription::{SubscriptionFilter, SubscriptionInterval};
use subscription_tracker::ports::{HealthProbe, RecordSource};
use subscription_tracker::startup::{build_router, Ports};

// =============================================================================
// Test Infrastructure
// =============================================================================

const ALICE: &str = "60601fee-2bf1-4721-ae6f-7636e79a0cba";
const BOB: &str = "1c8a9a1e-5a3f-4c1b-9a55-0f1e2d3c4b5a";

/// Store that is unreachable for every operation.
struct DownStore;

#[async_trait]
impl RecordSource for DownStore {
    async fn fetch_intervals(
        &self,
        _filter: &SubscriptionFilter,
    ) -> Result<Vec<SubscriptionInterval>, DomainError> {
        Err(DomainError::new(ErrorCode::DatabaseError, "connection refused"))
    }
}

#[async_trait]
impl HealthProbe for DownStore {
    async fn ping(&self) -> Result<(), DomainError> {
        Err(DomainError::new(ErrorCode::DatabaseError, "connection refused"))
    }
}

fn app() -> Router {
    let store = Arc::new(InMemorySubscriptionStore::new());
    build_router(
        Ports {
            repository: store.clone(),
            records: store.clone(),
            health: store,
        },
        &AppConfig::default(),
    )
}

fn broken_app() -> Router {
    let down = Arc::new(DownStore);
    build_router(
        Ports {
            repository: Arc::new(InMemorySubscriptionStore::new()),
            records: down.clone(),
            health: down,
        },
        &AppConfig::default(),
    )
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn create(router: &Router, body: Value) {
    let request = Request::post("/api/v1/subscriptions")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, json) = send(router, request).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected body: {json}");
}

async fn seed_scenario(router: &Router) {
    create(
        router,
        json!({"service_name": "Yandex Plus", "price": 400, "user_id": ALICE, "start_date": "01-2025"}),
    )
    .await;
    create(
        router,
        json!({
            "service_name": "Kinopoisk",
            "price": 200,
            "user_id": ALICE,
            "start_date": "08-2025",
            "end_date": "08-2025"
        }),
    )
    .await;
    create(
        router,
        json!({"service_name": "Yandex Plus", "price": 300, "user_id": BOB, "start_date": "10-2025"}),
    )
    .await;
}

// =============================================================================
// Total cost
// =============================================================================

#[tokio::test]
async fn total_sums_overlapping_months() {
    let router = app();
    seed_scenario(&router).await;

    let (status, json) = get(&router, "/api/v1/cost/total?from=07-2025&to=09-2025").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"total": 1400, "currency": "RUB", "months_counted": 4}));
}

#[tokio::test]
async fn total_applies_user_and_service_filters() {
    let router = app();
    seed_scenario(&router).await;

    let (_, by_user) = get(
        &router,
        &format!("/api/v1/cost/total?from=07-2025&to=12-2025&user_id={BOB}"),
    )
    .await;
    assert_eq!(by_user["total"], 900);
    assert_eq!(by_user["months_counted"], 3);

    let (_, by_service) = get(
        &router,
        "/api/v1/cost/total?from=07-2025&to=09-2025&service_name=kinopoisk",
    )
    .await;
    assert_eq!(by_service["total"], 200);
    assert_eq!(by_service["months_counted"], 1);
}

#[tokio::test]
async fn subscription_starting_after_window_costs_nothing() {
    let router = app();
    create(
        &router,
        json!({"service_name": "Netflix", "price": 400, "user_id": ALICE, "start_date": "10-2025"}),
    )
    .await;

    let (_, json) = get(&router, "/api/v1/cost/total?from=07-2025&to=09-2025").await;

    assert_eq!(json["total"], 0);
    assert_eq!(json["months_counted"], 0);
}

#[tokio::test]
async fn inverted_window_returns_zero() {
    let router = app();
    seed_scenario(&router).await;

    let (status, json) = get(&router, "/api/v1/cost/total?from=09-2025&to=07-2025").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 0);
}

#[tokio::test]
async fn missing_or_malformed_window_returns_400() {
    let router = app();

    let (missing, json) = get(&router, "/api/v1/cost/total?to=09-2025").await;
    assert_eq!(missing, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"]["field"], "from");

    let (malformed, json) = get(&router, "/api/v1/cost/total?from=07-2025&to=2025-09").await;
    assert_eq!(malformed, StatusCode::BAD_REQUEST);
    assert_eq!(json["details"]["field"], "to");
}

#[tokio::test]
async fn service_filter_matches_text_as_given() {
    let router = app();
    for service in ["Yandex Plus", "Plusnet"] {
        create(
            &router,
            json!({"service_name": service, "price": 100, "user_id": ALICE, "start_date": "01-2025"}),
        )
        .await;
    }

    let (status, json) = get(
        &router,
        "/api/v1/cost/total?from=01-2025&to=01-2025&service_name=%20Plus",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 100);
    assert_eq!(json["months_counted"], 1);
}

#[tokio::test]
async fn duplicate_query_parameter_returns_json_400() {
    let router = app();

    let (status, json) = get(
        &router,
        "/api/v1/cost/total?from=01-2025&from=02-2025&to=03-2025",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].as_str().unwrap().contains("from"));
}

#[tokio::test]
async fn source_failure_returns_500_without_details() {
    let router = broken_app();

    let (status, json) = get(&router, "/api/v1/cost/total?from=07-2025&to=09-2025").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json["message"].as_str().unwrap().contains("connection refused"));
}

// =============================================================================
// Probes and middleware
// =============================================================================

#[tokio::test]
async fn healthz_reports_ok() {
    let (status, json) = get(&app(), "/healthz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["uptime"].is_string());
}

#[tokio::test]
async fn readyz_reflects_store_reachability() {
    let (ok, json) = get(&app(), "/readyz").await;
    assert_eq!(ok, StatusCode::OK);
    assert_eq!(json["status"], "ready");

    let (down, json) = get(&broken_app(), "/readyz").await;
    assert_eq!(down, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "db down");
    assert!(json["error"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn request_id_is_generated_and_propagated() {
    let router = app();

    let response = router
        .clone()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));

    let response = router
        .oneshot(
            Request::get("/healthz")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");
}
