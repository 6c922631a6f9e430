//! Liveness and readiness probes.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::ports::HealthProbe;

/// Upper bound for the readiness ping.
pub const READINESS_TIMEOUT: Duration = Duration::from_millis(300);

#[derive(Clone)]
pub struct HealthState {
    probe: Arc<dyn HealthProbe>,
    started_at: Instant,
}

impl HealthState {
    pub fn new(probe: Arc<dyn HealthProbe>) -> Self {
        Self {
            probe,
            started_at: Instant::now(),
        }
    }
}

/// GET /healthz - Process liveness
pub async fn liveness(State(state): State<HealthState>) -> Response {
    let uptime = state.started_at.elapsed().as_secs();
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "uptime": format!("{}s", uptime) })),
    )
        .into_response()
}

/// GET /readyz - Store reachability
pub async fn readiness(State(state): State<HealthState>) -> Response {
    let outcome = tokio::time::timeout(READINESS_TIMEOUT, state.probe.ping()).await;

    let error = match outcome {
        Ok(Ok(())) => {
            tracing::debug!("Readiness check passed");
            return (StatusCode::OK, Json(json!({ "status": "ready" }))).into_response();
        }
        Ok(Err(e)) => e.to_string(),
        Err(_) => format!("ping timed out after {}ms", READINESS_TIMEOUT.as_millis()),
    };

    tracing::warn!(error = %error, "Readiness check failed");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({ "status": "db down", "error": error })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use async_trait::async_trait;

    struct StubProbe {
        delay: Duration,
        fail: bool,
    }

    #[async_trait]
    impl HealthProbe for StubProbe {
        async fn ping(&self) -> Result<(), DomainError> {
            tokio::time::sleep(self.delay).await;
            if self.fail {
                return Err(DomainError::new(ErrorCode::DatabaseError, "refused"));
            }
            Ok(())
        }
    }

    fn state(delay: Duration, fail: bool) -> State<HealthState> {
        State(HealthState::new(Arc::new(StubProbe { delay, fail })))
    }

    #[tokio::test]
    async fn liveness_is_always_ok() {
        let response = liveness(state(Duration::ZERO, true)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_ok_when_probe_succeeds() {
        let response = readiness(state(Duration::ZERO, false)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_unavailable_when_probe_fails() {
        let response = readiness(state(Duration::ZERO, true)).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn readiness_unavailable_when_probe_is_slow() {
        let response = readiness(state(Duration::from_secs(5), false)).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
