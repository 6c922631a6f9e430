//! Readiness probe port.

use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Checks that the backing store can serve requests.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Round-trips to the store.
    async fn ping(&self) -> Result<(), DomainError>;
}
