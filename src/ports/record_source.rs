//! Record source port.
//!
//! Supplies the subscription intervals a cost query aggregates over.

use crate::domain::foundation::DomainError;
use crate::domain::subscription::{SubscriptionFilter, SubscriptionInterval};
use async_trait::async_trait;

/// Port for fetching filtered subscription intervals.
///
/// Implementations must return exactly the records satisfying `filter`, each
/// already normalized and validated. A failure aborts the whole fetch: no
/// partial list is returned. Callers bound the call with their own timeout and
/// may drop the future to cancel it.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch intervals of all subscriptions matching `filter`.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` if the underlying store fails
    async fn fetch_intervals(
        &self,
        filter: &SubscriptionFilter,
    ) -> Result<Vec<SubscriptionInterval>, DomainError>;
}
