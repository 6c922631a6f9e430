//! Subscription repository port.
//!
//! Defines the contract for persisting and retrieving Subscription aggregates.
//! Concurrent writers are not coordinated: the last write wins.

use crate::domain::foundation::{DomainError, SubscriptionId};
use crate::domain::subscription::{Subscription, SubscriptionFilter};
use async_trait::async_trait;

/// Page size used when the caller gives none (or a non-positive one).
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Largest page a caller may request.
pub const MAX_PAGE_LIMIT: u32 = 200;

/// Repository port for Subscription persistence.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Save a new subscription.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Replace an existing subscription.
    ///
    /// # Errors
    ///
    /// - `SubscriptionNotFound` if the subscription doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Find a subscription by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>, DomainError>;

    /// List subscriptions matching `filter`.
    ///
    /// Results are ordered by start month descending, then id descending.
    async fn list(
        &self,
        filter: &SubscriptionFilter,
        page: PageRequest,
    ) -> Result<Vec<Subscription>, DomainError>;

    /// Delete a subscription.
    ///
    /// # Errors
    ///
    /// - `SubscriptionNotFound` if the subscription doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &SubscriptionId) -> Result<(), DomainError>;
}

/// Normalized pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: u32,
    offset: u64,
}

impl PageRequest {
    /// Builds a page from raw caller input.
    ///
    /// Missing or non-positive limits become [`DEFAULT_PAGE_LIMIT`], larger
    /// ones are capped at [`MAX_PAGE_LIMIT`]. Negative offsets become zero.
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        let limit = match limit {
            Some(l) if l > 0 => l.min(i64::from(MAX_PAGE_LIMIT)) as u32,
            _ => DEFAULT_PAGE_LIMIT,
        };
        let offset = offset.map_or(0, |o| o.max(0).unsigned_abs());
        Self { limit, offset }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}
