//! In-memory subscription store.
//!
//! Implements `SubscriptionRepository`, `RecordSource` and `HealthProbe` over a
//! single map. Data does not survive restarts.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId};
use crate::domain::subscription::{Subscription, SubscriptionFilter, SubscriptionInterval};
use crate::ports::{HealthProbe, PageRequest, RecordSource, SubscriptionRepository};

/// In-memory implementation of the subscription ports.
///
/// Thread-safe via internal `Mutex`.
#[derive(Default)]
pub struct InMemorySubscriptionStore {
    subscriptions: Mutex<HashMap<SubscriptionId, Subscription>>,
}

impl InMemorySubscriptionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `subscriptions`.
    pub fn with_subscriptions(subscriptions: impl IntoIterator<Item = Subscription>) -> Self {
        let map = subscriptions.into_iter().map(|s| (*s.id(), s)).collect();
        Self {
            subscriptions: Mutex::new(map),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SubscriptionId, Subscription>>, DomainError> {
        self.subscriptions.lock().map_err(|_| {
            DomainError::new(ErrorCode::InternalError, "Subscription store lock poisoned")
        })
    }
}

fn not_found(id: &SubscriptionId) -> DomainError {
    DomainError::new(
        ErrorCode::SubscriptionNotFound,
        format!("Subscription not found: {}", id),
    )
    .with_detail("subscription_id", id.to_string())
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionStore {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        self.lock()?.insert(*subscription.id(), subscription.clone());
        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut map = self.lock()?;
        match map.get_mut(subscription.id()) {
            Some(existing) => {
                *existing = subscription.clone();
                Ok(())
            }
            None => Err(not_found(subscription.id())),
        }
    }

    async fn find_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>, DomainError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn list(
        &self,
        filter: &SubscriptionFilter,
        page: PageRequest,
    ) -> Result<Vec<Subscription>, DomainError> {
        let mut matching: Vec<Subscription> = self
            .lock()?
            .values()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();

        matching.sort_by_key(|s| Reverse((s.interval().start(), *s.id())));

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        Ok(matching
            .into_iter()
            .skip(offset)
            .take(page.limit() as usize)
            .collect())
    }

    async fn delete(&self, id: &SubscriptionId) -> Result<(), DomainError> {
        match self.lock()?.remove(id) {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        }
    }
}

#[async_trait]
impl RecordSource for InMemorySubscriptionStore {
    async fn fetch_intervals(
        &self,
        filter: &SubscriptionFilter,
    ) -> Result<Vec<SubscriptionInterval>, DomainError> {
        Ok(self
            .lock()?
            .values()
            .filter(|s| filter.matches(s))
            .map(|s| *s.interval())
            .collect())
    }
}

#[async_trait]
impl HealthProbe for InMemorySubscriptionStore {
    async fn ping(&self) -> Result<(), DomainError> {
        self.lock().map(|_| ())
    }
}
