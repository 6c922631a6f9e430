//! Subscription aggregate entity.
//!
//! A subscription records that a user pays a fixed monthly price for a named
//! service over a month interval. Updates replace every field except the id.

use crate::domain::foundation::{SubscriptionId, UserId};

use super::{ServiceName, SubscriptionInterval};

/// Subscription aggregate.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `service_name` is non-empty
/// - `interval` satisfies the price and date-order rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    id: SubscriptionId,
    service_name: ServiceName,
    user_id: UserId,
    interval: SubscriptionInterval,
}

impl Subscription {
    /// Creates a subscription from validated parts.
    pub fn new(
        id: SubscriptionId,
        service_name: ServiceName,
        user_id: UserId,
        interval: SubscriptionInterval,
    ) -> Self {
        Self {
            id,
            service_name,
            user_id,
            interval,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SubscriptionId {
        &self.id
    }

    pub fn service_name(&self) -> &ServiceName {
        &self.service_name
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn interval(&self) -> &SubscriptionInterval {
        &self.interval
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces all mutable fields, keeping the identity.
    pub fn replace(
        &mut self,
        service_name: ServiceName,
        user_id: UserId,
        interval: SubscriptionInterval,
    ) {
        self.service_name = service_name;
        self.user_id = user_id;
        self.interval = interval;
    }
}
