//! CreateSubscriptionHandler - Command handler for recording a new subscription.

use std::sync::Arc;

use crate::domain::foundation::SubscriptionId;
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::SubscriptionRepository;

use super::input::{self, BlankEndDate, RawFields};

/// Command to create a subscription. Dates are `MM-YYYY` text.
///
/// An absent or blank `end_date` records an open-ended subscription.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    pub service_name: String,
    pub price: i64,
    pub user_id: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

/// Handler for creating subscriptions.
pub struct CreateSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl CreateSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<Subscription, SubscriptionError> {
        // 1. Validate input
        let fields = input::validate(
            RawFields {
                service_name: &cmd.service_name,
                price: cmd.price,
                user_id: &cmd.user_id,
                start_date: &cmd.start_date,
                end_date: cmd.end_date.as_deref(),
            },
            BlankEndDate::Unbounded,
        )?;

        // 2. Build aggregate
        let subscription = Subscription::new(
            SubscriptionId::new(),
            fields.service_name,
            fields.user_id,
            fields.interval,
        );

        // 3. Persist
        self.repository.save(&subscription).await?;

        tracing::info!(
            subscription_id = %subscription.id(),
            user_id = %subscription.user_id(),
            "Subscription created"
        );

        Ok(subscription)
    }
}
