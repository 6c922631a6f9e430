//! UpdateSubscriptionHandler - Command handler for full replacement.

use std::sync::Arc;

use crate::domain::foundation::SubscriptionId;
use crate::domain::subscription::{Subscription, SubscriptionError};
use crate::ports::SubscriptionRepository;

use super::input::{self, BlankEndDate, RawFields};

/// Command replacing every field of an existing subscription.
///
/// `end_date` must be absent (open-ended) or `MM-YYYY`; a blank string is
/// rejected.
#[derive(Debug, Clone)]
pub struct UpdateSubscriptionCommand {
    pub subscription_id: SubscriptionId,
    pub service_name: String,
    pub price: i64,
    pub user_id: String,
    pub start_date: String,
    pub end_date: Option<String>,
}

/// Handler for updating subscriptions.
pub struct UpdateSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl UpdateSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSubscriptionCommand,
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
            BlankEndDate::Rejected,
        )?;

        // 2. Load existing
        let mut subscription = self
            .repository
            .find_by_id(&cmd.subscription_id)
            .await?
            .ok_or_else(|| SubscriptionError::not_found(cmd.subscription_id))?;

        // 3. Replace and persist
        subscription.replace(fields.service_name, fields.user_id, fields.interval);
        self.repository.update(&subscription).await?;

        tracing::info!(subscription_id = %subscription.id(), "Subscription updated");

        Ok(subscription)
    }
}
