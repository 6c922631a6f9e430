//! ListSubscriptionsHandler - Query handler for filtered, paginated listings.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::subscription::{Subscription, SubscriptionError, SubscriptionFilter};
use crate::ports::{PageRequest, SubscriptionRepository};

/// Query for listing subscriptions.
///
/// `user_id` must be a UUID when present. A blank `service_name` is ignored.
/// Pagination values are normalized by [`PageRequest::new`].
#[derive(Debug, Clone, Default)]
pub struct ListSubscriptionsQuery {
    pub user_id: Option<String>,
    pub service_name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Handler for listing subscriptions.
pub struct ListSubscriptionsHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl ListSubscriptionsHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListSubscriptionsQuery,
    ) -> Result<Vec<Subscription>, SubscriptionError> {
        let filter = build_filter(query.user_id.as_deref(), query.service_name)?;
        let page = PageRequest::new(query.limit, query.offset);

        let subscriptions = self.repository.list(&filter, page).await?;
        Ok(subscriptions)
    }
}

/// Builds a filter from optional raw user id and service name.
///
/// A blank user id counts as absent.
pub(crate) fn build_filter(
    user_id: Option<&str>,
    service_name: Option<String>,
) -> Result<SubscriptionFilter, SubscriptionError> {
    let mut filter = SubscriptionFilter::any();
    if let Some(raw) = user_id.filter(|raw| !raw.trim().is_empty()) {
        filter = filter.with_user(UserId::parse(raw)?);
    }
    if let Some(name) = service_name {
        filter = filter.with_service_name(name);
    }
    Ok(filter)
}
