//! DeleteSubscriptionHandler - Command handler for removing a subscription.

use std::sync::Arc;

use crate::domain::foundation::SubscriptionId;
use crate::domain::subscription::SubscriptionError;
use crate::ports::SubscriptionRepository;

/// Command to delete a subscription.
#[derive(Debug, Clone)]
pub struct DeleteSubscriptionCommand {
    pub subscription_id: SubscriptionId,
}

/// Handler for deleting subscriptions.
pub struct DeleteSubscriptionHandler {
    repository: Arc<dyn SubscriptionRepository>,
}

impl DeleteSubscriptionHandler {
    pub fn new(repository: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteSubscriptionCommand) -> Result<(), SubscriptionError> {
        self.repository.delete(&cmd.subscription_id).await?;
        tracing::info!(subscription_id = %cmd.subscription_id, "Subscription deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::domain::subscription::{Subscription, SubscriptionFilter};
    use crate::ports::PageRequest;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct MockRepository {
        ids: Mutex<HashSet<SubscriptionId>>,
    }

    #[async_trait]
    impl SubscriptionRepository for MockRepository {
        async fn save(&self, _subscription: &Subscription) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _subscription: &Subscription) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(
            &self,
            _id: &SubscriptionId,
        ) -> Result<Option<Subscription>, DomainError> {
            Ok(None)
        }

        async fn list(
            &self,
            _filter: &SubscriptionFilter,
            _page: PageRequest,
        ) -> Result<Vec<Subscription>, DomainError> {
            Ok(vec![])
        }

        async fn delete(&self, id: &SubscriptionId) -> Result<(), DomainError> {
            if self.ids.lock().unwrap().remove(id) {
                Ok(())
            } else {
                Err(DomainError::new(ErrorCode::SubscriptionNotFound, "gone")
                    .with_detail("subscription_id", id.to_string()))
            }
        }
    }

    #[tokio::test]
    async fn deletes_once_then_not_found() {
        let id = SubscriptionId::new();
        let repo = Arc::new(MockRepository {
            ids: Mutex::new(HashSet::from([id])),
        });
        let handler = DeleteSubscriptionHandler::new(repo);

        handler
            .handle(DeleteSubscriptionCommand { subscription_id: id })
            .await
            .unwrap();
        let second = handler
            .handle(DeleteSubscriptionCommand { subscription_id: id })
            .await;

        assert_eq!(second, Err(SubscriptionError::NotFound(id)));
    }
}
