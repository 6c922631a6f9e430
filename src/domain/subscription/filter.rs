//! Record selection by owner and service name.

use crate::domain::foundation::UserId;

use super::Subscription;

/// Optional restrictions on which subscriptions take part in a query.
///
/// A subscription matches when its owner equals `user_id` (if set) and its
/// service name contains `service_name` case-insensitively (if set).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionFilter {
    user_id: Option<UserId>,
    service_name: Option<String>,
}

impl SubscriptionFilter {
    /// A filter that matches every subscription.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Restricts to service names containing `fragment` as given, surrounding
    /// whitespace included. Blank text is ignored.
    pub fn with_service_name(mut self, fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        self.service_name = (!fragment.trim().is_empty()).then_some(fragment);
        self
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn service_name(&self) -> Option<&str> {
        self.service_name.as_deref()
    }

    /// Evaluates the filter against a subscription.
    pub fn matches(&self, subscription: &Subscription) -> bool {
        if let Some(user_id) = &self.user_id {
            if subscription.user_id() != user_id {
                return false;
            }
        }
        match &self.service_name {
            Some(fragment) => subscription
                .service_name()
                .as_str()
                .to_lowercase()
                .contains(&fragment.to_lowercase()),
            None => true,
        }
    }
}
