//! HTTP DTOs for subscription endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::subscription::Subscription;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body for creating or fully replacing a subscription.
///
/// Missing fields fall back to empty values so that validation can name the
/// offending field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubscriptionRequest {
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Query parameters for listing subscriptions.
///
/// `limit` and `offset` are kept as text; unparseable values fall back to
/// the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSubscriptionsParams {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
}

impl ListSubscriptionsParams {
    pub fn limit(&self) -> Option<i64> {
        lenient_int(self.limit.as_deref())
    }

    pub fn offset(&self) -> Option<i64> {
        lenient_int(self.offset.as_deref())
    }
}

fn lenient_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|text| text.trim().parse().ok())
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Subscription as returned by the API. Dates are `MM-YYYY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    pub id: String,
    pub service_name: String,
    pub price: i64,
    pub user_id: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl From<&Subscription> for SubscriptionResponse {
    fn from(subscription: &Subscription) -> Self {
        let interval = subscription.interval();
        Self {
            id: subscription.id().to_string(),
            service_name: subscription.service_name().as_str().to_string(),
            price: interval.price().amount(),
            user_id: subscription.user_id().to_string(),
            start_date: interval.start().to_string(),
            end_date: interval.end().bounded().map(|end| end.to_string()),
        }
    }
}
