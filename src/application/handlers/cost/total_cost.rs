//! TotalCostHandler - Query handler summing subscription cost over a month window.

use std::sync::Arc;

use crate::domain::billing::{aggregate, QueryWindow};
use crate::domain::foundation::BillingMonth;
use crate::domain::subscription::SubscriptionError;
use crate::ports::RecordSource;

use crate::application::handlers::subscription::build_filter;

/// Query for the total cost over `[from, to]`, both `MM-YYYY`.
#[derive(Debug, Clone, Default)]
pub struct TotalCostQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub user_id: Option<String>,
    pub service_name: Option<String>,
}

/// Result of a total cost query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalCostView {
    pub total: u128,
    pub currency: String,
    pub months_counted: u64,
}

/// Handler computing total cost.
pub struct TotalCostHandler {
    source: Arc<dyn RecordSource>,
    currency: String,
}

impl TotalCostHandler {
    pub fn new(source: Arc<dyn RecordSource>, currency: impl Into<String>) -> Self {
        Self {
            source,
            currency: currency.into(),
        }
    }

    pub async fn handle(&self, query: TotalCostQuery) -> Result<TotalCostView, SubscriptionError> {
        // 1. Parse window and filter
        let from = required_month("from", query.from.as_deref())?;
        let to = required_month("to", query.to.as_deref())?;
        let window = QueryWindow::new(from, to);
        let filter = build_filter(query.user_id.as_deref(), query.service_name)?;

        // 2. Fetch matching intervals
        let intervals = self.source.fetch_intervals(&filter).await?;

        // 3. Aggregate
        let result = aggregate(&window, &intervals);

        tracing::debug!(
            from = %from,
            to = %to,
            records = intervals.len(),
            total = %result.total,
            months_counted = result.months_counted,
            "Total cost computed"
        );

        Ok(TotalCostView {
            total: result.total,
            currency: self.currency.clone(),
            months_counted: result.months_counted,
        })
    }
}

fn required_month(field: &str, raw: Option<&str>) -> Result<BillingMonth, SubscriptionError> {
    match raw.map(str::trim) {
        None | Some("") => Err(SubscriptionError::validation(
            field,
            format!("{} is required (MM-YYYY)", field),
        )),
        Some(text) => Ok(BillingMonth::parse_field(field, text)?),
    }
}
