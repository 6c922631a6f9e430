//! PostgreSQL implementation of RecordSource.

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::TryStreamExt;
use sqlx::PgPool;

use crate::domain::foundation::{BillingMonth, DomainError, ErrorCode};
use crate::domain::subscription::{EndMonth, SubscriptionFilter, SubscriptionInterval};
use crate::ports::RecordSource;

use super::filter::{FilterBinds, FILTER_CLAUSE};

/// Streams subscription intervals matching a filter.
#[derive(Clone)]
pub struct PostgresRecordSource {
    pool: PgPool,
}

impl PostgresRecordSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct IntervalRow {
    price: i32,
    start_month: NaiveDate,
    end_month: Option<NaiveDate>,
}

impl TryFrom<IntervalRow> for SubscriptionInterval {
    type Error = DomainError;

    fn try_from(row: IntervalRow) -> Result<Self, Self::Error> {
        SubscriptionInterval::new(
            i64::from(row.price),
            BillingMonth::normalize(row.start_month),
            EndMonth::from(row.end_month.map(BillingMonth::normalize)),
        )
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid stored subscription interval: {}", e),
            )
        })
    }
}

#[async_trait]
impl RecordSource for PostgresRecordSource {
    async fn fetch_intervals(
        &self,
        filter: &SubscriptionFilter,
    ) -> Result<Vec<SubscriptionInterval>, DomainError> {
        let binds = FilterBinds::from(filter);
        let sql = format!(
            "SELECT price, start_month, end_month FROM subscriptions WHERE {}",
            FILTER_CLAUSE
        );

        let mut rows = sqlx::query_as::<_, IntervalRow>(&sql)
            .bind(binds.user_id)
            .bind(binds.service_pattern)
            .fetch(&self.pool);

        let mut intervals = Vec::new();
        while let Some(row) = rows.try_next().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch subscription intervals: {}", e),
            )
        })? {
            intervals.push(SubscriptionInterval::try_from(row)?);
        }

        tracing::debug!(records = intervals.len(), "Fetched subscription intervals");
        Ok(intervals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_with_inverted_dates_is_rejected() {
        let row = IntervalRow {
            price: 100,
            start_month: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end_month: Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()),
        };
        let err = SubscriptionInterval::try_from(row).unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn null_end_is_unbounded() {
        let row = IntervalRow {
            price: 100,
            start_month: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end_month: None,
        };
        let interval = SubscriptionInterval::try_from(row).unwrap();
        assert!(interval.end().is_unbounded());
    }
}
