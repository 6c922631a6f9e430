//! PostgreSQL implementation of SubscriptionRepository.
//!
//! Persists Subscription aggregates to the `subscriptions` table.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{BillingMonth, DomainError, ErrorCode, SubscriptionId, UserId};
use crate::domain::subscription::{
    EndMonth, ServiceName, Subscription, SubscriptionFilter, SubscriptionInterval,
};
use crate::ports::{PageRequest, SubscriptionRepository};

use super::filter::{FilterBinds, FILTER_CLAUSE};

/// PostgreSQL implementation of the SubscriptionRepository port.
#[derive(Clone)]
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    /// Creates a new PostgresSubscriptionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a subscription.
#[derive(Debug, sqlx::FromRow)]
struct SubscriptionRow {
    id: Uuid,
    service_name: String,
    price: i32,
    user_id: Uuid,
    start_month: NaiveDate,
    end_month: Option<NaiveDate>,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = DomainError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        let service_name = ServiceName::new(row.service_name).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid service_name: {}", e))
        })?;
        let interval = SubscriptionInterval::new(
            i64::from(row.price),
            BillingMonth::normalize(row.start_month),
            EndMonth::from(row.end_month.map(BillingMonth::normalize)),
        )
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid stored subscription {}: {}", row.id, e),
            )
        })?;

        Ok(Subscription::new(
            SubscriptionId::from_uuid(row.id),
            service_name,
            UserId::from_uuid(row.user_id),
            interval,
        ))
    }
}

fn not_found(id: &SubscriptionId) -> DomainError {
    DomainError::new(
        ErrorCode::SubscriptionNotFound,
        format!("Subscription not found: {}", id),
    )
    .with_detail("subscription_id", id.to_string())
}

fn end_month_date(subscription: &Subscription) -> Option<NaiveDate> {
    subscription
        .interval()
        .end()
        .bounded()
        .map(|month| month.first_day())
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO subscriptions (
                id, service_name, price, user_id, start_month, end_month
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(subscription.id().as_uuid())
        .bind(subscription.service_name().as_str())
        .bind(subscription.interval().price().as_i32())
        .bind(subscription.user_id().as_uuid())
        .bind(subscription.interval().start().first_day())
        .bind(end_month_date(subscription))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert subscription: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE subscriptions SET
                service_name = $2,
                price = $3,
                user_id = $4,
                start_month = $5,
                end_month = $6
            WHERE id = $1
            "#,
        )
        .bind(subscription.id().as_uuid())
        .bind(subscription.service_name().as_str())
        .bind(subscription.interval().price().as_i32())
        .bind(subscription.user_id().as_uuid())
        .bind(subscription.interval().start().first_day())
        .bind(end_month_date(subscription))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update subscription: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(not_found(subscription.id()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRow> = sqlx::query_as(
            r#"
            SELECT id, service_name, price, user_id, start_month, end_month
            FROM subscriptions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch subscription: {}", e),
            )
        })?;

        row.map(Subscription::try_from).transpose()
    }

    async fn list(
        &self,
        filter: &SubscriptionFilter,
        page: PageRequest,
    ) -> Result<Vec<Subscription>, DomainError> {
        let binds = FilterBinds::from(filter);
        let sql = format!(
            r#"
            SELECT id, service_name, price, user_id, start_month, end_month
            FROM subscriptions
            WHERE {}
            ORDER BY start_month DESC, id DESC
            LIMIT $3 OFFSET $4
            "#,
            FILTER_CLAUSE
        );

        let rows: Vec<SubscriptionRow> = sqlx::query_as(&sql)
            .bind(binds.user_id)
            .bind(binds.service_pattern)
            .bind(i64::from(page.limit()))
            .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to list subscriptions: {}", e),
                )
            })?;

        rows.into_iter().map(Subscription::try_from).collect()
    }

    async fn delete(&self, id: &SubscriptionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete subscription: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}
