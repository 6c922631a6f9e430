//! Subscription-specific error types.

use crate::domain::foundation::{
    BillingMonth, DomainError, ErrorCode, SubscriptionId, ValidationError,
};

use super::values::MAX_PRICE;

/// Subscription-specific errors.
///
/// Three families are kept distinct: validation (`InvalidPrice`,
/// `InvalidDateRange`, `ValidationFailed`), `NotFound`, and collaborator
/// failures (`Infrastructure`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionError {
    /// Subscription was not found.
    NotFound(SubscriptionId),
    /// Price is not a positive integer within storage range.
    InvalidPrice(i64),
    /// End month precedes start month.
    InvalidDateRange {
        start: BillingMonth,
        end: BillingMonth,
    },
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl SubscriptionError {
    pub fn not_found(id: SubscriptionId) -> Self {
        SubscriptionError::NotFound(id)
    }
    pub fn invalid_price(price: i64) -> Self {
        SubscriptionError::InvalidPrice(price)
    }
    pub fn invalid_date_range(start: BillingMonth, end: BillingMonth) -> Self {
        SubscriptionError::InvalidDateRange { start, end }
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SubscriptionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SubscriptionError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SubscriptionError::NotFound(_) => ErrorCode::SubscriptionNotFound,
            SubscriptionError::InvalidPrice(_) => ErrorCode::InvalidPrice,
            SubscriptionError::InvalidDateRange { .. } => ErrorCode::InvalidDateRange,
            SubscriptionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SubscriptionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SubscriptionError::NotFound(id) => format!("Subscription not found: {}", id),
            SubscriptionError::InvalidPrice(price) if *price > MAX_PRICE => {
                format!("price must be <= {}, got {}", MAX_PRICE, price)
            }
            SubscriptionError::InvalidPrice(price) => {
                format!("price must be > 0, got {}", price)
            }
            SubscriptionError::InvalidDateRange { start, end } => format!(
                "end_date before start_date: {} is earlier than {}",
                end, start
            ),
            SubscriptionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SubscriptionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SubscriptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SubscriptionError {}

impl From<ValidationError> for SubscriptionError {
    fn from(err: ValidationError) -> Self {
        SubscriptionError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for SubscriptionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SubscriptionNotFound => match err
                .detail("subscription_id")
                .and_then(|id| id.parse::<SubscriptionId>().ok())
            {
                Some(id) => SubscriptionError::NotFound(id),
                None => SubscriptionError::Infrastructure(err.to_string()),
            },
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::InvalidPrice
            | ErrorCode::InvalidDateRange => SubscriptionError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                SubscriptionError::Infrastructure(err.to_string())
            }
        }
    }
}
