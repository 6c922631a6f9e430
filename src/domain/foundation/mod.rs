//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the subscription domain.

mod billing_month;
mod errors;
mod ids;

pub use billing_month::{month_span, BillingMonth, MONTH_TEXT_FORMAT};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{SubscriptionId, UserId};
