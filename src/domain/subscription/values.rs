//! Subscription value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

use super::SubscriptionError;

/// Largest storable monthly price (PostgreSQL `integer`).
pub const MAX_PRICE: i64 = i32::MAX as i64;

/// Maximum length for a service name, in characters.
pub const MAX_SERVICE_NAME_LENGTH: usize = 255;

/// Monthly price in whole currency units. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i32);

impl Price {
    /// Creates a price.
    ///
    /// # Errors
    ///
    /// - `InvalidPrice` unless `1 <= amount <= MAX_PRICE`
    pub fn new(amount: i64) -> Result<Self, SubscriptionError> {
        if amount <= 0 {
            return Err(SubscriptionError::invalid_price(amount));
        }
        i32::try_from(amount)
            .map(Self)
            .map_err(|_| SubscriptionError::invalid_price(amount))
    }

    /// Amount in whole currency units.
    pub fn amount(&self) -> i64 {
        i64::from(self.0)
    }

    /// Amount as an unsigned count of units; never zero.
    pub fn units(&self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Amount as stored in the database.
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of the subscribed service, e.g. "Yandex Plus".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// Creates a service name, trimming surrounding whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("service_name"));
        }
        let length = trimmed.chars().count();
        if length > MAX_SERVICE_NAME_LENGTH {
            return Err(ValidationError::out_of_range(
                "service_name",
                1,
                MAX_SERVICE_NAME_LENGTH as i64,
                length as i64,
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_accepts_positive_amounts() {
        assert_eq!(Price::new(400).unwrap().amount(), 400);
        assert_eq!(Price::new(MAX_PRICE).unwrap().as_i32(), i32::MAX);
    }

    #[test]
    fn price_units_match_amount() {
        assert_eq!(Price::new(1).unwrap().units(), 1);
        assert_eq!(Price::new(MAX_PRICE).unwrap().units(), i32::MAX as u32);
    }

    #[test]
    fn price_rejects_zero_and_negative() {
        assert_eq!(Price::new(0), Err(SubscriptionError::InvalidPrice(0)));
        assert_eq!(Price::new(-5), Err(SubscriptionError::InvalidPrice(-5)));
    }

    #[test]
    fn price_rejects_amounts_beyond_storage_range() {
        assert_eq!(
            Price::new(MAX_PRICE + 1),
            Err(SubscriptionError::InvalidPrice(MAX_PRICE + 1))
        );
    }

    #[test]
    fn service_name_is_trimmed() {
        let name = ServiceName::new("  Yandex Plus ").unwrap();
        assert_eq!(name.as_str(), "Yandex Plus");
    }

    #[test]
    fn service_name_rejects_blank() {
        assert_eq!(
            ServiceName::new("   "),
            Err(ValidationError::empty_field("service_name"))
        );
    }

    #[test]
    fn service_name_rejects_overlong() {
        let long = "x".repeat(MAX_SERVICE_NAME_LENGTH + 1);
        assert!(matches!(
            ServiceName::new(long),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
