//! Subscription validity interval.
//!
//! The interval is what the cost aggregation consumes: a positive monthly
//! price active from a start month through an end month, or indefinitely.

use crate::domain::foundation::BillingMonth;

use super::{Price, SubscriptionError};

/// End of a subscription's validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndMonth {
    /// Active through this month, inclusive.
    Bounded(BillingMonth),
    /// Open-ended: active through any horizon it is evaluated against.
    Unbounded,
}

impl EndMonth {
    /// The recorded end month, if any.
    pub fn bounded(&self) -> Option<BillingMonth> {
        match self {
            EndMonth::Bounded(month) => Some(*month),
            EndMonth::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, EndMonth::Unbounded)
    }

    /// Effective last month when evaluated up to `horizon`.
    ///
    /// Bounded ends are returned as recorded; unbounded ends become `horizon`.
    pub fn resolve(&self, horizon: BillingMonth) -> BillingMonth {
        match self {
            EndMonth::Bounded(month) => *month,
            EndMonth::Unbounded => horizon,
        }
    }
}

impl From<Option<BillingMonth>> for EndMonth {
    fn from(month: Option<BillingMonth>) -> Self {
        month.map_or(EndMonth::Unbounded, EndMonth::Bounded)
    }
}

/// Price and validity of a single subscription.
///
/// # Invariants
///
/// - price is positive
/// - a bounded end is not earlier than the start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionInterval {
    price: Price,
    start: BillingMonth,
    end: EndMonth,
}

impl SubscriptionInterval {
    /// Validates and creates an interval.
    ///
    /// Price is checked before the dates, so input with both problems
    /// reports the price.
    ///
    /// # Errors
    ///
    /// - `InvalidPrice` if `price` is not positive or exceeds storage range
    /// - `InvalidDateRange` if a bounded `end` precedes `start`
    pub fn new(price: i64, start: BillingMonth, end: EndMonth) -> Result<Self, SubscriptionError> {
        let price = Price::new(price)?;
        Self::with_price(price, start, end)
    }

    /// Creates an interval from an already validated price.
    pub fn with_price(
        price: Price,
        start: BillingMonth,
        end: EndMonth,
    ) -> Result<Self, SubscriptionError> {
        if let EndMonth::Bounded(end_month) = end {
            if end_month < start {
                return Err(SubscriptionError::invalid_date_range(start, end_month));
            }
        }
        Ok(Self { price, start, end })
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn start(&self) -> BillingMonth {
        self.start
    }

    pub fn end(&self) -> EndMonth {
        self.end
    }
}
