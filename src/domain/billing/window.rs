//! Query window and interval clamping.

use crate::domain::foundation::{month_span, BillingMonth};
use crate::domain::subscription::EndMonth;

/// Inclusive month range a cost query is restricted to.
///
/// A window whose `to` precedes `from` is accepted; it overlaps nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryWindow {
    from: BillingMonth,
    to: BillingMonth,
}

impl QueryWindow {
    pub fn new(from: BillingMonth, to: BillingMonth) -> Self {
        Self { from, to }
    }

    pub fn from(&self) -> BillingMonth {
        self.from
    }

    pub fn to(&self) -> BillingMonth {
        self.to
    }

    /// Number of months in the window; zero when inverted.
    pub fn month_count(&self) -> u64 {
        MonthRange::new(self.from, self.to).map_or(0, |range| range.months())
    }

    /// Intersects a validity interval with the window.
    ///
    /// An unbounded end is evaluated as the window's `to`. Returns `None` when
    /// the interval and the window share no month.
    pub fn clamp(&self, start: BillingMonth, end: EndMonth) -> Option<MonthRange> {
        let clamped_start = start.max(self.from);
        let clamped_end = end.resolve(self.to).min(self.to);
        MonthRange::new(clamped_start, clamped_end)
    }
}

/// Non-empty inclusive month range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthRange {
    start: BillingMonth,
    end: BillingMonth,
}

impl MonthRange {
    /// Returns `None` when `end < start`.
    pub fn new(start: BillingMonth, end: BillingMonth) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn start(&self) -> BillingMonth {
        self.start
    }

    pub fn end(&self) -> BillingMonth {
        self.end
    }

    /// Months covered, counting both ends. Always at least 1.
    pub fn months(&self) -> u64 {
        month_span(self.start, self.end).unsigned_abs()
    }
}
