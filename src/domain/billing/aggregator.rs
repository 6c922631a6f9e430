//! Cost aggregation over a query window.
//!
//! For each interval the end is resolved (unbounded ends become the window's
//! `to`), both ends are clamped to the window, and a non-empty overlap of `m`
//! months contributes `price * m` to the total and `m` to the month count.
//! Intervals without overlap contribute nothing.
//!
//! The reduction is pure and order-independent. Totals accumulate in `u128`,
//! which cannot wrap for any realistic number of records.

use crate::domain::subscription::SubscriptionInterval;

use super::QueryWindow;

/// Sum of costs and overlapping months for a set of intervals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateResult {
    pub total: u128,
    pub months_counted: u64,
}

impl AggregateResult {
    /// Folds one contribution into the running result.
    pub fn absorb(&mut self, contribution: Contribution) {
        self.total = self.total.saturating_add(contribution.cost);
        self.months_counted = self.months_counted.saturating_add(contribution.months);
    }
}

/// What a single interval adds to an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    pub months: u64,
    pub cost: u128,
}

impl FromIterator<Contribution> for AggregateResult {
    fn from_iter<I: IntoIterator<Item = Contribution>>(iter: I) -> Self {
        let mut result = AggregateResult::default();
        for contribution in iter {
            result.absorb(contribution);
        }
        result
    }
}

/// Contribution of one interval, or `None` if it does not overlap the window.
pub fn contribution(window: &QueryWindow, interval: &SubscriptionInterval) -> Option<Contribution> {
    let range = window.clamp(interval.start(), interval.end())?;
    let months = range.months();
    let price = u128::from(interval.price().units());
    Some(Contribution {
        months,
        cost: price * u128::from(months),
    })
}

/// Aggregates intervals over `window`.
///
/// Returns `{0, 0}` when nothing overlaps, including for an inverted window.
pub fn aggregate<'a, I>(window: &QueryWindow, intervals: I) -> AggregateResult
where
    I: IntoIterator<Item = &'a SubscriptionInterval>,
{
    intervals
        .into_iter()
        .filter_map(|interval| contribution(window, interval))
        .collect()
}
