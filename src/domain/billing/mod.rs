//! Billing domain module.
//!
//! Month-granular cost aggregation: clamps subscription intervals to a query
//! window and sums `price * overlapping months`. No proration, no currency
//! conversion.

mod aggregator;
mod window;

pub use aggregator::{aggregate, contribution, AggregateResult, Contribution};
pub use window::{MonthRange, QueryWindow};
