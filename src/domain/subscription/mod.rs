//! Subscription domain module.
//!
//! Tracks what a user pays for which service and over which months.
//! Validation rules shared by creation and update live here:
//!
//! - price must be a positive integer
//! - a recorded end month may not precede the start month

mod aggregate;
mod errors;
mod filter;
mod interval;
mod values;

pub use aggregate::Subscription;
pub use errors::SubscriptionError;
pub use filter::SubscriptionFilter;
pub use interval::{EndMonth, SubscriptionInterval};
pub use values::{Price, ServiceName, MAX_PRICE, MAX_SERVICE_NAME_LENGTH};
