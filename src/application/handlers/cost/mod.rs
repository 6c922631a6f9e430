//! Cost query handlers.

mod total_cost;

pub use total_cost::{TotalCostHandler, TotalCostQuery, TotalCostView};
