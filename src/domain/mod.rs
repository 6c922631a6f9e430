//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (billing month, IDs, errors)
//! - `subscription` - Subscription aggregate, validity interval and validation
//! - `billing` - Query window clamping and cost aggregation

pub mod billing;
pub mod foundation;
pub mod subscription;
