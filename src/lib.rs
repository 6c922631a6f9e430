//! Subscription tracker.
//!
//! Records which users pay for which services over which months, and sums
//! what a filtered set of subscriptions costs over a month window.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod startup;
pub mod telemetry;
