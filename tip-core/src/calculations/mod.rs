//! Scenario calculations for the three tax additions.
//!
//! This module turns a [`BillState`](crate::BillState) into the rate, tax and
//! per-person total shown on each row of the screen, and provides the shared
//! rounding helpers used when those values are formatted.

pub mod common;
pub mod scenario;

pub use scenario::TaxScenario;
