//! Per-cell layout orchestration.
//!
//! A [`CellLayoutController`] drives one visible row through its strategy's
//! hooks on every layout pass, and stops styling once the same frame keeps
//! coming back.

pub mod controller;

pub use controller::{CellLayoutController, LayoutPass};
