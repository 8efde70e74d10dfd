//! Internal test modules - whitebox tests with crate access
//!
//! Tests that drive several modules together through crate-internal types.

mod host_pipeline;
