//! Test helpers module
//!
//! This module provides utilities and helpers for testing the CampusHub
//! library. It includes the shared test context and data builders.

pub mod test_context;

pub use test_context::*;
pub use test_data::*;
