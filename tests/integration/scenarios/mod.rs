//! Integration test scenarios
//!
//! Complete admin and student journeys that exercise multiple services
//! working together.

pub mod student_journey_test;
