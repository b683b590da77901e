//! Reporting surface tests
