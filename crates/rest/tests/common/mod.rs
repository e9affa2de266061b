//! Common test utilities for listing API testing.
//!
//! This module provides test infrastructure including:
//!
//! - [`harness`] - Listing API test harness
//! - [`fixtures`] - Test data fixtures

pub mod fixtures;
pub mod harness;
