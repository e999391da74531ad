//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests, including:
//! - Fixed reference dates
//! - Hostile input fixtures
//! - Formatting assertions

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
