//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The in-memory repository used for happy paths lives in `adapters::memory`;
//! the mocks here record calls or fail on purpose.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
