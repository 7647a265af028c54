//! Test utilities for unit and HTTP-level testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - In-memory repository implementations for mocking persistence
//! - A builder for constructing `AppState` with test dependencies

mod persistence_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use persistence_mocks::*;
