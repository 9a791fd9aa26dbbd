//! Storefront Fixtures
//!
//! Provides synthetic test data and the tracking factory for the storefront
//! test suite.
//!
//! # Modules
//!
//! - `fixtures`: Canonical, deterministic users, products, and orders
//! - `overrides`: Partial field sets that take precedence over generated defaults
//! - `generators`: Randomized fixture generators
//! - `factory`: The tracking factory with bulk cleanup
//! - `strategies`: Property-based test strategies
//! - `assertions`: Assertion helpers for fixture collections
//! - `harness`: Harness configuration for unit, e2e, performance, and load runs
//! - `performance`: Latency percentiles and threshold evaluation
//! - `security`: Vulnerability scan reports and severity gating
//! - `logging`: Tracing setup for tests

pub mod fixtures;
pub mod overrides;
pub mod generators;
pub mod factory;
pub mod strategies;
pub mod assertions;
pub mod harness;
pub mod performance;
pub mod security;
pub mod logging;
pub mod error;

pub use fixtures::*;
pub use overrides::{UserOverrides, ProductOverrides, OrderOverrides};
pub use generators::{generate_user, generate_product, generate_order, random_suffix};
pub use factory::{FixtureFactory, TestFactory};
pub use assertions::*;
pub use harness::HarnessConfig;
pub use error::FixtureError;
pub use logging::init_test_tracing;
