//! Fixture crate errors
//!
//! Generators and the in-memory factory cannot fail. Errors only come from
//! loading harness configuration or from schema constructors used by callers.

use storefront_kernel::KernelError;
use thiserror::Error;

/// Errors raised by the fixture crate
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Harness configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A value violated an entity invariant
    #[error("Schema error: {0}")]
    Kernel(#[from] KernelError),
}
