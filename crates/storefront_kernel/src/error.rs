//! Kernel error types raised at schema construction boundaries

use rust_decimal::Decimal;
use thiserror::Error;

use crate::order::OrderStatus;

/// Errors produced when a value would violate an entity invariant
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KernelError {
    #[error("Amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    #[error("Quantity must be a positive integer")]
    ZeroQuantity,

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl KernelError {
    pub fn validation(message: impl Into<String>) -> Self {
        KernelError::Validation(message.into())
    }
}
