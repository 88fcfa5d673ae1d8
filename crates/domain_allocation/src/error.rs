//! Allocation domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::MoneyError;

/// Errors that can occur in the allocation domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    /// Payment amount was zero or negative
    #[error("Payment amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Split percentages do not sum to 100
    #[error("Split percentages must sum to 100, got {donation}/{investment}/{savings}")]
    InvalidSplit {
        donation: u32,
        investment: u32,
        savings: u32,
    },

    /// Underlying money arithmetic error
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
