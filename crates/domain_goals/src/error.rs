//! Goal domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{GoalId, MoneyError};

/// Errors that can occur in the goals domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GoalError {
    /// Goal title was missing or blank
    #[error("Goal title must not be blank")]
    MissingTitle,

    /// Target amount was zero or negative
    #[error("Goal target must be positive, got {0}")]
    NonPositiveTarget(Decimal),

    /// Contribution amount was zero or negative
    #[error("Contribution must be positive, got {0}")]
    NonPositiveContribution(Decimal),

    /// The goal already reached its target; completed goals are terminal
    #[error("Goal {0} is already completed")]
    AlreadyCompleted(GoalId),

    /// A persisted status did not match any known state
    #[error("Unknown goal status: {0}")]
    UnknownStatus(String),

    /// Underlying money arithmetic error
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
