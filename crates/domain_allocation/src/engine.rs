//! Round-up and split computation
//!
//! The engine maps an original payment amount to the rounded charge, the
//! spare change, and the per-wallet allocation. It never consults account
//! state; insufficient-funds checks belong to the transaction coordinator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::error::AllocationError;
use crate::split::SplitPercentages;

/// Payments round up to the next multiple of this many currency units
pub const ROUND_UP_STEP_UNITS: u32 = 100;

/// The computed outcome of a payment round-up
///
/// Invariants upheld by [`allocate`]:
/// - `rounded >= original` and `rounded - original < 100`
/// - `donation + investment + savings == spare_change`, exactly
/// - every component is non-negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpareChangeBreakdown {
    /// The amount the user asked to pay
    pub original: Money,
    /// The amount actually charged (next ₹100 boundary)
    pub rounded: Money,
    /// `rounded - original`; zero when the amount is already a multiple of 100
    pub spare_change: Money,
    /// Portion of the spare change credited to the donation wallet
    pub donation: Money,
    /// Portion credited to the investment wallet
    pub investment: Money,
    /// Portion credited to the savings wallet (absorbs the rounding remainder)
    pub savings: Money,
}

/// Computes the round-up breakdown for a payment
///
/// # Arguments
///
/// * `amount` - The original payment amount; must be strictly positive
/// * `split` - The account's current wallet split
///
/// # Errors
///
/// Returns [`AllocationError::NonPositiveAmount`] for zero or negative
/// amounts and [`AllocationError::InvalidSplit`] when the split does not
/// sum to 100.
pub fn allocate(
    amount: Money,
    split: &SplitPercentages,
) -> Result<SpareChangeBreakdown, AllocationError> {
    if !amount.is_positive() {
        return Err(AllocationError::NonPositiveAmount(amount.amount()));
    }
    split.validate()?;

    let original = amount.round_to_currency();
    let rounded = original.ceil_to_step(Decimal::from(ROUND_UP_STEP_UNITS))?;
    let spare_change = rounded.checked_sub(&original)?;

    // Donation and investment round to currency precision; savings takes
    // the remainder so the three parts always reconstruct the spare change.
    let parts = spare_change.allocate_by_ratios(&split.as_ratios())?;
    let [donation, investment, savings]: [Money; 3] = parts
        .try_into()
        .expect("allocate_by_ratios returns one part per ratio");

    Ok(SpareChangeBreakdown {
        original,
        rounded,
        spare_change,
        donation,
        investment,
        savings,
    })
}
