//! Wallet split percentages

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AllocationError;

/// The three percentages governing how spare change divides across wallets
///
/// Percentages are whole integers and must sum to exactly 100. A new
/// account starts at 40/40/20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitPercentages {
    /// Share routed to the donation wallet (0-100)
    pub donation: u32,
    /// Share routed to the investment wallet (0-100)
    pub investment: u32,
    /// Share routed to the savings wallet (0-100)
    pub savings: u32,
}

impl SplitPercentages {
    /// Creates a split, rejecting percentages that do not sum to 100
    pub fn new(donation: u32, investment: u32, savings: u32) -> Result<Self, AllocationError> {
        let split = Self {
            donation,
            investment,
            savings,
        };
        split.validate()?;
        Ok(split)
    }

    /// Validates that the percentages sum to exactly 100
    pub fn validate(&self) -> Result<(), AllocationError> {
        let total = self.donation + self.investment + self.savings;
        if total != 100 {
            return Err(AllocationError::InvalidSplit {
                donation: self.donation,
                investment: self.investment,
                savings: self.savings,
            });
        }
        Ok(())
    }

    /// Returns the split as ratios in wallet order (donation, investment, savings)
    pub fn as_ratios(&self) -> [Decimal; 3] {
        [
            Decimal::from(self.donation),
            Decimal::from(self.investment),
            Decimal::from(self.savings),
        ]
    }
}

impl Default for SplitPercentages {
    fn default() -> Self {
        Self {
            donation: 40,
            investment: 40,
            savings: 20,
        }
    }
}
