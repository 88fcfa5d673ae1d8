//! Wallet kinds and balance snapshots

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::Money;

use crate::error::WalletError;

/// The three named wallets held per account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    /// Funds earmarked for charity donations
    Donation,
    /// Funds earmarked for investments
    Investment,
    /// Funds earmarked for savings goals
    Savings,
}

impl WalletKind {
    /// All wallets in allocation order
    pub const ALL: [WalletKind; 3] = [
        WalletKind::Donation,
        WalletKind::Investment,
        WalletKind::Savings,
    ];

    /// Returns the snake_case name used in persisted rows
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletKind::Donation => "donation",
            WalletKind::Investment => "investment",
            WalletKind::Savings => "savings",
        }
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WalletKind {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "donation" => Ok(WalletKind::Donation),
            "investment" => Ok(WalletKind::Investment),
            "savings" => Ok(WalletKind::Savings),
            other => Err(WalletError::UnknownWallet(other.to_string())),
        }
    }
}

/// A point-in-time view of an account's three wallet balances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletBalances {
    pub donation: Money,
    pub investment: Money,
    pub savings: Money,
}

impl WalletBalances {
    /// Creates a snapshot from the three balances
    pub fn new(donation: Money, investment: Money, savings: Money) -> Self {
        Self {
            donation,
            investment,
            savings,
        }
    }

    /// Returns the balance of a single wallet
    pub fn balance(&self, wallet: WalletKind) -> Money {
        match wallet {
            WalletKind::Donation => self.donation,
            WalletKind::Investment => self.investment,
            WalletKind::Savings => self.savings,
        }
    }

    /// Returns the sum across all three wallets
    pub fn total(&self) -> Result<Money, WalletError> {
        let total = self
            .donation
            .checked_add(&self.investment)?
            .checked_add(&self.savings)?;
        Ok(total)
    }

    /// Checks that a wallet can cover a debit of `amount`
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::InsufficientFunds`] when the wallet balance
    /// is lower than the requested amount.
    pub fn ensure_can_debit(&self, wallet: WalletKind, amount: Money) -> Result<(), WalletError> {
        let available = self.balance(wallet);
        if available.amount() < amount.amount() {
            return Err(WalletError::InsufficientFunds {
                wallet,
                available: available.amount(),
                requested: amount.amount(),
            });
        }
        Ok(())
    }
}
