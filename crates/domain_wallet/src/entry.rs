//! Append-only ledger entries
//!
//! Every wallet mutation leaves an entry behind. Entries are never updated
//! or deleted; balances must always be reconstructible from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{LedgerEntryId, Money, PaymentId, UserId};

use crate::error::WalletError;
use crate::wallet::WalletKind;

/// Direction of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Spare change credited into a wallet
    Earned,
    /// Funds leaving a wallet (donation, investment, goal contribution)
    Spent,
    /// Funds moved between wallets
    Transferred,
}

impl EntryType {
    /// Returns the snake_case name used in persisted rows
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Earned => "earned",
            EntryType::Spent => "spent",
            EntryType::Transferred => "transferred",
        }
    }

    /// Sign applied when reconciling a wallet balance from its entries
    pub fn sign(&self) -> i32 {
        match self {
            EntryType::Earned => 1,
            EntryType::Spent => -1,
            EntryType::Transferred => 0,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "earned" => Ok(EntryType::Earned),
            "spent" => Ok(EntryType::Spent),
            "transferred" => Ok(EntryType::Transferred),
            other => Err(WalletError::UnknownEntryType(other.to_string())),
        }
    }
}

/// A single append-only record against a wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique entry identifier
    pub id: LedgerEntryId,
    /// Owning account
    pub user_id: UserId,
    /// Originating payment, if the entry came from a round-up
    pub payment_id: Option<PaymentId>,
    /// Direction of the entry
    pub entry_type: EntryType,
    /// Wallet affected
    pub wallet: WalletKind,
    /// Entry amount (always non-negative; direction is in `entry_type`)
    pub amount: Money,
    /// Human-readable description
    pub description: String,
    /// When the entry was recorded
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Creates an `earned` entry crediting spare change into a wallet
    pub fn earned(
        user_id: UserId,
        payment_id: PaymentId,
        wallet: WalletKind,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: LedgerEntryId::new_v7(),
            user_id,
            payment_id: Some(payment_id),
            entry_type: EntryType::Earned,
            wallet,
            amount,
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    /// Creates a `spent` entry for funds leaving a wallet
    pub fn spent(
        user_id: UserId,
        wallet: WalletKind,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: LedgerEntryId::new_v7(),
            user_id,
            payment_id: None,
            entry_type: EntryType::Spent,
            wallet,
            amount,
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    /// Signed amount for reconciliation (earned positive, spent negative)
    pub fn signed_amount(&self) -> Money {
        match self.entry_type {
            EntryType::Earned => self.amount,
            EntryType::Spent => -self.amount,
            EntryType::Transferred => self.amount.multiply(rust_decimal::Decimal::ZERO),
        }
    }
}
