//! Wallet domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::MoneyError;

use crate::wallet::WalletKind;

/// Errors that can occur in the wallet domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    /// A wallet cannot cover the requested debit
    #[error("Insufficient funds in {wallet} wallet: available {available}, requested {requested}")]
    InsufficientFunds {
        wallet: WalletKind,
        available: Decimal,
        requested: Decimal,
    },

    /// A persisted wallet name did not match any known wallet
    #[error("Unknown wallet: {0}")]
    UnknownWallet(String),

    /// A persisted entry type did not match any known type
    #[error("Unknown ledger entry type: {0}")]
    UnknownEntryType(String),

    /// A payment carried no recipient reference at all
    #[error("Payment requires a recipient UPI, phone, or name")]
    MissingRecipient,

    /// Underlying money arithmetic error
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
