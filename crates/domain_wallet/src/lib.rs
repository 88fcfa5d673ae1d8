//! Wallet Ledger Domain
//!
//! This crate defines the vocabulary of the wallet ledger: the three named
//! wallets every account carries, the append-only entry types recorded
//! against them, and the balance rules the transaction coordinator enforces.
//!
//! # Key Concepts
//!
//! - **Wallet**: one of three sub-balances (donation, investment, savings)
//! - **Ledger entry**: an append-only `earned`/`spent` record per wallet;
//!   the sum of earned minus spent entries must equal the wallet balance
//! - **Recipient**: where a payment goes - a UPI handle, phone, or name
//!
//! All mutation of wallet balances happens in `infra_db` inside a single
//! database transaction; this crate holds only the pure rules.

pub mod wallet;
pub mod entry;
pub mod payment;
pub mod error;

pub use wallet::{WalletKind, WalletBalances};
pub use entry::{EntryType, LedgerEntry};
pub use payment::{Recipient, PaymentStatus};
pub use error::WalletError;
