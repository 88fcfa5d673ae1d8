//! Core Kernel - Foundational types and utilities for the round-up ledger
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers for accounts, payments, and ledger records
//! - Common error types

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{
    UserId, PaymentId, LedgerEntryId, TransactionId,
    CharityId, DonationId, InvestmentId, GoalId, ContributionId,
};
pub use error::CoreError;
