//! Repository implementations for domain entities
//!
//! This module provides concrete repository implementations that handle
//! database access for each aggregate. Repositories encapsulate SQL queries
//! and map between database rows and domain types.
//!
//! # Architecture
//!
//! Each repository follows these principles:
//! - Balance-changing operations run in a single transaction that locks
//!   the account row first (`SELECT ... FOR UPDATE`)
//! - Validation happens before any write; failures roll back untouched
//! - Ledger entries are append-only and written alongside the balance
//!   they explain

pub mod account;
pub mod wallet;
pub mod goal;
pub mod catalog;

pub use account::AccountRepository;
pub use wallet::WalletRepository;
pub use goal::GoalRepository;
pub use catalog::{CatalogRepository, CharityRef};
