//! Spare-Change Allocation Domain
//!
//! This crate implements the round-up arithmetic at the heart of the
//! spare-change model: a payment is rounded up to the next multiple of 100
//! currency units and the difference is split across the three wallets
//! according to user-configured percentages.
//!
//! # Key Concepts
//!
//! - **Round-up step**: payments round up to the next ₹100 boundary
//! - **Spare change**: the difference between the rounded and original amount
//! - **Split**: three integer percentages (donation/investment/savings)
//!   that must sum to exactly 100
//!
//! The engine is a pure function: no I/O, no clock, no store. Balance
//! checks against the account happen in the transaction coordinator, which
//! holds the current state.

pub mod engine;
pub mod split;
pub mod error;

pub use engine::{allocate, SpareChangeBreakdown, ROUND_UP_STEP_UNITS};
pub use split::SplitPercentages;
pub use error::AllocationError;
