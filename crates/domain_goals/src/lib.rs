//! Savings Goal Domain
//!
//! A savings goal is a named target funded from the savings wallet. Its
//! lifecycle is a single transition: **InProgress → Completed**, taken the
//! moment an accepted contribution brings the accumulated amount to or past
//! the target. Completed is terminal; a completed goal cannot be reopened
//! or topped up further, only deleted.
//!
//! The rules here are pure. Debiting the savings wallet and persisting the
//! contribution history happen together in one database transaction inside
//! `infra_db`, so a goal is never observable at target while still in
//! progress.

pub mod goal;
pub mod contribution;
pub mod error;

pub use goal::{SavingsGoal, GoalStatus};
pub use contribution::{ContributionOutcome, ContributionRecord};
pub use error::GoalError;
