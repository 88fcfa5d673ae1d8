//! Goal contribution records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ContributionId, GoalId, Money};

/// Result of applying a contribution to a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionOutcome {
    pub goal_id: GoalId,
    /// Accumulated amount after the contribution
    pub new_amount: Money,
    /// True when this contribution completed the goal
    pub completed: bool,
}

/// An append-only history row for a goal contribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionRecord {
    pub id: ContributionId,
    pub goal_id: GoalId,
    pub amount: Money,
    /// Where the funds came from, e.g. "Manual Transfer"
    pub source: String,
    /// Kind of movement, e.g. "manual_save"
    pub transaction_type: String,
    pub recorded_at: DateTime<Utc>,
}

impl ContributionRecord {
    /// Default source label for a user-initiated transfer
    pub const MANUAL_SOURCE: &'static str = "Manual Transfer";

    /// Transaction type recorded for a user-initiated transfer
    pub const MANUAL_SAVE: &'static str = "manual_save";

    /// Creates a manual-save history row
    pub fn manual(goal_id: GoalId, amount: Money, source: Option<String>) -> Self {
        Self {
            id: ContributionId::new_v7(),
            goal_id,
            amount,
            source: source.unwrap_or_else(|| Self::MANUAL_SOURCE.to_string()),
            transaction_type: Self::MANUAL_SAVE.to_string(),
            recorded_at: Utc::now(),
        }
    }
}
