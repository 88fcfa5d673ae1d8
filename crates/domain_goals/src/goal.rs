//! Savings goal lifecycle

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{GoalId, Money, UserId};

use crate::contribution::ContributionOutcome;
use crate::error::GoalError;

/// Lifecycle state of a savings goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Accepting contributions
    InProgress,
    /// Target reached; terminal
    Completed,
}

impl GoalStatus {
    /// Returns the snake_case name used in persisted rows
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::InProgress => "in_progress",
            GoalStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GoalStatus {
    type Err = GoalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(GoalStatus::InProgress),
            "completed" => Ok(GoalStatus::Completed),
            other => Err(GoalError::UnknownStatus(other.to_string())),
        }
    }
}

/// A savings target funded from the savings wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: GoalId,
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub target_amount: Money,
    pub current_amount: Money,
    pub target_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub status: GoalStatus,
    /// Frozen at the moment of completion
    pub achieved_amount: Option<Money>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl SavingsGoal {
    /// Creates a new goal in `InProgress` with nothing accumulated
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::MissingTitle`] for a blank title and
    /// [`GoalError::NonPositiveTarget`] for a target of zero or less.
    pub fn new(
        user_id: UserId,
        title: impl Into<String>,
        target_amount: Money,
    ) -> Result<Self, GoalError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(GoalError::MissingTitle);
        }
        if !target_amount.is_positive() {
            return Err(GoalError::NonPositiveTarget(target_amount.amount()));
        }

        Ok(Self {
            id: GoalId::new_v7(),
            user_id,
            title,
            description: None,
            target_amount: target_amount.round_to_currency(),
            current_amount: Money::zero(target_amount.currency()),
            target_date: None,
            category: None,
            priority: None,
            status: GoalStatus::InProgress,
            achieved_amount: None,
            completed_at: None,
            created_at: Utc::now(),
        })
    }

    /// Sets the free-text description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the target date
    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    /// Sets the category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the priority label
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Returns true once the goal has reached its target
    pub fn is_completed(&self) -> bool {
        self.status == GoalStatus::Completed
    }

    /// Progress toward the target as a fraction in [0, 1]
    pub fn progress(&self) -> rust_decimal::Decimal {
        if self.target_amount.is_zero() {
            return rust_decimal::Decimal::ONE;
        }
        let ratio = self.current_amount.amount() / self.target_amount.amount();
        ratio.min(rust_decimal::Decimal::ONE)
    }

    /// Applies an accepted contribution to the goal
    ///
    /// Raises the accumulated amount and, when the target is reached or
    /// exceeded, transitions to `Completed` in the same step - freezing
    /// `achieved_amount` and `completed_at`. Contributions against a goal
    /// that is already completed are rejected outright.
    ///
    /// # Errors
    ///
    /// - [`GoalError::AlreadyCompleted`] when the goal is terminal
    /// - [`GoalError::NonPositiveContribution`] for amounts of zero or less
    pub fn apply_contribution(&mut self, amount: Money) -> Result<ContributionOutcome, GoalError> {
        if self.is_completed() {
            return Err(GoalError::AlreadyCompleted(self.id));
        }
        if !amount.is_positive() {
            return Err(GoalError::NonPositiveContribution(amount.amount()));
        }

        self.current_amount = self.current_amount.checked_add(&amount)?;

        let completed = self.current_amount.amount() >= self.target_amount.amount();
        if completed {
            self.status = GoalStatus::Completed;
            self.achieved_amount = Some(self.current_amount);
            self.completed_at = Some(Utc::now());
        }

        Ok(ContributionOutcome {
            goal_id: self.id,
            new_amount: self.current_amount,
            completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn inr(amount: rust_decimal::Decimal) -> Money {
        Money::new(amount, Currency::INR)
    }

    fn goal(target: rust_decimal::Decimal) -> SavingsGoal {
        SavingsGoal::new(UserId::new(), "Emergency fund", inr(target)).unwrap()
    }

    #[test]
    fn test_new_goal_starts_in_progress_at_zero() {
        let g = goal(dec!(5000));
        assert_eq!(g.status, GoalStatus::InProgress);
        assert!(g.current_amount.is_zero());
        assert!(g.achieved_amount.is_none());
        assert!(g.completed_at.is_none());
    }

    #[test]
    fn test_blank_title_rejected() {
        let result = SavingsGoal::new(UserId::new(), "   ", inr(dec!(5000)));
        assert!(matches!(result, Err(GoalError::MissingTitle)));
    }

    #[test]
    fn test_non_positive_target_rejected() {
        assert!(matches!(
            SavingsGoal::new(UserId::new(), "Trip", inr(dec!(0))),
            Err(GoalError::NonPositiveTarget(_))
        ));
        assert!(matches!(
            SavingsGoal::new(UserId::new(), "Trip", inr(dec!(-100))),
            Err(GoalError::NonPositiveTarget(_))
        ));
    }

    #[test]
    fn test_contribution_below_target_stays_in_progress() {
        let mut g = goal(dec!(5000));
        let outcome = g.apply_contribution(inr(dec!(1000))).unwrap();

        assert!(!outcome.completed);
        assert_eq!(g.status, GoalStatus::InProgress);
        assert_eq!(g.current_amount.amount(), dec!(1000.00));
    }

    #[test]
    fn test_contribution_reaching_target_completes() {
        let mut g = goal(dec!(5000));
        g.apply_contribution(inr(dec!(4000))).unwrap();
        let outcome = g.apply_contribution(inr(dec!(1000))).unwrap();

        assert!(outcome.completed);
        assert_eq!(g.status, GoalStatus::Completed);
        assert_eq!(g.achieved_amount.unwrap().amount(), dec!(5000.00));
        assert!(g.completed_at.is_some());
    }

    #[test]
    fn test_overshooting_target_freezes_actual_amount() {
        let mut g = goal(dec!(5000));
        let outcome = g.apply_contribution(inr(dec!(5200))).unwrap();

        assert!(outcome.completed);
        assert_eq!(g.achieved_amount.unwrap().amount(), dec!(5200.00));
    }

    #[test]
    fn test_contribution_to_completed_goal_rejected() {
        let mut g = goal(dec!(100));
        g.apply_contribution(inr(dec!(100))).unwrap();

        let result = g.apply_contribution(inr(dec!(1)));
        assert!(matches!(result, Err(GoalError::AlreadyCompleted(_))));
        // Nothing moved
        assert_eq!(g.current_amount.amount(), dec!(100.00));
    }

    #[test]
    fn test_non_positive_contribution_rejected() {
        let mut g = goal(dec!(100));
        assert!(matches!(
            g.apply_contribution(inr(dec!(0))),
            Err(GoalError::NonPositiveContribution(_))
        ));
    }

    #[test]
    fn test_progress_fraction() {
        let mut g = goal(dec!(1000));
        g.apply_contribution(inr(dec!(250))).unwrap();
        assert_eq!(g.progress(), dec!(0.25));
    }

    #[test]
    fn test_progress_caps_at_one() {
        let mut g = goal(dec!(100));
        g.apply_contribution(inr(dec!(150))).unwrap();
        assert_eq!(g.progress(), rust_decimal::Decimal::ONE);
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [GoalStatus::InProgress, GoalStatus::Completed] {
            let parsed: GoalStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }
}
