//! Savings goal repository implementation
//!
//! Goal contributions draw funds from the savings wallet, so a contribution
//! is a balance-changing operation and follows the same discipline as the
//! wallet coordinator: one transaction, account row locked first, goal row
//! second.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;
use uuid::Uuid;

use core_kernel::{GoalId, Money, UserId};
use domain_goals::{ContributionOutcome, ContributionRecord, GoalStatus, SavingsGoal};
use domain_wallet::{LedgerEntry, WalletBalances, WalletKind};

use crate::error::{DatabaseError, LedgerError};

/// Repository for savings goals and their contribution history
#[derive(Debug, Clone)]
pub struct GoalRepository {
    pool: PgPool,
}

/// Goal row as stored, locked during contributions
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GoalRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub status: String,
    pub achieved_amount: Option<Decimal>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl GoalRow {
    /// Rehydrates the domain goal from its persisted row
    pub fn into_domain(self, currency: core_kernel::Currency) -> Result<SavingsGoal, LedgerError> {
        let status: GoalStatus = self.status.parse().map_err(LedgerError::Goal)?;
        Ok(SavingsGoal {
            id: GoalId::from_uuid(self.id),
            user_id: UserId::from_uuid(self.user_id),
            title: self.title,
            description: self.description,
            target_amount: Money::new(self.target_amount, currency),
            current_amount: Money::new(self.current_amount, currency),
            target_date: self.target_date,
            category: self.category,
            priority: self.priority,
            status,
            achieved_amount: self.achieved_amount.map(|a| Money::new(a, currency)),
            completed_at: self.completed_at,
            created_at: self.created_at,
        })
    }
}

/// Database row for a contribution history record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct GoalHistoryRow {
    pub id: Uuid,
    pub goal_id: Uuid,
    pub goal_title: String,
    pub amount: Decimal,
    pub source: String,
    pub transaction_type: String,
    pub recorded_at: DateTime<Utc>,
}

impl GoalRepository {
    /// Creates a new GoalRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persists a freshly created goal
    pub async fn create_goal(&self, goal: &SavingsGoal) -> Result<GoalId, LedgerError> {
        sqlx::query(
            r#"
            INSERT INTO savings_goals (
                id, user_id, title, description, target_amount, current_amount,
                target_date, category, priority, status, achieved_amount,
                completed_at, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(*goal.id.as_uuid())
        .bind(*goal.user_id.as_uuid())
        .bind(&goal.title)
        .bind(goal.description.as_deref())
        .bind(goal.target_amount.amount())
        .bind(goal.current_amount.amount())
        .bind(goal.target_date)
        .bind(goal.category.as_deref())
        .bind(goal.priority.as_deref())
        .bind(goal.status.as_str())
        .bind(goal.achieved_amount.map(|a| a.amount()))
        .bind(goal.completed_at)
        .bind(goal.created_at)
        .execute(&self.pool)
        .await?;

        debug!(user = %goal.user_id, goal = %goal.id, "goal created");
        Ok(goal.id)
    }

    /// Deletes a goal and its history
    ///
    /// The goal must belong to the caller; otherwise nothing is touched and
    /// `NotFound` is returned. History rows go first, then the goal, all in
    /// one transaction.
    pub async fn delete_goal(&self, user_id: Uuid, goal_id: Uuid) -> Result<(), LedgerError> {
        let mut tx = self.pool.begin().await?;

        let owned = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM savings_goals WHERE id = $1 AND user_id = $2 FOR UPDATE",
        )
        .bind(goal_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        if owned.is_none() {
            return Err(DatabaseError::not_found("Goal", goal_id).into());
        }

        sqlx::query("DELETE FROM savings_goal_history WHERE goal_id = $1")
            .bind(goal_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM savings_goals WHERE id = $1")
            .bind(goal_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(user = %user_id, goal = %goal_id, "goal deleted");
        Ok(())
    }

    /// Contributes to a goal from the savings wallet
    ///
    /// Atomically: debits the savings wallet, appends a `spent` ledger
    /// entry, raises the goal's accumulated amount, appends a history row,
    /// and - when the target is reached - completes the goal in the same
    /// transaction. A goal is therefore never observable at target while
    /// still in progress.
    ///
    /// # Errors
    ///
    /// - `LedgerError::Goal(AlreadyCompleted)` for a terminal goal
    /// - `LedgerError::Wallet(InsufficientFunds)` when the savings wallet
    ///   cannot cover the amount
    /// - `LedgerError::Database(NotFound)` on a goal/owner mismatch
    pub async fn contribute(
        &self,
        user_id: Uuid,
        goal_id: Uuid,
        amount: Money,
        source: Option<String>,
    ) -> Result<ContributionOutcome, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount.amount()));
        }

        let mut tx = self.pool.begin().await?;

        // Lock order: user row before goal row, matching the wallet
        // coordinator, so concurrent contributions and payments cannot
        // deadlock.
        let balances = lock_savings_balance(&mut tx, user_id, amount.currency()).await?;

        let row = sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT id, user_id, title, description, target_amount, current_amount,
                   target_date, category, priority, status, achieved_amount,
                   completed_at, created_at
            FROM savings_goals
            WHERE id = $1 AND user_id = $2
            FOR UPDATE
            "#,
        )
        .bind(goal_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Goal", goal_id))?;

        let mut goal = row.into_domain(amount.currency())?;

        // Completed goals are terminal; report that before the funds check
        if goal.is_completed() {
            return Err(domain_goals::GoalError::AlreadyCompleted(goal.id).into());
        }

        balances.ensure_can_debit(WalletKind::Savings, amount)?;
        let outcome = goal.apply_contribution(amount)?;

        let now = Utc::now();

        sqlx::query(
            "UPDATE users SET savings_wallet = savings_wallet - $1, updated_at = $2 WHERE id = $3",
        )
        .bind(amount.amount())
        .bind(now)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        let entry = LedgerEntry::spent(
            UserId::from_uuid(user_id),
            WalletKind::Savings,
            amount,
            format!("Contribution to goal '{}'", goal.title),
        );
        sqlx::query(
            r#"
            INSERT INTO wallet_transactions (
                id, user_id, payment_id, transaction_type, wallet_type,
                amount, description, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(*entry.id.as_uuid())
        .bind(*entry.user_id.as_uuid())
        .bind(entry.payment_id.map(|p| *p.as_uuid()))
        .bind(entry.entry_type.as_str())
        .bind(entry.wallet.as_str())
        .bind(entry.amount.amount())
        .bind(&entry.description)
        .bind(entry.created_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE savings_goals SET
                current_amount = $1,
                status = $2,
                achieved_amount = $3,
                completed_at = $4
            WHERE id = $5
            "#,
        )
        .bind(goal.current_amount.amount())
        .bind(goal.status.as_str())
        .bind(goal.achieved_amount.map(|a| a.amount()))
        .bind(goal.completed_at)
        .bind(goal_id)
        .execute(&mut *tx)
        .await?;

        let record = ContributionRecord::manual(GoalId::from_uuid(goal_id), amount, source);
        insert_history_row(&mut tx, &record).await?;

        tx.commit().await?;

        debug!(
            user = %user_id,
            goal = %goal_id,
            amount = %amount.amount(),
            completed = outcome.completed,
            "goal contribution recorded"
        );
        Ok(outcome)
    }

    /// Lists all goals for an account, newest first
    pub async fn list_goals(&self, user_id: Uuid) -> Result<Vec<GoalRow>, LedgerError> {
        let rows = sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT id, user_id, title, description, target_amount, current_amount,
                   target_date, category, priority, status, achieved_amount,
                   completed_at, created_at
            FROM savings_goals
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Lists completed goals, most recently completed first
    pub async fn list_achieved(&self, user_id: Uuid) -> Result<Vec<GoalRow>, LedgerError> {
        let rows = sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT id, user_id, title, description, target_amount, current_amount,
                   target_date, category, priority, status, achieved_amount,
                   completed_at, created_at
            FROM savings_goals
            WHERE user_id = $1 AND status = $2
            ORDER BY completed_at DESC
            "#,
        )
        .bind(user_id)
        .bind(GoalStatus::Completed.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Recent contribution history across all of the account's goals
    pub async fn contribution_history(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<GoalHistoryRow>, LedgerError> {
        let rows = sqlx::query_as::<_, GoalHistoryRow>(
            r#"
            SELECT sgh.id, sgh.goal_id, sg.title AS goal_title, sgh.amount,
                   sgh.source, sgh.transaction_type, sgh.recorded_at
            FROM savings_goal_history sgh
            JOIN savings_goals sg ON sgh.goal_id = sg.id
            WHERE sg.user_id = $1
            ORDER BY sgh.recorded_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Total contributed since the start of the current month
    pub async fn this_month_total(&self, user_id: Uuid) -> Result<Decimal, LedgerError> {
        let total = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(sgh.amount), 0)
            FROM savings_goal_history sgh
            JOIN savings_goals sg ON sgh.goal_id = sg.id
            WHERE sg.user_id = $1
              AND sgh.recorded_at >= date_trunc('month', CURRENT_TIMESTAMP)
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// Average contributed per calendar month with any activity
    pub async fn avg_monthly_total(&self, user_id: Uuid) -> Result<Decimal, LedgerError> {
        let avg = sqlx::query_scalar::<_, Option<Decimal>>(
            r#"
            SELECT AVG(monthly_total) FROM (
                SELECT date_trunc('month', sgh.recorded_at) AS month,
                       SUM(sgh.amount) AS monthly_total
                FROM savings_goal_history sgh
                JOIN savings_goals sg ON sgh.goal_id = sg.id
                WHERE sg.user_id = $1
                GROUP BY date_trunc('month', sgh.recorded_at)
            ) monthly
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(avg.unwrap_or(Decimal::ZERO))
    }
}

/// Locks the account row and returns its wallet balances
async fn lock_savings_balance(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    currency: core_kernel::Currency,
) -> Result<WalletBalances, LedgerError> {
    let row = sqlx::query_as::<_, (Decimal, Decimal, Decimal)>(
        r#"
        SELECT donation_wallet, investment_wallet, savings_wallet
        FROM users
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(user_id)
    .fetch_optional(&mut **tx)
    .await?
    .ok_or_else(|| DatabaseError::not_found("User", user_id))?;

    Ok(WalletBalances::new(
        Money::new(row.0, currency),
        Money::new(row.1, currency),
        Money::new(row.2, currency),
    ))
}

/// Appends a contribution history row
async fn insert_history_row(
    tx: &mut Transaction<'_, Postgres>,
    record: &ContributionRecord,
) -> Result<(), LedgerError> {
    sqlx::query(
        r#"
        INSERT INTO savings_goal_history (
            id, goal_id, amount, source, transaction_type, recorded_at
        ) VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(*record.id.as_uuid())
    .bind(*record.goal_id.as_uuid())
    .bind(record.amount.amount())
    .bind(&record.source)
    .bind(&record.transaction_type)
    .bind(record.recorded_at)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
