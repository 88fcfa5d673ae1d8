//! Account repository implementation
//!
//! This module provides database access for account records: signup,
//! credential lookup for login, and the wallet snapshot read.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use domain_allocation::SplitPercentages;

use crate::error::{DatabaseError, LedgerError};

/// Repository for account identity and balance snapshots
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

/// Data for creating a new account at signup
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub full_name: String,
    pub email: String,
    /// Already hashed; plaintext never reaches this layer
    pub password_hash: String,
    pub upi_id: String,
    pub opening_balance: Decimal,
}

impl AccountRepository {
    /// Creates a new AccountRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates an account with zeroed wallets and the default 40/40/20 split
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::DuplicateEntry` (via the unique constraints
    /// on email and UPI id) when either is already registered.
    pub async fn create_account(&self, account: NewAccount) -> Result<AccountRow, LedgerError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let split = SplitPercentages::default();

        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO users (
                id, full_name, email, password_hash, upi_id, spendable_balance,
                donation_wallet, investment_wallet, savings_wallet, total_spare_change,
                donation_percentage, investment_percentage, savings_percentage,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, 0, 0, 0, 0, $7, $8, $9, $10, $10)
            RETURNING id, full_name, email, upi_id, created_at
            "#,
        )
        .bind(id)
        .bind(&account.full_name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.upi_id)
        .bind(account.opening_balance)
        .bind(split.donation as i32)
        .bind(split.investment as i32)
        .bind(split.savings as i32)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Looks up login credentials by email
    ///
    /// Returns `None` for an unknown email so the caller can answer with
    /// the same message as a bad password.
    pub async fn find_auth_by_email(&self, email: &str) -> Result<Option<AuthRow>, LedgerError> {
        let row = sqlx::query_as::<_, AuthRow>(
            r#"
            SELECT id, full_name, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Reads the account's balances, split percentages, and running
    /// spare-change total
    pub async fn wallet_snapshot(&self, user_id: Uuid) -> Result<WalletSnapshotRow, LedgerError> {
        let row = sqlx::query_as::<_, WalletSnapshotRow>(
            r#"
            SELECT spendable_balance, donation_wallet, investment_wallet, savings_wallet,
                   total_spare_change, donation_percentage, investment_percentage,
                   savings_percentage
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("User", user_id))?;

        Ok(row)
    }
}

/// Database row for a created account
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccountRow {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub upi_id: String,
    pub created_at: DateTime<Utc>,
}

/// Database row for credential verification
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AuthRow {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Database row for the wallet snapshot
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WalletSnapshotRow {
    pub spendable_balance: Decimal,
    pub donation_wallet: Decimal,
    pub investment_wallet: Decimal,
    pub savings_wallet: Decimal,
    pub total_spare_change: Decimal,
    pub donation_percentage: i32,
    pub investment_percentage: i32,
    pub savings_percentage: i32,
}

/// Converts persisted percentage columns into a validated split
///
/// The schema constrains the columns to sum to 100, so a failure here means
/// the row was tampered with outside the application.
pub(crate) fn split_from_columns(
    donation: i32,
    investment: i32,
    savings: i32,
) -> Result<SplitPercentages, LedgerError> {
    let to_u32 = |value: i32, column: &str| -> Result<u32, LedgerError> {
        u32::try_from(value).map_err(|_| {
            LedgerError::Database(DatabaseError::ConstraintViolation(format!(
                "Negative percentage in column {}: {}",
                column, value
            )))
        })
    };

    let split = SplitPercentages::new(
        to_u32(donation, "donation_percentage")?,
        to_u32(investment, "investment_percentage")?,
        to_u32(savings, "savings_percentage")?,
    )?;
    Ok(split)
}
