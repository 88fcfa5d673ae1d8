//! Wallet transaction coordinator
//!
//! This module applies allocations atomically against the ledger store:
//! payments, donations, investments, and split updates. Every
//! balance-changing operation on an account runs in one database
//! transaction that starts by locking the account row, so two concurrent
//! operations on the same account serialize instead of both reading the
//! pre-mutation balance.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;
use uuid::Uuid;

use core_kernel::{Money, PaymentId, TransactionId, UserId};
use domain_allocation::{allocate, SpareChangeBreakdown, SplitPercentages};
use domain_wallet::{EntryType, LedgerEntry, PaymentStatus, Recipient, WalletBalances, WalletKind};

use crate::error::{DatabaseError, LedgerError};
use crate::repositories::account::split_from_columns;
use crate::repositories::catalog::CharityRef;

/// Repository coordinating all wallet-mutating operations
#[derive(Debug, Clone)]
pub struct WalletRepository {
    pool: PgPool,
}

/// Result of a processed payment
#[derive(Debug, Clone)]
pub struct PaymentOutcome {
    pub payment_id: PaymentId,
    pub breakdown: SpareChangeBreakdown,
}

/// Account state read under the row lock
#[derive(Debug, Clone, sqlx::FromRow)]
struct LockedAccountRow {
    spendable_balance: Decimal,
    donation_wallet: Decimal,
    investment_wallet: Decimal,
    savings_wallet: Decimal,
    donation_percentage: i32,
    investment_percentage: i32,
    savings_percentage: i32,
}

impl LockedAccountRow {
    fn balances(&self, currency: core_kernel::Currency) -> WalletBalances {
        WalletBalances::new(
            Money::new(self.donation_wallet, currency),
            Money::new(self.investment_wallet, currency),
            Money::new(self.savings_wallet, currency),
        )
    }
}

/// Locks the account row for the rest of the transaction
///
/// Lock order across the codebase is always user row first, then any
/// dependent row (goal), which keeps concurrent operations deadlock-free.
async fn lock_account(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
) -> Result<LockedAccountRow, LedgerError> {
    sqlx::query_as::<_, LockedAccountRow>(
        r#"
        SELECT spendable_balance, donation_wallet, investment_wallet, savings_wallet,
               donation_percentage, investment_percentage, savings_percentage
        FROM users
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(user_id)
    .fetch_optional(&mut **tx)
    .await?
    .ok_or_else(|| DatabaseError::not_found("User", user_id).into())
}

/// Appends one ledger entry row
async fn insert_ledger_entry(
    tx: &mut Transaction<'_, Postgres>,
    entry: &LedgerEntry,
) -> Result<(), LedgerError> {
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
    .execute(&mut **tx)
    .await?;

    Ok(())
}

impl WalletRepository {
    /// Creates a new WalletRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Processes a payment with round-up spare-change allocation
    ///
    /// Atomically: records the payment, debits the spendable balance by the
    /// rounded amount, credits the three wallets, and appends one `earned`
    /// ledger entry per nonzero allocation part.
    ///
    /// # Errors
    ///
    /// - `LedgerError::Allocation` for a non-positive amount
    /// - `LedgerError::InsufficientBalance` when the amount exceeds the
    ///   spendable balance
    /// - `LedgerError::Database(NotFound)` for an unknown account
    pub async fn process_payment(
        &self,
        user_id: Uuid,
        recipient: &Recipient,
        amount: Money,
    ) -> Result<PaymentOutcome, LedgerError> {
        let mut tx = self.pool.begin().await?;

        let account = lock_account(&mut tx, user_id).await?;
        let split = split_from_columns(
            account.donation_percentage,
            account.investment_percentage,
            account.savings_percentage,
        )?;

        let breakdown = allocate(amount, &split)?;

        if breakdown.original.amount() > account.spendable_balance {
            return Err(LedgerError::InsufficientBalance {
                available: account.spendable_balance,
                requested: breakdown.original.amount(),
            });
        }

        let payment_id = PaymentId::new_v7();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO payments (
                id, user_id, recipient_upi, recipient_phone, recipient_name,
                original_amount, rounded_amount, spare_change,
                donation_amount, investment_amount, savings_amount,
                payment_status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(*payment_id.as_uuid())
        .bind(user_id)
        .bind(recipient.upi.as_deref())
        .bind(recipient.phone.as_deref())
        .bind(recipient.name.as_deref())
        .bind(breakdown.original.amount())
        .bind(breakdown.rounded.amount())
        .bind(breakdown.spare_change.amount())
        .bind(breakdown.donation.amount())
        .bind(breakdown.investment.amount())
        .bind(breakdown.savings.amount())
        .bind(PaymentStatus::Completed.as_str())
        .bind(now)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE users SET
                spendable_balance = spendable_balance - $1,
                donation_wallet = donation_wallet + $2,
                investment_wallet = investment_wallet + $3,
                savings_wallet = savings_wallet + $4,
                total_spare_change = total_spare_change + $5,
                updated_at = $6
            WHERE id = $7
            "#,
        )
        .bind(breakdown.rounded.amount())
        .bind(breakdown.donation.amount())
        .bind(breakdown.investment.amount())
        .bind(breakdown.savings.amount())
        .bind(breakdown.spare_change.amount())
        .bind(now)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        let description = format!("Spare change from payment to {}", recipient);
        let parts = [
            (WalletKind::Donation, breakdown.donation),
            (WalletKind::Investment, breakdown.investment),
            (WalletKind::Savings, breakdown.savings),
        ];
        for (wallet, part) in parts {
            if part.is_zero() {
                continue;
            }
            let entry = LedgerEntry::earned(
                UserId::from_uuid(user_id),
                payment_id,
                wallet,
                part,
                description.clone(),
            );
            insert_ledger_entry(&mut tx, &entry).await?;
        }

        tx.commit().await?;

        debug!(
            user = %user_id,
            payment = %payment_id,
            rounded = %breakdown.rounded.amount(),
            spare = %breakdown.spare_change.amount(),
            "payment processed"
        );

        Ok(PaymentOutcome {
            payment_id,
            breakdown,
        })
    }

    /// Records a donation funded from the donation wallet
    ///
    /// Atomically creates the donation row, debits the donation wallet, and
    /// appends a `spent` ledger entry.
    pub async fn record_donation(
        &self,
        user_id: Uuid,
        charity: &CharityRef,
        amount: Money,
    ) -> Result<Uuid, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount.amount()));
        }

        let mut tx = self.pool.begin().await?;

        let (charity_id, charity_name) = match charity {
            CharityRef::Id(id) => sqlx::query_as::<_, (Uuid, String)>(
                "SELECT id, name FROM charities WHERE id = $1",
            )
            .bind(*id.as_uuid())
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Charity", id))?,
            CharityRef::Name(name) => sqlx::query_as::<_, (Uuid, String)>(
                "SELECT id, name FROM charities WHERE name = $1",
            )
            .bind(name)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Charity", name))?,
        };

        let account = lock_account(&mut tx, user_id).await?;
        account
            .balances(amount.currency())
            .ensure_can_debit(WalletKind::Donation, amount)?;

        let donation_id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO donations (id, user_id, charity_id, charity_name, amount, donated_at, source)
            VALUES ($1, $2, $3, $4, $5, $6, 'donation_wallet')
            "#,
        )
        .bind(donation_id)
        .bind(user_id)
        .bind(charity_id)
        .bind(&charity_name)
        .bind(amount.amount())
        .bind(now)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE users SET donation_wallet = donation_wallet - $1, updated_at = $2 WHERE id = $3",
        )
        .bind(amount.amount())
        .bind(now)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        let entry = LedgerEntry::spent(
            UserId::from_uuid(user_id),
            WalletKind::Donation,
            amount,
            format!("Donation to {}", charity_name),
        );
        insert_ledger_entry(&mut tx, &entry).await?;

        tx.commit().await?;

        debug!(user = %user_id, donation = %donation_id, "donation recorded");
        Ok(donation_id)
    }

    /// Records an investment funded from the investment wallet
    ///
    /// Atomically creates the investment row with a generated transaction
    /// reference, debits the investment wallet, and appends a `spent`
    /// ledger entry.
    pub async fn record_investment(
        &self,
        user_id: Uuid,
        name: &str,
        kind: &str,
        amount: Money,
    ) -> Result<Uuid, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount.amount()));
        }

        let mut tx = self.pool.begin().await?;

        let account = lock_account(&mut tx, user_id).await?;
        account
            .balances(amount.currency())
            .ensure_can_debit(WalletKind::Investment, amount)?;

        let investment_id = Uuid::new_v4();
        let transaction_id = TransactionId::new();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO investments (
                id, user_id, transaction_id, investment_type, investment_name,
                amount, invested_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(investment_id)
        .bind(user_id)
        .bind(*transaction_id.as_uuid())
        .bind(kind)
        .bind(name)
        .bind(amount.amount())
        .bind(now)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE users SET investment_wallet = investment_wallet - $1, updated_at = $2 WHERE id = $3",
        )
        .bind(amount.amount())
        .bind(now)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        let entry = LedgerEntry::spent(
            UserId::from_uuid(user_id),
            WalletKind::Investment,
            amount,
            format!("Investment in {}", name),
        );
        insert_ledger_entry(&mut tx, &entry).await?;

        tx.commit().await?;

        debug!(user = %user_id, investment = %investment_id, "investment recorded");
        Ok(investment_id)
    }

    /// Overwrites the account's allocation split
    ///
    /// The split is validated by construction; it applies only to payments
    /// initiated after the update, never retroactively.
    pub async fn update_split(
        &self,
        user_id: Uuid,
        split: SplitPercentages,
    ) -> Result<(), LedgerError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                donation_percentage = $1,
                investment_percentage = $2,
                savings_percentage = $3,
                updated_at = $4
            WHERE id = $5
            "#,
        )
        .bind(split.donation as i32)
        .bind(split.investment as i32)
        .bind(split.savings as i32)
        .bind(Utc::now())
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("User", user_id).into());
        }
        Ok(())
    }

    /// Lists the account's payments, newest first
    pub async fn payment_history(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<PaymentRow>, LedgerError> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            r#"
            SELECT id, user_id, recipient_upi, recipient_phone, recipient_name,
                   original_amount, rounded_amount, spare_change,
                   donation_amount, investment_amount, savings_amount,
                   payment_status, created_at
            FROM payments
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Lists ledger entries for one wallet or all of them, newest first
    pub async fn ledger_entries(
        &self,
        user_id: Uuid,
        wallet: Option<WalletKind>,
        limit: i64,
    ) -> Result<Vec<LedgerEntryRow>, LedgerError> {
        let rows = sqlx::query_as::<_, LedgerEntryRow>(
            r#"
            SELECT id, user_id, payment_id, transaction_type, wallet_type,
                   amount, description, created_at
            FROM wallet_transactions
            WHERE user_id = $1 AND ($2::text IS NULL OR wallet_type = $2)
            ORDER BY created_at DESC
            LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(wallet.map(|w| w.as_str()))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Reconciles a wallet from its ledger entries: sum of `earned` minus
    /// sum of `spent`
    ///
    /// Must equal the wallet's balance column after any sequence of
    /// operations.
    pub async fn wallet_ledger_total(
        &self,
        user_id: Uuid,
        wallet: WalletKind,
    ) -> Result<Decimal, LedgerError> {
        let total = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(
                CASE transaction_type
                    WHEN $3 THEN amount
                    WHEN $4 THEN -amount
                    ELSE 0
                END
            ), 0)
            FROM wallet_transactions
            WHERE user_id = $1 AND wallet_type = $2
            "#,
        )
        .bind(user_id)
        .bind(wallet.as_str())
        .bind(EntryType::Earned.as_str())
        .bind(EntryType::Spent.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// Lists the account's donations, newest first
    pub async fn list_donations(&self, user_id: Uuid) -> Result<Vec<DonationRow>, LedgerError> {
        let rows = sqlx::query_as::<_, DonationRow>(
            r#"
            SELECT d.id, d.user_id, d.charity_id, d.charity_name, d.amount,
                   d.donated_at, d.source, c.impact
            FROM donations d
            LEFT JOIN charities c ON d.charity_id = c.id
            WHERE d.user_id = $1
            ORDER BY d.donated_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Total donated overall and since the start of the current month
    pub async fn donation_totals(&self, user_id: Uuid) -> Result<(Decimal, Decimal), LedgerError> {
        let row = sqlx::query_as::<_, (Decimal, Decimal)>(
            r#"
            SELECT
                COALESCE(SUM(amount), 0),
                COALESCE(SUM(amount) FILTER (
                    WHERE donated_at >= date_trunc('month', CURRENT_TIMESTAMP)
                ), 0)
            FROM donations
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Lists the account's investments, newest first
    pub async fn list_investments(&self, user_id: Uuid) -> Result<Vec<InvestmentRow>, LedgerError> {
        let rows = sqlx::query_as::<_, InvestmentRow>(
            r#"
            SELECT id, user_id, transaction_id, investment_type, investment_name,
                   amount, invested_at
            FROM investments
            WHERE user_id = $1
            ORDER BY invested_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Total amount the account has invested
    pub async fn total_invested(&self, user_id: Uuid) -> Result<Decimal, LedgerError> {
        let total = sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(amount), 0) FROM investments WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}

/// Database row for a payment record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PaymentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipient_upi: Option<String>,
    pub recipient_phone: Option<String>,
    pub recipient_name: Option<String>,
    pub original_amount: Decimal,
    pub rounded_amount: Decimal,
    pub spare_change: Decimal,
    pub donation_amount: Decimal,
    pub investment_amount: Decimal,
    pub savings_amount: Decimal,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
}

/// Database row for a ledger entry
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LedgerEntryRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub payment_id: Option<Uuid>,
    pub transaction_type: String,
    pub wallet_type: String,
    pub amount: Decimal,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Database row for a donation
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DonationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub charity_id: Uuid,
    pub charity_name: String,
    pub amount: Decimal,
    pub donated_at: DateTime<Utc>,
    pub source: String,
    pub impact: Option<String>,
}

/// Database row for an investment
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InvestmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub transaction_id: Uuid,
    pub investment_type: String,
    pub investment_name: String,
    pub amount: Decimal,
    pub invested_at: DateTime<Utc>,
}
