//! Integration tests for the ledger repositories
//!
//! These run against a disposable PostgreSQL container and are ignored by
//! default. With Docker available:
//!
//! ```bash
//! cargo test -p infra_db -- --ignored
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{CharityId, Currency, Money, UserId};
use domain_allocation::SplitPercentages;
use domain_goals::GoalError;
use domain_wallet::{Recipient, WalletError, WalletKind};
use infra_db::{
    AccountRepository, CharityRef, GoalRepository, LedgerError, WalletRepository,
};
use infra_db::repositories::account::NewAccount;
use test_utils::builders::TestGoalBuilder;
use test_utils::database::create_isolated_test_database;

fn inr(amount: Decimal) -> Money {
    Money::new(amount, Currency::INR)
}

fn upi_recipient() -> Recipient {
    Recipient::new(Some("merchant@upi".to_string()), None, None).unwrap()
}

/// First charity seeded by the initial schema
fn seeded_charity() -> CharityRef {
    CharityRef::Id(CharityId::from_uuid(
        Uuid::parse_str("9a91726a-93f9-4b6d-a60d-5872a15c898c").unwrap(),
    ))
}

async fn seed_account(pool: &PgPool, opening_balance: Decimal) -> Uuid {
    let accounts = AccountRepository::new(pool.clone());
    let row = accounts
        .create_account(NewAccount {
            full_name: "Asha Rao".to_string(),
            email: format!("asha+{}@example.com", Uuid::new_v4()),
            password_hash: "not-a-real-hash".to_string(),
            upi_id: format!("asha-{}@upi", Uuid::new_v4()),
            opening_balance,
        })
        .await
        .expect("account created");
    row.id
}

/// Test seeding that bypasses the coordinator needs a matching ledger
/// entry, otherwise reconciliation tests would fail by construction.
async fn seed_wallet(pool: &PgPool, user_id: Uuid, wallet: WalletKind, amount: Decimal) {
    sqlx::query(&format!(
        "UPDATE users SET {}_wallet = {}_wallet + $1 WHERE id = $2",
        wallet.as_str(),
        wallet.as_str()
    ))
    .bind(amount)
    .bind(user_id)
    .execute(pool)
    .await
    .expect("wallet seeded");

    sqlx::query(
        r#"
        INSERT INTO wallet_transactions (
            id, user_id, payment_id, transaction_type, wallet_type, amount,
            description, created_at
        ) VALUES ($1, $2, NULL, 'earned', $3, $4, 'test seed', CURRENT_TIMESTAMP)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(wallet.as_str())
    .bind(amount)
    .execute(pool)
    .await
    .expect("seed ledger entry inserted");
}

#[tokio::test]
#[ignore = "requires Docker for the PostgreSQL test container"]
async fn payment_allocates_spare_change_and_reconciles() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool();
    let user_id = seed_account(pool, dec!(10000)).await;

    let wallets = WalletRepository::new(pool.clone());
    let outcome = wallets
        .process_payment(user_id, &upi_recipient(), inr(dec!(1847)))
        .await
        .expect("payment succeeds");

    assert_eq!(outcome.breakdown.rounded.amount(), dec!(1900));
    assert_eq!(outcome.breakdown.spare_change.amount(), dec!(53.00));
    assert_eq!(outcome.breakdown.donation.amount(), dec!(21.20));
    assert_eq!(outcome.breakdown.investment.amount(), dec!(21.20));
    assert_eq!(outcome.breakdown.savings.amount(), dec!(10.60));

    let accounts = AccountRepository::new(pool.clone());
    let snapshot = accounts.wallet_snapshot(user_id).await.unwrap();
    assert_eq!(snapshot.spendable_balance, dec!(8100.00));
    assert_eq!(snapshot.donation_wallet, dec!(21.20));
    assert_eq!(snapshot.investment_wallet, dec!(21.20));
    assert_eq!(snapshot.savings_wallet, dec!(10.60));
    assert_eq!(snapshot.total_spare_change, dec!(53.00));

    // Ledger reconciliation: earned minus spent equals every balance column
    for wallet in WalletKind::ALL {
        let ledger_total = wallets.wallet_ledger_total(user_id, wallet).await.unwrap();
        let balance = match wallet {
            WalletKind::Donation => snapshot.donation_wallet,
            WalletKind::Investment => snapshot.investment_wallet,
            WalletKind::Savings => snapshot.savings_wallet,
        };
        assert_eq!(ledger_total, balance);
    }
}

#[tokio::test]
#[ignore = "requires Docker for the PostgreSQL test container"]
async fn insufficient_funds_leaves_all_balances_unchanged() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool();
    let user_id = seed_account(pool, dec!(1000)).await;

    let wallets = WalletRepository::new(pool.clone());
    let result = wallets
        .process_payment(user_id, &upi_recipient(), inr(dec!(1500)))
        .await;

    assert!(matches!(
        result,
        Err(LedgerError::InsufficientBalance { .. })
    ));

    let accounts = AccountRepository::new(pool.clone());
    let snapshot = accounts.wallet_snapshot(user_id).await.unwrap();
    assert_eq!(snapshot.spendable_balance, dec!(1000.00));
    assert_eq!(snapshot.donation_wallet, dec!(0.00));
    assert_eq!(snapshot.total_spare_change, dec!(0.00));

    let payments = wallets.payment_history(user_id, 50).await.unwrap();
    assert!(payments.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker for the PostgreSQL test container"]
async fn exact_multiple_payment_produces_no_ledger_entries() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool();
    let user_id = seed_account(pool, dec!(10000)).await;

    let wallets = WalletRepository::new(pool.clone());
    let outcome = wallets
        .process_payment(user_id, &upi_recipient(), inr(dec!(500)))
        .await
        .unwrap();

    assert!(outcome.breakdown.spare_change.is_zero());

    let entries = wallets.ledger_entries(user_id, None, 50).await.unwrap();
    assert!(entries.is_empty());

    let accounts = AccountRepository::new(pool.clone());
    let snapshot = accounts.wallet_snapshot(user_id).await.unwrap();
    assert_eq!(snapshot.spendable_balance, dec!(9500.00));
}

#[tokio::test]
#[ignore = "requires Docker for the PostgreSQL test container"]
async fn split_update_applies_to_next_payment_only() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool();
    let user_id = seed_account(pool, dec!(10000)).await;

    let wallets = WalletRepository::new(pool.clone());
    wallets
        .update_split(user_id, SplitPercentages::new(50, 30, 20).unwrap())
        .await
        .unwrap();

    let outcome = wallets
        .process_payment(user_id, &upi_recipient(), inr(dec!(1850)))
        .await
        .unwrap();

    assert_eq!(outcome.breakdown.spare_change.amount(), dec!(50.00));
    assert_eq!(outcome.breakdown.donation.amount(), dec!(25.00));
    assert_eq!(outcome.breakdown.investment.amount(), dec!(15.00));
    assert_eq!(outcome.breakdown.savings.amount(), dec!(10.00));
}

#[tokio::test]
#[ignore = "requires Docker for the PostgreSQL test container"]
async fn donation_debits_wallet_and_records_row() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool();
    let user_id = seed_account(pool, dec!(0)).await;
    seed_wallet(pool, user_id, WalletKind::Donation, dec!(500)).await;

    let wallets = WalletRepository::new(pool.clone());
    let donation_id = wallets
        .record_donation(user_id, &seeded_charity(), inr(dec!(125)))
        .await
        .expect("donation succeeds");

    let donations = wallets.list_donations(user_id).await.unwrap();
    assert_eq!(donations.len(), 1);
    assert_eq!(donations[0].id, donation_id);
    assert_eq!(donations[0].amount, dec!(125.00));

    let accounts = AccountRepository::new(pool.clone());
    let snapshot = accounts.wallet_snapshot(user_id).await.unwrap();
    assert_eq!(snapshot.donation_wallet, dec!(375.00));

    let ledger_total = wallets
        .wallet_ledger_total(user_id, WalletKind::Donation)
        .await
        .unwrap();
    assert_eq!(ledger_total, dec!(375.00));
}

#[tokio::test]
#[ignore = "requires Docker for the PostgreSQL test container"]
async fn donation_to_unknown_charity_is_not_found() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool();
    let user_id = seed_account(pool, dec!(0)).await;
    seed_wallet(pool, user_id, WalletKind::Donation, dec!(500)).await;

    let wallets = WalletRepository::new(pool.clone());
    let result = wallets
        .record_donation(
            user_id,
            &CharityRef::Name("No Such Charity".to_string()),
            inr(dec!(10)),
        )
        .await;

    assert!(matches!(result, Err(ref e) if e.is_not_found()));
}

#[tokio::test]
#[ignore = "requires Docker for the PostgreSQL test container"]
async fn concurrent_donations_within_balance_individually_but_not_combined() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool();
    let user_id = seed_account(pool, dec!(0)).await;
    seed_wallet(pool, user_id, WalletKind::Donation, dec!(500)).await;

    let wallets = WalletRepository::new(pool.clone());
    let charity_first = seeded_charity();
    let charity_second = seeded_charity();
    let (first, second) = tokio::join!(
        wallets.record_donation(user_id, &charity_first, inr(dec!(300))),
        wallets.record_donation(user_id, &charity_second, inr(dec!(300))),
    );

    // The row lock serializes them: exactly one fits the balance
    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one of two concurrent donations may succeed");

    let failure = if first.is_err() { first } else { second };
    assert!(matches!(
        failure,
        Err(LedgerError::Wallet(WalletError::InsufficientFunds { .. }))
    ));

    let accounts = AccountRepository::new(pool.clone());
    let snapshot = accounts.wallet_snapshot(user_id).await.unwrap();
    assert_eq!(snapshot.donation_wallet, dec!(200.00));
}

#[tokio::test]
#[ignore = "requires Docker for the PostgreSQL test container"]
async fn investment_rejects_non_positive_amount_before_any_write() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool();
    let user_id = seed_account(pool, dec!(0)).await;
    seed_wallet(pool, user_id, WalletKind::Investment, dec!(500)).await;

    let wallets = WalletRepository::new(pool.clone());
    let result = wallets
        .record_investment(user_id, "Tech Innovators Fund", "mutual-fund", inr(dec!(0)))
        .await;

    assert!(matches!(result, Err(LedgerError::InvalidAmount(_))));
    assert!(wallets.list_investments(user_id).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker for the PostgreSQL test container"]
async fn goal_contribution_completes_exactly_once_and_rejects_after() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool();
    let user_id = seed_account(pool, dec!(0)).await;
    seed_wallet(pool, user_id, WalletKind::Savings, dec!(1000)).await;

    let goals = GoalRepository::new(pool.clone());
    let goal = TestGoalBuilder::new()
        .with_user_id(UserId::from_uuid(user_id))
        .with_target(inr(dec!(500)))
        .build();
    let goal_id = goals.create_goal(&goal).await.unwrap();

    let outcome = goals
        .contribute(user_id, *goal_id.as_uuid(), inr(dec!(500)), None)
        .await
        .unwrap();
    assert!(outcome.completed);
    assert_eq!(outcome.new_amount.amount(), dec!(500.00));

    // Terminal state: a second contribution is rejected, nothing moves
    let second = goals
        .contribute(user_id, *goal_id.as_uuid(), inr(dec!(1)), None)
        .await;
    assert!(matches!(
        second,
        Err(LedgerError::Goal(GoalError::AlreadyCompleted(_)))
    ));

    let accounts = AccountRepository::new(pool.clone());
    let snapshot = accounts.wallet_snapshot(user_id).await.unwrap();
    assert_eq!(snapshot.savings_wallet, dec!(500.00));

    let achieved = goals.list_achieved(user_id).await.unwrap();
    assert_eq!(achieved.len(), 1);
    assert_eq!(achieved[0].achieved_amount, Some(dec!(500.00)));
}

#[tokio::test]
#[ignore = "requires Docker for the PostgreSQL test container"]
async fn goal_contribution_rejected_when_savings_wallet_short() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool();
    let user_id = seed_account(pool, dec!(0)).await;
    seed_wallet(pool, user_id, WalletKind::Savings, dec!(100)).await;

    let goals = GoalRepository::new(pool.clone());
    let goal = TestGoalBuilder::new()
        .with_user_id(UserId::from_uuid(user_id))
        .with_target(inr(dec!(500)))
        .build();
    let goal_id = goals.create_goal(&goal).await.unwrap();

    let result = goals
        .contribute(user_id, *goal_id.as_uuid(), inr(dec!(100.01)), None)
        .await;
    assert!(matches!(
        result,
        Err(LedgerError::Wallet(WalletError::InsufficientFunds { .. }))
    ));

    // Nothing was applied to the goal either
    let listed = goals.list_goals(user_id).await.unwrap();
    assert_eq!(listed[0].current_amount, dec!(0.00));
}

#[tokio::test]
#[ignore = "requires Docker for the PostgreSQL test container"]
async fn deleting_a_goal_removes_its_history() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool();
    let user_id = seed_account(pool, dec!(0)).await;
    seed_wallet(pool, user_id, WalletKind::Savings, dec!(1000)).await;

    let goals = GoalRepository::new(pool.clone());
    let goal = TestGoalBuilder::new()
        .with_user_id(UserId::from_uuid(user_id))
        .with_target(inr(dec!(5000)))
        .build();
    let goal_id = goals.create_goal(&goal).await.unwrap();

    goals
        .contribute(user_id, *goal_id.as_uuid(), inr(dec!(250)), None)
        .await
        .unwrap();
    assert_eq!(goals.contribution_history(user_id, 50).await.unwrap().len(), 1);

    goals.delete_goal(user_id, *goal_id.as_uuid()).await.unwrap();

    assert!(goals.list_goals(user_id).await.unwrap().is_empty());
    assert!(goals.contribution_history(user_id, 50).await.unwrap().is_empty());

    let orphaned = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM savings_goal_history WHERE goal_id = $1",
    )
    .bind(*goal_id.as_uuid())
    .fetch_one(pool)
    .await
    .unwrap();
    assert_eq!(orphaned, 0);
}

#[tokio::test]
#[ignore = "requires Docker for the PostgreSQL test container"]
async fn deleting_someone_elses_goal_is_not_found_and_keeps_history() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool();
    let owner = seed_account(pool, dec!(0)).await;
    let stranger = seed_account(pool, dec!(0)).await;
    seed_wallet(pool, owner, WalletKind::Savings, dec!(1000)).await;

    let goals = GoalRepository::new(pool.clone());
    let goal = TestGoalBuilder::new()
        .with_user_id(UserId::from_uuid(owner))
        .build();
    let goal_id = goals.create_goal(&goal).await.unwrap();
    goals
        .contribute(owner, *goal_id.as_uuid(), inr(dec!(100)), None)
        .await
        .unwrap();

    let result = goals.delete_goal(stranger, *goal_id.as_uuid()).await;
    assert!(matches!(result, Err(ref e) if e.is_not_found()));

    // The owner's goal and history are untouched
    assert_eq!(goals.list_goals(owner).await.unwrap().len(), 1);
    assert_eq!(goals.contribution_history(owner, 50).await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires Docker for the PostgreSQL test container"]
async fn duplicate_email_signup_is_rejected() {
    let db = create_isolated_test_database().await.unwrap();
    let pool = db.pool();

    let accounts = AccountRepository::new(pool.clone());
    let new_account = |email: &str, upi: &str| NewAccount {
        full_name: "Asha Rao".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        upi_id: upi.to_string(),
        opening_balance: Decimal::ZERO,
    };

    accounts
        .create_account(new_account("dup@example.com", "first@upi"))
        .await
        .unwrap();
    let result = accounts
        .create_account(new_account("dup@example.com", "second@upi"))
        .await;

    assert!(matches!(
        result,
        Err(LedgerError::Database(infra_db::DatabaseError::DuplicateEntry(_)))
    ));
}
