//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the ledger.
//! These fixtures are designed to be consistent and predictable for unit
//! tests.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use core_kernel::{CharityId, Currency, GoalId, Money, PaymentId, UserId};
use domain_allocation::SplitPercentages;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard INR amount for testing
    pub fn inr_100() -> Money {
        Money::new(dec!(100.00), Currency::INR)
    }

    /// A payment amount that produces spare change at every split
    pub fn inr_payment_1847() -> Money {
        Money::new(dec!(1847.00), Currency::INR)
    }

    /// The spendable balance the worked examples assume
    pub fn inr_opening_balance() -> Money {
        Money::new(dec!(10000.00), Currency::INR)
    }

    /// A typical savings-goal target
    pub fn inr_goal_target() -> Money {
        Money::new(dec!(5000.00), Currency::INR)
    }

    /// Creates a zero amount
    pub fn inr_zero() -> Money {
        Money::zero(Currency::INR)
    }

    /// Creates a USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }
}

/// Fixture for split test data
pub struct SplitFixtures;

impl SplitFixtures {
    /// The default split a new account receives
    pub fn default_split() -> SplitPercentages {
        SplitPercentages::default()
    }

    /// A custom but valid split
    pub fn fifty_thirty_twenty() -> SplitPercentages {
        SplitPercentages::new(50, 30, 20).expect("valid split")
    }

    /// Everything routed to savings
    pub fn savings_only() -> SplitPercentages {
        SplitPercentages::new(0, 0, 100).expect("valid split")
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Start of the test year
    pub fn year_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// Mid-year timestamp
    pub fn mid_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    /// Standard goal target date
    pub fn goal_target_date() -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic user ID for testing
    pub fn user_id() -> UserId {
        UserId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic payment ID for testing
    pub fn payment_id() -> PaymentId {
        PaymentId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Creates a deterministic goal ID for testing
    pub fn goal_id() -> GoalId {
        GoalId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }

    /// Creates a deterministic charity ID for testing
    ///
    /// Matches the first seeded charity in the initial schema.
    pub fn charity_id() -> CharityId {
        CharityId::from_uuid(Uuid::parse_str("9a91726a-93f9-4b6d-a60d-5872a15c898c").unwrap())
    }
}

/// Fixture for decimal test data
pub struct DecimalFixtures;

impl DecimalFixtures {
    /// Spare change from the worked example (1847 -> 1900)
    pub fn spare_change_53() -> Decimal {
        dec!(53.00)
    }

    /// Zero for comparison tests
    pub fn zero() -> Decimal {
        Decimal::ZERO
    }

    /// Smallest currency unit
    pub fn one_paisa() -> Decimal {
        dec!(0.01)
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Test email address
    pub fn email() -> &'static str {
        "asha.rao@example.com"
    }

    /// Test UPI handle
    pub fn upi_id() -> &'static str {
        "asha@upi"
    }

    /// Test recipient phone number
    pub fn phone() -> &'static str {
        "9876543210"
    }

    /// Test display name
    pub fn full_name() -> &'static str {
        "Asha Rao"
    }

    /// Test goal title
    pub fn goal_title() -> &'static str {
        "Emergency fund"
    }

    /// Seeded charity name from the initial schema
    pub fn charity_name() -> &'static str {
        "Akshaya Patra Foundation"
    }
}
