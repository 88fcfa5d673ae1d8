//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants, plus fake-data helpers for
//! realistic-looking accounts.

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money};
use domain_allocation::SplitPercentages;
use domain_wallet::WalletKind;

/// Strategy for generating valid positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating valid Money values in the ledger currency
pub fn inr_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(|amount| Money::from_minor(amount, Currency::INR))
}

/// Strategy for generating payment amounts that always produce spare change
pub fn non_boundary_amount_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy()
        .prop_filter("must not sit on a 100-unit boundary", |minor| {
            minor % 10_000 != 0
        })
        .prop_map(|minor| Money::from_minor(minor, Currency::INR))
}

/// Strategy for generating valid split percentages summing to 100
pub fn split_strategy() -> impl Strategy<Value = SplitPercentages> {
    (0u32..=100u32, 0u32..=100u32)
        .prop_filter("donation + investment must leave room for savings", |(d, i)| {
            d + i <= 100
        })
        .prop_map(|(d, i)| {
            SplitPercentages::new(d, i, 100 - d - i).expect("constructed split is valid")
        })
}

/// Strategy for generating a wallet kind
pub fn wallet_kind_strategy() -> impl Strategy<Value = WalletKind> {
    prop_oneof![
        Just(WalletKind::Donation),
        Just(WalletKind::Investment),
        Just(WalletKind::Savings),
    ]
}

/// Strategy for generating positive Decimal values at currency precision
pub fn positive_decimal_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|m| Decimal::new(m, 2))
}

/// Generates a realistic display name
pub fn fake_full_name() -> String {
    Name().fake()
}

/// Generates a realistic email address
pub fn fake_email() -> String {
    SafeEmail().fake()
}

/// Generates a plausible UPI handle from an email-like local part
pub fn fake_upi_id() -> String {
    let local: String = fake::faker::internet::en::Username().fake();
    format!("{}@upi", local)
}
