//! Comprehensive tests for domain_wallet

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, PaymentId, UserId};
use domain_wallet::{
    EntryType, LedgerEntry, PaymentStatus, Recipient, WalletBalances, WalletError, WalletKind,
};

fn inr(amount: Decimal) -> Money {
    Money::new(amount, Currency::INR)
}

// ============================================================================
// Balance Rule Tests
// ============================================================================

mod balance_tests {
    use super::*;

    #[test]
    fn test_debit_exactly_at_balance_is_allowed() {
        let balances = WalletBalances::new(inr(dec!(100)), inr(dec!(0)), inr(dec!(0)));
        assert!(balances
            .ensure_can_debit(WalletKind::Donation, inr(dec!(100)))
            .is_ok());
    }

    #[test]
    fn test_debit_one_paisa_over_is_rejected() {
        let balances = WalletBalances::new(inr(dec!(100)), inr(dec!(0)), inr(dec!(0)));
        let result = balances.ensure_can_debit(WalletKind::Donation, inr(dec!(100.01)));

        match result {
            Err(WalletError::InsufficientFunds {
                wallet,
                available,
                requested,
            }) => {
                assert_eq!(wallet, WalletKind::Donation);
                assert_eq!(available, dec!(100.00));
                assert_eq!(requested, dec!(100.01));
            }
            other => panic!("Expected InsufficientFunds, got {:?}", other),
        }
    }

    #[test]
    fn test_each_wallet_checked_independently() {
        let balances = WalletBalances::new(inr(dec!(10)), inr(dec!(500)), inr(dec!(0)));

        assert!(balances
            .ensure_can_debit(WalletKind::Investment, inr(dec!(400)))
            .is_ok());
        assert!(balances
            .ensure_can_debit(WalletKind::Donation, inr(dec!(400)))
            .is_err());
        assert!(balances
            .ensure_can_debit(WalletKind::Savings, inr(dec!(0.01)))
            .is_err());
    }

    #[test]
    fn test_total_sums_all_wallets() {
        let balances = WalletBalances::new(inr(dec!(500)), inr(dec!(600)), inr(dec!(200)));
        assert_eq!(balances.total().unwrap().amount(), dec!(1300.00));
    }
}

// ============================================================================
// Ledger Reconciliation Tests
// ============================================================================

mod reconciliation_tests {
    use super::*;

    /// Replays a sequence of entries into a running balance the way the
    /// reconciliation query does: earned adds, spent subtracts.
    fn replay(entries: &[LedgerEntry], wallet: WalletKind) -> Money {
        entries
            .iter()
            .filter(|e| e.wallet == wallet)
            .fold(Money::zero(Currency::INR), |acc, e| acc + e.signed_amount())
    }

    #[test]
    fn test_earned_then_spent_reconciles() {
        let user = UserId::new();
        let payment = PaymentId::new();

        let entries = vec![
            LedgerEntry::earned(user, payment, WalletKind::Savings, inr(dec!(10.60)), "round-up"),
            LedgerEntry::earned(user, payment, WalletKind::Savings, inr(dec!(21.20)), "round-up"),
            LedgerEntry::spent(user, WalletKind::Savings, inr(dec!(15.00)), "goal contribution"),
        ];

        assert_eq!(replay(&entries, WalletKind::Savings).amount(), dec!(16.80));
    }

    #[test]
    fn test_wallets_do_not_bleed_into_each_other() {
        let user = UserId::new();
        let payment = PaymentId::new();

        let entries = vec![
            LedgerEntry::earned(user, payment, WalletKind::Donation, inr(dec!(21.20)), "round-up"),
            LedgerEntry::earned(user, payment, WalletKind::Investment, inr(dec!(21.20)), "round-up"),
        ];

        assert_eq!(replay(&entries, WalletKind::Donation).amount(), dec!(21.20));
        assert_eq!(replay(&entries, WalletKind::Investment).amount(), dec!(21.20));
        assert!(replay(&entries, WalletKind::Savings).is_zero());
    }

    #[test]
    fn test_empty_ledger_reconciles_to_zero() {
        assert!(replay(&[], WalletKind::Donation).is_zero());
    }
}

// ============================================================================
// Recipient Tests
// ============================================================================

mod recipient_tests {
    use super::*;

    #[test]
    fn test_recipient_display_uses_label() {
        let r = Recipient::new(Some("alice@upi".to_string()), None, None).unwrap();
        assert_eq!(r.to_string(), "alice@upi");
    }

    #[test]
    fn test_recipient_serde_round_trip() {
        let r = Recipient::new(
            Some("alice@upi".to_string()),
            Some("9876543210".to_string()),
            Some("Alice".to_string()),
        )
        .unwrap();
        let json = serde_json::to_string(&r).unwrap();
        let back: Recipient = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&PaymentStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn replaying_entries_never_depends_on_order_of_other_wallets(
            donation_minor in proptest::collection::vec(1i64..100_000i64, 0..10),
            savings_minor in proptest::collection::vec(1i64..100_000i64, 0..10)
        ) {
            let user = UserId::new();
            let payment = PaymentId::new();

            let mut entries = Vec::new();
            let mut expected = Money::zero(Currency::INR);
            for minor in &donation_minor {
                let amount = Money::from_minor(*minor, Currency::INR);
                expected = expected + amount;
                entries.push(LedgerEntry::earned(
                    user, payment, WalletKind::Donation, amount, "round-up",
                ));
            }
            for minor in &savings_minor {
                let amount = Money::from_minor(*minor, Currency::INR);
                entries.push(LedgerEntry::earned(
                    user, payment, WalletKind::Savings, amount, "round-up",
                ));
            }

            let replayed = entries
                .iter()
                .filter(|e| e.wallet == WalletKind::Donation)
                .fold(Money::zero(Currency::INR), |acc, e| acc + e.signed_amount());

            prop_assert_eq!(replayed, expected);
        }

        #[test]
        fn earned_and_spent_cancel_exactly(minor in 1i64..1_000_000i64) {
            let user = UserId::new();
            let payment = PaymentId::new();
            let amount = Money::from_minor(minor, Currency::INR);

            let earned = LedgerEntry::earned(user, payment, WalletKind::Investment, amount, "in");
            let spent = LedgerEntry::spent(user, WalletKind::Investment, amount, "out");

            let net = earned.signed_amount() + spent.signed_amount();
            prop_assert!(net.is_zero());
        }

        #[test]
        fn entry_type_sign_matches_signed_amount(minor in 1i64..1_000_000i64) {
            let user = UserId::new();
            let amount = Money::from_minor(minor, Currency::INR);
            let entry = LedgerEntry::spent(user, WalletKind::Donation, amount, "out");

            let expected_sign = Decimal::from(entry.entry_type.sign());
            prop_assert_eq!(entry.signed_amount().amount(), amount.amount() * expected_sign);
        }
    }
}

// ============================================================================
// Entry Construction Tests
// ============================================================================

mod entry_tests {
    use super::*;

    #[test]
    fn test_entry_ids_are_unique() {
        let user = UserId::new();
        let a = LedgerEntry::spent(user, WalletKind::Donation, inr(dec!(1)), "a");
        let b = LedgerEntry::spent(user, WalletKind::Donation, inr(dec!(1)), "b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let entry = LedgerEntry::earned(
            UserId::new(),
            PaymentId::new(),
            WalletKind::Savings,
            inr(dec!(10.60)),
            "Spare change from payment to Alice",
        );
        let json = serde_json::to_string(&entry).unwrap();
        let back: LedgerEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }

    #[test]
    fn test_entry_type_display() {
        assert_eq!(EntryType::Earned.to_string(), "earned");
        assert_eq!(EntryType::Spent.to_string(), "spent");
    }
}
