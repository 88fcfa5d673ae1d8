//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use rust_decimal::Decimal;

use core_kernel::Money;
use domain_allocation::SpareChangeBreakdown;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Arguments
///
/// * `actual` - The actual Money value
/// * `expected` - The expected Money value
/// * `tolerance` - The allowed difference in the amount
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than
/// tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(
        money.is_positive(),
        "Expected positive money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that money values sum to a total
///
/// # Arguments
///
/// * `parts` - The money values that should sum to total
/// * `total` - The expected total
///
/// # Panics
///
/// Panics if the sum doesn't equal the total
pub fn assert_money_sum_equals(parts: &[Money], total: &Money) {
    let sum = parts.iter().fold(Money::zero(total.currency()), |acc, m| {
        acc.checked_add(m).expect("Currency mismatch in sum")
    });

    assert_eq!(
        sum.amount(),
        total.amount(),
        "Sum of parts ({}) doesn't equal total ({})",
        sum.amount(),
        total.amount()
    );
}

/// Asserts every invariant of a spare-change breakdown at once
///
/// - the rounded amount is at least the original and within one step
/// - the three parts sum exactly to the spare change
/// - no part is negative
pub fn assert_breakdown_invariants(breakdown: &SpareChangeBreakdown) {
    assert!(
        breakdown.rounded.amount() >= breakdown.original.amount(),
        "Rounded {} is below original {}",
        breakdown.rounded.amount(),
        breakdown.original.amount()
    );
    assert!(
        breakdown.rounded.amount() - breakdown.original.amount() < Decimal::from(100u32),
        "Rounded {} is more than one step above original {}",
        breakdown.rounded.amount(),
        breakdown.original.amount()
    );

    assert_money_sum_equals(
        &[breakdown.donation, breakdown.investment, breakdown.savings],
        &breakdown.spare_change,
    );

    for part in [breakdown.donation, breakdown.investment, breakdown.savings] {
        assert!(
            !part.is_negative(),
            "Negative allocation part: {}",
            part.amount()
        );
    }
}

/// Asserts that a ledger reconciliation matches a wallet balance
///
/// # Arguments
///
/// * `ledger_total` - Sum of earned minus spent ledger entries
/// * `balance` - The wallet's balance column
pub fn assert_ledger_reconciles(ledger_total: Decimal, balance: Decimal) {
    assert_eq!(
        ledger_total, balance,
        "Ledger total ({}) does not reconcile with wallet balance ({})",
        ledger_total, balance
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use domain_allocation::{allocate, SplitPercentages};
    use rust_decimal_macros::dec;

    #[test]
    fn test_approx_eq_within_tolerance() {
        let a = Money::new(dec!(100.00), Currency::INR);
        let b = Money::new(dec!(100.01), Currency::INR);
        assert_money_approx_eq(&a, &b, dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "differ by more than tolerance")]
    fn test_approx_eq_outside_tolerance() {
        let a = Money::new(dec!(100.00), Currency::INR);
        let b = Money::new(dec!(100.02), Currency::INR);
        assert_money_approx_eq(&a, &b, dec!(0.01));
    }

    #[test]
    fn test_breakdown_invariants_hold_for_engine_output() {
        let breakdown = allocate(
            Money::new(dec!(1847), Currency::INR),
            &SplitPercentages::default(),
        )
        .unwrap();
        assert_breakdown_invariants(&breakdown);
    }

    #[test]
    #[should_panic(expected = "does not reconcile")]
    fn test_ledger_reconciliation_mismatch_panics() {
        assert_ledger_reconciles(dec!(10.00), dec!(10.01));
    }
}
