//! Property-based tests for the progress calculator.
//!
//! These tests verify that universal properties hold across all valid
//! inputs, using the `proptest` crate for random test case generation.

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use nestfund_core::goal::Goal;
use nestfund_core::ledger::{ContributionRecord, Ledger};
use nestfund_core::progress::calculate;

// =============================================================================
// Generators
// =============================================================================

const CONTRIBUTORS: [&str; 3] = ["ana", "ben", "guest"];

/// Generates a deposit as whole cents so every amount is an exact decimal.
fn arb_record() -> impl Strategy<Value = (usize, i64)> {
    (0..CONTRIBUTORS.len(), 1i64..=1_000_000)
}

fn build_ledger(deposits: &[(usize, i64)]) -> Ledger {
    let records = deposits
        .iter()
        .enumerate()
        .map(|(i, (who, cents))| ContributionRecord {
            id: format!("r{}", i),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
                + chrono::Duration::seconds(i as i64),
            contributor: CONTRIBUTORS[*who].to_string(),
            amount: Decimal::new(*cents, 2),
        })
        .collect();
    Ledger::new(records)
}

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The balance equals the exact decimal sum of all deposit amounts.
    #[test]
    fn prop_balance_is_exact_decimal_sum(
        deposits in proptest::collection::vec(arb_record(), 0..200)
    ) {
        let ledger = build_ledger(&deposits);
        let expected_cents: i64 = deposits.iter().map(|(_, cents)| cents).sum();

        prop_assert_eq!(ledger.balance(), Decimal::new(expected_cents, 2));
    }

    /// The progress fraction stays inside [0, 1] for any positive target.
    #[test]
    fn prop_progress_fraction_is_bounded(
        deposits in proptest::collection::vec(arb_record(), 0..100),
        target_cents in 1i64..=10_000_000,
    ) {
        let ledger = build_ledger(&deposits);
        let goal = Goal {
            target_amount: Decimal::new(target_cents, 2),
            target_date: NaiveDate::from_ymd_opt(2028, 3, 15).unwrap(),
        };

        let summary = calculate(&ledger, &goal, reference_date()).unwrap();
        prop_assert!(summary.progress_fraction >= Decimal::ZERO);
        prop_assert!(summary.progress_fraction <= Decimal::ONE);
    }

    /// The goal is reached exactly when the balance covers the target, and
    /// a reached goal recommends a zero monthly contribution.
    #[test]
    fn prop_goal_reached_iff_balance_covers_target(
        deposits in proptest::collection::vec(arb_record(), 0..100),
        target_cents in 1i64..=10_000_000,
    ) {
        let ledger = build_ledger(&deposits);
        let goal = Goal {
            target_amount: Decimal::new(target_cents, 2),
            target_date: NaiveDate::from_ymd_opt(2028, 3, 15).unwrap(),
        };

        let summary = calculate(&ledger, &goal, reference_date()).unwrap();
        prop_assert_eq!(summary.goal_reached, ledger.balance() >= goal.target_amount);
        if summary.goal_reached {
            prop_assert_eq!(summary.recommended_monthly, Decimal::ZERO);
        }
    }

    /// Per-contributor totals partition the balance.
    #[test]
    fn prop_contributor_totals_sum_to_balance(
        deposits in proptest::collection::vec(arb_record(), 0..200)
    ) {
        let ledger = build_ledger(&deposits);
        let totals_sum: Decimal = ledger.totals_by_contributor().values().copied().sum();

        prop_assert_eq!(totals_sum, ledger.balance());
    }

    /// The calculator is a pure function of its inputs.
    #[test]
    fn prop_calculator_is_deterministic(
        deposits in proptest::collection::vec(arb_record(), 0..100),
        target_cents in 1i64..=10_000_000,
    ) {
        let ledger = build_ledger(&deposits);
        let goal = Goal {
            target_amount: Decimal::new(target_cents, 2),
            target_date: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
        };

        let first = calculate(&ledger, &goal, reference_date()).unwrap();
        let second = calculate(&ledger, &goal, reference_date()).unwrap();
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Fixed regression cases
// =============================================================================

/// A thousand one-cent deposits sum to exactly ten dollars; decimal
/// arithmetic accumulates no drift the way binary floats would.
#[test]
fn thousand_penny_deposits_have_no_drift() {
    let deposits: Vec<(usize, i64)> = (0..1000).map(|i| (i % CONTRIBUTORS.len(), 1)).collect();
    let ledger = build_ledger(&deposits);

    assert_eq!(ledger.balance(), dec!(10.00));

    let goal = Goal {
        target_amount: dec!(10.00),
        target_date: NaiveDate::from_ymd_opt(2028, 3, 15).unwrap(),
    };
    let summary = calculate(&ledger, &goal, reference_date()).unwrap();
    assert!(summary.goal_reached);
    assert_eq!(summary.remaining, Decimal::ZERO);
}
