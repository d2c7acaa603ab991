//! Pure derivation of progress metrics from ledger and goal snapshots.

use chrono::NaiveDate;
use num_traits::Zero;
use rust_decimal::Decimal;

use super::progress_errors::CalculatorError;
use super::progress_model::ProgressSummary;
use crate::constants::AVG_DAYS_PER_MONTH;
use crate::goal::Goal;
use crate::ledger::Ledger;

/// Derives all progress metrics from the given snapshots.
///
/// Stateless and deterministic: the same `(ledger, goal, today)` triple
/// always yields the same summary. `today` is an explicit parameter; the
/// system clock is never read here.
pub fn calculate(
    ledger: &Ledger,
    goal: &Goal,
    today: NaiveDate,
) -> Result<ProgressSummary, CalculatorError> {
    if goal.target_amount.is_zero() {
        return Err(CalculatorError::ZeroTarget);
    }

    let current_balance = ledger.balance();
    let remaining = (goal.target_amount - current_balance).max(Decimal::zero());

    // Raw signed day count; display variants clamp, the calculator does not.
    let days_remaining = (goal.target_date - today).num_days();
    let days_remaining_display = days_remaining.max(0);

    // Never below one month, even when the target date has passed.
    let months_remaining =
        (Decimal::from(days_remaining) / AVG_DAYS_PER_MONTH).max(Decimal::ONE);

    let progress_fraction =
        (current_balance / goal.target_amount).clamp(Decimal::zero(), Decimal::ONE);

    let recommended_monthly = remaining / months_remaining;
    let goal_reached = remaining.is_zero();

    Ok(ProgressSummary {
        as_of: today,
        current_balance,
        remaining,
        days_remaining,
        days_remaining_display,
        months_remaining,
        progress_fraction,
        recommended_monthly,
        goal_reached,
        per_contributor_total: ledger.totals_by_contributor(),
    })
}
