use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Metrics derived from a ledger and goal snapshot.
///
/// Never persisted; recomputed from the stores after every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// The date the metrics were computed against.
    pub as_of: NaiveDate,
    pub current_balance: Decimal,
    /// Amount still to be deposited, floored at zero.
    pub remaining: Decimal,
    /// Signed day count until the target date; negative once it has passed.
    pub days_remaining: i64,
    /// Day count clamped at zero, for display.
    pub days_remaining_display: i64,
    /// Months until the target date, floored at one month.
    pub months_remaining: Decimal,
    /// Share of the target reached, clamped to [0, 1].
    pub progress_fraction: Decimal,
    pub recommended_monthly: Decimal,
    pub goal_reached: bool,
    pub per_contributor_total: HashMap<String, Decimal>,
}

impl ProgressSummary {
    /// Copy with every currency figure rounded to display precision. The
    /// unrounded summary stays authoritative for further arithmetic.
    pub fn rounded_for_display(&self) -> ProgressSummary {
        let mut display = self.clone();
        display.current_balance = display.current_balance.round_dp(DISPLAY_DECIMAL_PRECISION);
        display.remaining = display.remaining.round_dp(DISPLAY_DECIMAL_PRECISION);
        display.recommended_monthly = display
            .recommended_monthly
            .round_dp(DISPLAY_DECIMAL_PRECISION);
        display
            .per_contributor_total
            .values_mut()
            .for_each(|total| *total = total.round_dp(DISPLAY_DECIMAL_PRECISION));
        display
    }
}
