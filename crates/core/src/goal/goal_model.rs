use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::goal_errors::GoalError;
use crate::constants::{DEFAULT_GOAL_HORIZON_YEARS, DEFAULT_TARGET_AMOUNT};

/// The savings target being worked toward.
///
/// There is exactly one goal at a time; edits overwrite it wholesale and it
/// is never deleted. A target date in the past is legal and simply yields a
/// negative remaining-day count downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub target_amount: Decimal,
    pub target_date: NaiveDate,
}

impl Goal {
    /// The first-run fallback: a fixed amount due two years from `today`.
    /// Not persisted until the user saves an edit.
    pub fn default_for(today: NaiveDate) -> Self {
        let horizon = Months::new(12 * DEFAULT_GOAL_HORIZON_YEARS);
        Goal {
            target_amount: DEFAULT_TARGET_AMOUNT,
            target_date: today.checked_add_months(horizon).unwrap_or(NaiveDate::MAX),
        }
    }

    /// Validates the goal before it is persisted. Only the amount is
    /// constrained; a past `target_date` is legal.
    pub fn validate(&self) -> Result<(), GoalError> {
        if self.target_amount <= Decimal::ZERO {
            return Err(GoalError::InvalidTarget(format!(
                "Target amount must be positive, got {}",
                self.target_amount
            )));
        }
        Ok(())
    }
}
