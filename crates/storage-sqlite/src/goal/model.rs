//! Database model for the persisted goal record.

use std::str::FromStr;

use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use nestfund_core::goal::{Goal, GoalError};

/// The goal is a single row living at this fixed key.
pub const GOAL_ROW_ID: i32 = 1;

#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::goal)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: i32,
    pub target_amount: String,
    pub target_date: String,
}

impl From<Goal> for GoalDB {
    fn from(goal: Goal) -> Self {
        GoalDB {
            id: GOAL_ROW_ID,
            target_amount: goal.target_amount.to_string(),
            target_date: goal.target_date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl TryFrom<GoalDB> for Goal {
    type Error = GoalError;

    /// Strict parse: an unreadable amount or date surfaces as a corrupt
    /// store instead of a silent default.
    fn try_from(row: GoalDB) -> Result<Self, Self::Error> {
        let target_amount = Decimal::from_str(&row.target_amount).map_err(|e| {
            GoalError::CorruptStore(format!(
                "bad target amount {:?}: {}",
                row.target_amount, e
            ))
        })?;
        let target_date = NaiveDate::parse_from_str(&row.target_date, "%Y-%m-%d").map_err(|e| {
            GoalError::CorruptStore(format!("bad target date {:?}: {}", row.target_date, e))
        })?;

        Ok(Goal {
            target_amount,
            target_date,
        })
    }
}
