//! Database models for the contribution ledger.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use nestfund_core::ledger::{ContributionRecord, LedgerError};

/// Database row for a single contribution.
///
/// Amounts and timestamps are stored as TEXT so currency values round-trip
/// without precision loss.
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::contributions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContributionDB {
    pub id: String,
    pub contributor: String,
    pub amount: String,
    pub timestamp: String,
}

impl From<ContributionRecord> for ContributionDB {
    fn from(record: ContributionRecord) -> Self {
        ContributionDB {
            id: record.id,
            contributor: record.contributor,
            amount: record.amount.to_string(),
            timestamp: record.timestamp.to_rfc3339(),
        }
    }
}

impl TryFrom<ContributionDB> for ContributionRecord {
    type Error = LedgerError;

    /// Strict parse: a malformed amount or timestamp marks the table as
    /// corrupt instead of being dropped or zeroed out.
    fn try_from(row: ContributionDB) -> Result<Self, Self::Error> {
        let amount = Decimal::from_str(&row.amount).map_err(|e| {
            LedgerError::CorruptStore(format!(
                "contribution {}: bad amount {:?}: {}",
                row.id, row.amount, e
            ))
        })?;
        let timestamp = DateTime::parse_from_rfc3339(&row.timestamp)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                LedgerError::CorruptStore(format!(
                    "contribution {}: bad timestamp {:?}: {}",
                    row.id, row.timestamp, e
                ))
            })?;

        Ok(ContributionRecord {
            id: row.id,
            contributor: row.contributor,
            amount,
            timestamp,
        })
    }
}
