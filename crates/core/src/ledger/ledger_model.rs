use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ledger_errors::LedgerError;

/// A single deposit made by a named contributor.
///
/// Records are immutable once created: the ledger only ever grows by
/// appending, or is reset wholesale by a clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub contributor: String,
    pub amount: Decimal,
}

/// Input model for recording a new deposit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContribution {
    pub contributor: String,
    pub amount: Decimal,
}

impl NewContribution {
    /// Validates the deposit before it reaches the store.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.contributor.trim().is_empty() {
            return Err(LedgerError::InvalidContribution(
                "Contributor cannot be empty".to_string(),
            ));
        }
        if self.amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidContribution(format!(
                "Amount must be positive, got {}",
                self.amount
            )));
        }
        Ok(())
    }

    /// Stamps the input into an immutable record created at `timestamp`.
    pub fn into_record(self, timestamp: DateTime<Utc>) -> ContributionRecord {
        ContributionRecord {
            id: Uuid::new_v4().to_string(),
            timestamp,
            contributor: self.contributor,
            amount: self.amount,
        }
    }
}

/// Append-only sequence of contributions, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    records: Vec<ContributionRecord>,
}

impl Ledger {
    pub fn new(records: Vec<ContributionRecord>) -> Self {
        Ledger { records }
    }

    pub fn empty() -> Self {
        Ledger::default()
    }

    pub fn records(&self) -> &[ContributionRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ContributionRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns a new ledger with `record` appended. The receiver is
    /// consumed; existing records are never reordered or mutated.
    pub fn with_appended(mut self, record: ContributionRecord) -> Ledger {
        self.records.push(record);
        self
    }

    /// Sum of all recorded amounts, in exact decimal arithmetic.
    pub fn balance(&self) -> Decimal {
        self.records.iter().map(|r| r.amount).sum()
    }

    /// Total deposited per contributor. Every distinct contributor value in
    /// the ledger gets an entry, including ones outside the configured set.
    pub fn totals_by_contributor(&self) -> HashMap<String, Decimal> {
        let mut totals: HashMap<String, Decimal> = HashMap::new();
        for record in &self.records {
            *totals
                .entry(record.contributor.clone())
                .or_insert(Decimal::ZERO) += record.amount;
        }
        totals
    }

    /// Display-time ordering: newest first. Does not affect the stored
    /// insertion order.
    pub fn sorted_for_display(&self) -> Vec<ContributionRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted
    }
}

/// Outcome of loading the persisted ledger under the lenient policy.
///
/// The source application silently replaced an unreadable table with an
/// empty one; this keeps that behavior available but makes it explicit,
/// so callers choose between [`LedgerLoad`] and the strict load.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerLoad {
    /// The persisted table parsed cleanly (or did not exist yet).
    Intact(Ledger),
    /// The table existed but was unreadable; an empty ledger was
    /// substituted and the failure logged.
    RecoveredEmpty { detail: String },
}

impl LedgerLoad {
    pub fn is_recovered(&self) -> bool {
        matches!(self, LedgerLoad::RecoveredEmpty { .. })
    }

    pub fn into_ledger(self) -> Ledger {
        match self {
            LedgerLoad::Intact(ledger) => ledger,
            LedgerLoad::RecoveredEmpty { .. } => Ledger::empty(),
        }
    }
}
