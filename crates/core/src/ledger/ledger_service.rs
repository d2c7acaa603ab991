use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::warn;

use super::ledger_errors::LedgerError;
use super::ledger_model::{Ledger, LedgerLoad, NewContribution};
use super::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
use crate::errors::{Error, Result};

/// Service for reading and mutating the contribution ledger.
pub struct LedgerService {
    repository: Arc<dyn LedgerRepositoryTrait>,
}

impl LedgerService {
    pub fn new(repository: Arc<dyn LedgerRepositoryTrait>) -> Self {
        LedgerService { repository }
    }
}

#[async_trait]
impl LedgerServiceTrait for LedgerService {
    /// Lenient load: an unreadable table is replaced by an empty ledger,
    /// reported through [`LedgerLoad::RecoveredEmpty`] and logged so the
    /// data loss does not go unnoticed.
    fn load_ledger(&self) -> Result<LedgerLoad> {
        match self.repository.load() {
            Ok(ledger) => Ok(LedgerLoad::Intact(ledger)),
            Err(Error::Ledger(LedgerError::CorruptStore(detail))) => {
                warn!(
                    "Persisted ledger is unreadable, continuing with an empty ledger: {}",
                    detail
                );
                Ok(LedgerLoad::RecoveredEmpty { detail })
            }
            Err(e) => Err(e),
        }
    }

    /// Strict load: surfaces `CorruptStore` instead of recovering.
    fn load_ledger_strict(&self) -> Result<Ledger> {
        self.repository.load()
    }

    /// Validates and appends a deposit. The amount check happens here, at
    /// the store boundary, before anything is written.
    async fn record_deposit(&self, deposit: NewContribution) -> Result<Ledger> {
        deposit.validate()?;
        let record = deposit.into_record(Utc::now());
        self.repository.append(record).await
    }

    async fn clear_ledger(&self) -> Result<()> {
        self.repository.clear().await
    }
}
