use crate::errors::Result;
use crate::ledger::ledger_model::{ContributionRecord, Ledger, LedgerLoad, NewContribution};
use async_trait::async_trait;

/// Trait for ledger repository operations.
///
/// Reads are synchronous; every mutation runs on the storage layer's
/// single-writer actor so that a read-modify-rewrite cycle is one atomic
/// unit with respect to other writers.
#[async_trait]
pub trait LedgerRepositoryTrait: Send + Sync {
    /// Loads the persisted ledger, empty if nothing has been written yet.
    /// Strict: a malformed row fails with `LedgerError::CorruptStore`.
    fn load(&self) -> Result<Ledger>;

    /// Appends one record: re-reads the table, appends, and rewrites it
    /// wholesale inside a single transaction. Returns the updated ledger.
    async fn append(&self, record: ContributionRecord) -> Result<Ledger>;

    /// Full rewrite of the backing table from the given snapshot, not an
    /// incremental append. Returns the number of rows written.
    async fn replace_all(&self, ledger: Ledger) -> Result<usize>;

    /// Persists an empty ledger, discarding all records. Irreversible.
    async fn clear(&self) -> Result<()>;
}

/// Trait for ledger service operations.
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    fn load_ledger(&self) -> Result<LedgerLoad>;
    fn load_ledger_strict(&self) -> Result<Ledger>;
    async fn record_deposit(&self, deposit: NewContribution) -> Result<Ledger>;
    async fn clear_ledger(&self) -> Result<()>;
}
