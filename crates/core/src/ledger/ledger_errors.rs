use thiserror::Error;

/// Custom error type for ledger-store operations
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The persisted table exists but could not be parsed into
    /// contribution records.
    #[error("Persisted ledger is unreadable: {0}")]
    CorruptStore(String),

    /// A deposit was rejected before reaching the store.
    #[error("Invalid contribution: {0}")]
    InvalidContribution(String),
}
