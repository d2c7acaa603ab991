//! SQLite storage implementation for the contribution ledger.

mod model;
mod repository;

pub use model::ContributionDB;
pub use repository::SqliteLedgerRepository;

// Re-export trait from core for convenience
pub use nestfund_core::ledger::LedgerRepositoryTrait;
