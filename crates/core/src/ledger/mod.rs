//! Ledger module - contribution records, services, and traits.

mod ledger_errors;
mod ledger_model;
mod ledger_service;
mod ledger_traits;



pub use ledger_errors::LedgerError;
pub use ledger_model::{ContributionRecord, Ledger, LedgerLoad, NewContribution};
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
