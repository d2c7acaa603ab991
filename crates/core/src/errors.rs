//! Core error types for the savings tracker.
//!
//! This module defines database-agnostic error types. Storage-specific
//! errors (from Diesel, SQLite, etc.) are converted to these types by the
//! storage layer.

use thiserror::Error;

use crate::goal::GoalError;
use crate::imaging::ImageStudioError;
use crate::ledger::LedgerError;
use crate::notify::NotifyError;
use crate::progress::CalculatorError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the savings tracker.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Goal error: {0}")]
    Goal(#[from] GoalError),

    #[error("Progress calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    #[error("Image studio error: {0}")]
    ImageStudio(#[from] ImageStudioError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// All details are carried as `String` so the storage layer can map its
/// own error types (Diesel, r2d2, SQLite) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    #[error("Database query failed: {0}")]
    QueryFailed(String),

    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Validation errors for values arriving from the presentation shell.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),
}
