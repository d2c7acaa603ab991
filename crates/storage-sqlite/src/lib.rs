//! SQLite storage implementation for the nestfund savings tracker.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `nestfund-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for the ledger and goal stores
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel
//! dependencies exist. The core crate is database-agnostic and works with
//! traits.
//!
//! ```text
//!       core (domain)
//!             │
//!             ▼
//!   storage-sqlite (this crate)
//!             │
//!             ▼
//!         SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod goal;
pub mod ledger;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

pub use goal::SqliteGoalRepository;
pub use ledger::SqliteLedgerRepository;

// Re-export from nestfund-core for convenience
pub use nestfund_core::errors::{DatabaseError, Error, Result};
