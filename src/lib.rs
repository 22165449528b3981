//! # Boothbook - conference exhibitor notebook
//!
//! A small JSON API over a single SQLite `companies` table.
//!
//! Boothbook provides:
//! - Lenient reading of historical rows (mixed-type priority values, missing columns)
//! - API-shaped company records with derived rarity, hooks and short descriptions
//! - Search by name or booth and a priority filter tolerant of legacy yes/no spellings
//! - Aggregate statistics and schema diagnostics

pub mod company;
pub mod config;
pub mod query;
pub mod server;
pub mod storage;
pub mod ui;

use std::path::PathBuf;

// Re-exports for convenient access
pub use company::{Company, CompanyFields, CompanyRecord, RawPriority, Rarity};
pub use query::{CompanyFilter, PriorityFilter, SearchField};
pub use storage::CompanyStore;

/// Result type alias for Boothbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Boothbook operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database unavailable at {}: {reason}", path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Company not found: {0}")]
    NotFound(i64),

    #[error("{0}")]
    Validation(String),

    #[error("Table '{table}' does not exist")]
    SchemaMismatch { table: String, available: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}
