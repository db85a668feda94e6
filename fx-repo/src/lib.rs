//! # FX Repository
//!
//! Concrete ledger implementation (adapter) for the converter.
//! This crate provides the SQLite adapter that implements the `ConversionLedger` port.

pub mod sqlite;

mod types;


pub use sqlite::SqliteLedger;

/// Build and initialize a ledger from a database URL.
///
/// This function:
/// 1. Creates the database file (and its directory) if missing
/// 2. Runs migrations to create the `history` table
/// 3. Returns a ready-to-use `SqliteLedger`
///
/// # Examples
///
/// ```ignore
/// let ledger = build_ledger("sqlite://conversions.db?mode=rwc").await?;
///
/// // Throwaway ledger for tests
/// let ledger = build_ledger("sqlite::memory:").await?;
/// ```
pub async fn build_ledger(database_url: &str) -> anyhow::Result<SqliteLedger> {
    SqliteLedger::new(database_url).await
}
