//! Conversion ledger port trait.
//!
//! Adapters (SQLite, in-memory fakes) implement this trait.

use crate::domain::{ConversionRecord, RecordId};
use crate::error::LedgerError;

/// Bounded, persistent history of conversions.
///
/// After every `insert` the ledger holds at most
/// [`LEDGER_CAPACITY`](crate::LEDGER_CAPACITY) records: the ones with the
/// highest ids. Insert and trim MUST be applied atomically so concurrent
/// callers never observe more than the capacity.
#[async_trait::async_trait]
pub trait ConversionLedger: Send + Sync + 'static {
    /// Appends a record and evicts everything but the newest entries.
    async fn insert(&self, record: &ConversionRecord) -> Result<RecordId, LedgerError>;

    /// Returns the retained records, newest first.
    async fn list_recent(&self) -> Result<Vec<ConversionRecord>, LedgerError>;
}
