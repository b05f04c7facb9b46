use crate::models::{Period, Statement, StatementSummary};

use thiserror::Error;

/// Faults raised by a storage backend. Absence and condition failure are not
/// faults; they are expressed in the operation return types.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

/// Outcome of a conditional write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    Stored,
    /// A record already exists for the key; nothing was written.
    ConditionFailed,
}

/// Field subset a scan projects into summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanProjection {
    /// Period fields only, used when resolving the latest sentinel.
    Period,
    /// Period fields plus the creation timestamp, used for listing.
    PeriodWithCreated,
}

/// Durable statement store keyed by `Period`.
///
/// Scans are finite and unordered: the sequence order is whatever the backend
/// happens to return, with no recency or pagination contract.
pub trait StatementStore: Send + Sync {
    /// Atomic check-and-set insert; fails the condition if a record already
    /// exists for `period`.
    fn put_if_absent(&self, period: Period, statement: Statement) -> Result<PutOutcome, StorageError>;

    fn get(&self, period: Period) -> Result<Option<Statement>, StorageError>;

    /// Removes the record for `period` and returns its prior contents.
    fn delete_returning(&self, period: Period) -> Result<Option<Statement>, StorageError>;

    /// Size-bounded scan of projected summaries; `None` means unbounded.
    fn scan(&self, projection: ScanProjection, limit: Option<usize>) -> Result<Vec<StatementSummary>, StorageError>;
}
