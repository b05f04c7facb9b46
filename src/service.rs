use std::sync::Arc;

use stmtdb_core::{
    storage::{PutOutcome, ScanProjection, StatementStore, StorageError},
    Period, Statement, StatementId, StatementSummary,
};

use thiserror::Error;

/// Number of summaries a listing returns when the caller sets no bound.
pub const DEFAULT_LIST_LIMIT: usize = 20;

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("{0}")]
    BadRequest(String),
    #[error("statement already exists for this period")]
    AlreadyExists,
    #[error("statement not found")]
    NotFound,
    #[error("no statements found")]
    NoStatements,
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StorageError),
}

/// The statement access layer: create-once, read by period or latest,
/// delete-with-recovery, bounded listing.
///
/// Holds no mutable state of its own; all correctness for concurrent creates
/// hangs on the store's conditional write. Failures are classified and
/// returned, never logged or retried here.
pub struct StatementService {
    store: Arc<dyn StatementStore>,
}

impl StatementService {
    pub fn new(store: Arc<dyn StatementStore>) -> Self {
        Self { store }
    }

    /// Persists a new statement, rejecting the write if one already exists
    /// for the payload's period.
    pub fn create(&self, statement: Statement) -> Result<(), AccessError> {
        if statement.is_empty() {
            return Err(AccessError::BadRequest("Invalid statement".to_string()));
        }
        let period = statement.period().ok_or_else(|| {
            AccessError::BadRequest(
                "statement payload must include numeric year and month".to_string(),
            )
        })?;

        match self.store.put_if_absent(period, statement)? {
            PutOutcome::Stored => Ok(()),
            PutOutcome::ConditionFailed => Err(AccessError::AlreadyExists),
        }
    }

    /// Returns up to `limit` statement summaries (default 20), in whatever
    /// order the store's scan happens to produce. An empty store is an empty
    /// list, not an error.
    pub fn list(&self, limit: Option<usize>) -> Result<Vec<StatementSummary>, AccessError> {
        let summaries = self.store.scan(
            ScanProjection::PeriodWithCreated,
            Some(limit.unwrap_or(DEFAULT_LIST_LIMIT)),
        )?;
        Ok(summaries)
    }

    /// Fetches the full statement for `identifier`, resolving the "0-0"
    /// sentinel to the last period an unbounded scan returns. An empty scan
    /// is `NoStatements`, distinct from a miss on an explicit period.
    ///
    /// That terminal-position pick is store-order-dependent, not true
    /// recency; the scan has no ordering contract.
    pub fn get(&self, identifier: &str) -> Result<Statement, AccessError> {
        let id: StatementId = identifier
            .parse()
            .map_err(|e: stmtdb_core::InvalidIdentifier| AccessError::BadRequest(e.to_string()))?;

        let period = match id {
            StatementId::Period(period) => period,
            StatementId::Latest => {
                let periods = self.store.scan(ScanProjection::Period, None)?;
                match periods.last() {
                    Some(summary) => summary.period(),
                    None => return Err(AccessError::NoStatements),
                }
            }
        };

        self.store.get(period)?.ok_or(AccessError::NotFound)
    }

    /// Removes the statement for `identifier` and returns its prior
    /// contents.
    ///
    /// The latest sentinel is not resolved here: "0-0" deletes the literal
    /// period (0, 0).
    pub fn delete(&self, identifier: &str) -> Result<Statement, AccessError> {
        let id: StatementId = identifier
            .parse()
            .map_err(|e: stmtdb_core::InvalidIdentifier| AccessError::BadRequest(e.to_string()))?;

        let period = match id {
            StatementId::Period(period) => period,
            StatementId::Latest => Period::new(0, 0),
        };

        self.store.delete_returning(period)?.ok_or(AccessError::NotFound)
    }

    /// Reserved for partial updates; currently succeeds without touching any
    /// record.
    pub fn update(&self, _identifier: &str) -> Result<(), AccessError> {
        Ok(())
    }
}
