use std::{collections::BTreeMap, sync::RwLock};

use stmtdb_core::{Period, Statement, StatementSummary};

// Re-export core storage types so existing code using crate::storage::* still works
pub use stmtdb_core::storage::{PutOutcome, ScanProjection, StatementStore, StorageError};

/// In-process statement store.
///
/// Scan order is key order, which is a property of the map and not of
/// insertion time; callers treating it as recency get the same non-guarantee
/// a remote backend would give them.
pub struct InMemoryStore {
    records: RwLock<BTreeMap<Period, Statement>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }
}

fn project(period: Period, statement: &Statement, projection: ScanProjection) -> StatementSummary {
    let create_date_time = match projection {
        ScanProjection::Period => None,
        ScanProjection::PeriodWithCreated => statement.get("createDateTime").cloned(),
    };
    StatementSummary {
        year: period.year,
        month: period.month,
        create_date_time,
    }
}

impl StatementStore for InMemoryStore {
    fn put_if_absent(&self, period: Period, statement: Statement) -> Result<PutOutcome, StorageError> {
        let mut records = self.records.write().unwrap();
        if records.contains_key(&period) {
            return Ok(PutOutcome::ConditionFailed);
        }
        records.insert(period, statement);
        tracing::debug!(%period, "Statement stored");
        Ok(PutOutcome::Stored)
    }

    fn get(&self, period: Period) -> Result<Option<Statement>, StorageError> {
        let records = self.records.read().unwrap();
        Ok(records.get(&period).cloned())
    }

    fn delete_returning(&self, period: Period) -> Result<Option<Statement>, StorageError> {
        let mut records = self.records.write().unwrap();
        let previous = records.remove(&period);
        if previous.is_some() {
            tracing::debug!(%period, "Statement deleted");
        }
        Ok(previous)
    }

    fn scan(&self, projection: ScanProjection, limit: Option<usize>) -> Result<Vec<StatementSummary>, StorageError> {
        let records = self.records.read().unwrap();
        let summaries = records
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|(period, statement)| project(*period, statement, projection))
            .collect();
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn statement(year: i32, month: i32) -> Statement {
        serde_json::from_value(json!({
            "year": year,
            "month": month,
            "createDateTime": format!("{}-{:02}-01T00:00:00Z", year, month),
        }))
        .unwrap()
    }

    #[test]
    fn test_put_if_absent_is_conditional() {
        let store = InMemoryStore::new();
        let period = Period::new(2024, 3);

        let outcome = store.put_if_absent(period, statement(2024, 3)).unwrap();
        assert_eq!(outcome, PutOutcome::Stored);

        let outcome = store.put_if_absent(period, statement(2024, 3)).unwrap();
        assert_eq!(outcome, PutOutcome::ConditionFailed);

        assert!(store.get(period).unwrap().is_some());
    }

    #[test]
    fn test_delete_returns_previous() {
        let store = InMemoryStore::new();
        let period = Period::new(2024, 3);
        let stmt = statement(2024, 3);

        store.put_if_absent(period, stmt.clone()).unwrap();
        assert_eq!(store.delete_returning(period).unwrap(), Some(stmt));
        assert_eq!(store.delete_returning(period).unwrap(), None);
        assert_eq!(store.get(period).unwrap(), None);
    }

    #[test]
    fn test_scan_projection_and_limit() {
        let store = InMemoryStore::new();
        for month in 1..=5 {
            store
                .put_if_absent(Period::new(2024, month), statement(2024, month))
                .unwrap();
        }

        let bounded = store.scan(ScanProjection::PeriodWithCreated, Some(3)).unwrap();
        assert_eq!(bounded.len(), 3);
        assert!(bounded.iter().all(|s| s.create_date_time.is_some()));

        let periods = store.scan(ScanProjection::Period, None).unwrap();
        assert_eq!(periods.len(), 5);
        assert!(periods.iter().all(|s| s.create_date_time.is_none()));
    }
}
