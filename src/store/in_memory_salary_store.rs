use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::SalaryStore;
use crate::error::HrResult;
use crate::models::{SalaryDraft, SalaryRecord};

#[derive(Default)]
struct SalaryTable {
    next_id: u64,
    records: BTreeMap<u64, SalaryRecord>,
}

/// In-memory implementation of SalaryStore using a BTreeMap keyed by id
///
/// Ids are assigned in increasing order, so iterating the map yields
/// snapshots in insertion order.
#[derive(Clone)]
pub struct InMemorySalaryStore {
    table: Arc<RwLock<SalaryTable>>,
}

impl InMemorySalaryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(SalaryTable::default())),
        }
    }

    /// Number of persisted snapshots.
    pub async fn count(&self) -> usize {
        self.table.read().await.records.len()
    }
}

impl Default for InMemorySalaryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SalaryStore for InMemorySalaryStore {
    async fn save(&self, draft: SalaryDraft) -> HrResult<SalaryRecord> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let record = draft.into_record(table.next_id);
        table.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: u64) -> HrResult<Option<SalaryRecord>> {
        let table = self.table.read().await;
        Ok(table.records.get(&id).cloned())
    }

    async fn find_by_employee(&self, employee_id: &str) -> HrResult<Vec<SalaryRecord>> {
        let table = self.table.read().await;
        Ok(table
            .records
            .values()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn delete_by_employee(&self, employee_id: &str) -> HrResult<usize> {
        let mut table = self.table.write().await;
        let before = table.records.len();
        table.records.retain(|_, r| r.employee_id != employee_id);
        Ok(before - table.records.len())
    }
}
