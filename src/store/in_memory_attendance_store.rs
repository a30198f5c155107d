use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::AttendanceStore;
use crate::error::{HrError, HrResult};
use crate::models::{AttendanceRecord, AttendanceStatus, NewAttendance};

#[derive(Default)]
struct AttendanceTable {
    next_id: u64,
    records: BTreeMap<u64, AttendanceRecord>,
}

impl AttendanceTable {
    fn for_employee_in_range<'a>(
        &'a self,
        employee_id: &'a str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &'a AttendanceRecord> + 'a {
        self.records
            .values()
            .filter(move |r| r.employee_id == employee_id && r.date >= start && r.date <= end)
    }
}

fn sorted_by_date(mut records: Vec<AttendanceRecord>) -> Vec<AttendanceRecord> {
    records.sort_by_key(|r| (r.date, r.id));
    records
}

/// In-memory implementation of AttendanceStore using a BTreeMap keyed by id
#[derive(Clone)]
pub struct InMemoryAttendanceStore {
    table: Arc<RwLock<AttendanceTable>>,
}

impl InMemoryAttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(AttendanceTable::default())),
        }
    }
}

impl Default for InMemoryAttendanceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AttendanceStore for InMemoryAttendanceStore {
    async fn insert(&self, attendance: NewAttendance) -> HrResult<AttendanceRecord> {
        let mut table = self.table.write().await;

        let duplicate = table
            .records
            .values()
            .any(|r| r.employee_id == attendance.employee_id && r.date == attendance.date);
        if duplicate {
            return Err(HrError::AttendanceAlreadyExists {
                employee_id: attendance.employee_id,
                date: attendance.date,
            });
        }

        table.next_id += 1;
        let record = AttendanceRecord {
            id: table.next_id,
            overtime_hours: attendance.effective_overtime_hours(),
            employee_id: attendance.employee_id,
            date: attendance.date,
            status: attendance.status,
        };
        table.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: AttendanceRecord) -> HrResult<AttendanceRecord> {
        let mut table = self.table.write().await;
        match table.records.get_mut(&record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(record)
            }
            None => Err(HrError::AttendanceNotFound {
                reference: format!("id {}", record.id),
            }),
        }
    }

    async fn find_by_id(&self, id: u64) -> HrResult<Option<AttendanceRecord>> {
        let table = self.table.read().await;
        Ok(table.records.get(&id).cloned())
    }

    async fn find_by_employee_and_date(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> HrResult<Option<AttendanceRecord>> {
        let table = self.table.read().await;
        Ok(table
            .records
            .values()
            .find(|r| r.employee_id == employee_id && r.date == date)
            .cloned())
    }

    async fn find_by_date(&self, date: NaiveDate) -> HrResult<Vec<AttendanceRecord>> {
        let table = self.table.read().await;
        Ok(table
            .records
            .values()
            .filter(|r| r.date == date)
            .cloned()
            .collect())
    }

    async fn find_by_date_and_status(
        &self,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> HrResult<Vec<AttendanceRecord>> {
        let table = self.table.read().await;
        Ok(table
            .records
            .values()
            .filter(|r| r.date == date && r.status == status)
            .cloned()
            .collect())
    }

    async fn find_by_employee_and_range(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> HrResult<Vec<AttendanceRecord>> {
        let table = self.table.read().await;
        let records = table
            .for_employee_in_range(employee_id, start, end)
            .cloned()
            .collect();
        Ok(sorted_by_date(records))
    }

    async fn find_by_employee_range_and_status(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        status: AttendanceStatus,
    ) -> HrResult<Vec<AttendanceRecord>> {
        let table = self.table.read().await;
        let records = table
            .for_employee_in_range(employee_id, start, end)
            .filter(|r| r.status == status)
            .cloned()
            .collect();
        Ok(sorted_by_date(records))
    }

    async fn delete_by_employee(&self, employee_id: &str) -> HrResult<usize> {
        let mut table = self.table.write().await;
        let before = table.records.len();
        table.records.retain(|_, r| r.employee_id != employee_id);
        Ok(before - table.records.len())
    }
}
