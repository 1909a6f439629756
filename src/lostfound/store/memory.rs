use super::DataStore;
use crate::error::{LostFoundError, Result};
use crate::model::{NewReport, Record, RecordId, ReportKind};
use chrono::Local;
use log::debug;

const FIRST_ID: RecordId = 1;

/// In-memory storage. Does NOT persist data.
pub struct InMemoryStore {
    records: Vec<Record>,
    next_id: RecordId,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: FIRST_ID,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

impl DataStore for InMemoryStore {
    fn insert(&mut self, report: NewReport, kind: ReportKind) -> Result<Record> {
        let id = self.next_id;
        self.next_id += 1;

        let record = Record::new(id, report, kind, Local::now().date_naive());
        debug!("stored record {} ({:?})", id, kind);
        self.records.push(record.clone());
        Ok(record)
    }

    fn get_record(&self, id: RecordId) -> Result<Record> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(LostFoundError::NotFound(id))
    }

    fn list_records(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn save_record(&mut self, record: &Record) -> Result<()> {
        let idx = self
            .position(record.id())
            .ok_or(LostFoundError::NotFound(record.id()))?;
        self.records[idx] = record.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_lost(mut self, name: &str) -> Self {
            let report = NewReport::new(name, "Reported lost", "Library");
            self.store.insert(report, ReportKind::Lost).unwrap();
            self
        }

        pub fn with_found(mut self, name: &str) -> Self {
            let report = NewReport::new(name, "Handed in", "Front desk");
            self.store.insert(report, ReportKind::Found).unwrap();
            self
        }

        pub fn with_returned(mut self, name: &str, kind: ReportKind) -> Self {
            let report = NewReport::new(name, "Already claimed", "Front desk");
            let mut record = self.store.insert(report, kind).unwrap();
            record.mark_returned();
            self.store.save_record(&record).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut store = InMemoryStore::new();
        let ids: Vec<RecordId> = (0..5)
            .map(|i| {
                store
                    .insert(NewReport::new(format!("Item {}", i), "", ""), ReportKind::Lost)
                    .unwrap()
                    .id()
            })
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn each_store_has_its_own_sequence() {
        let mut a = InMemoryStore::new();
        let mut b = InMemoryStore::new();
        a.insert(NewReport::new("A", "", ""), ReportKind::Lost).unwrap();
        a.insert(NewReport::new("B", "", ""), ReportKind::Lost).unwrap();

        let first_in_b = b.insert(NewReport::new("C", "", ""), ReportKind::Found).unwrap();
        assert_eq!(first_in_b.id(), 1);
    }

    #[test]
    fn insert_stamps_today() {
        let mut store = InMemoryStore::new();
        let record = store
            .insert(NewReport::new("Umbrella", "", ""), ReportKind::Found)
            .unwrap();
        assert_eq!(record.reported_on(), Local::now().date_naive());
    }

    #[test]
    fn list_is_a_copy() {
        let mut store = InMemoryStore::new();
        store.insert(NewReport::new("Keys", "", ""), ReportKind::Lost).unwrap();

        let mut listed = store.list_records().unwrap();
        listed[0].mark_returned();
        listed.clear();

        let again = store.list_records().unwrap();
        assert_eq!(again.len(), 1);
        assert_eq!(again[0].status(), Status::Lost);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = InMemoryStore::new();
        assert!(matches!(
            store.get_record(3),
            Err(LostFoundError::NotFound(3))
        ));
    }

    #[test]
    fn save_replaces_in_place() {
        let mut store = InMemoryStore::new();
        store.insert(NewReport::new("A", "", ""), ReportKind::Lost).unwrap();
        let mut b = store.insert(NewReport::new("B", "", ""), ReportKind::Found).unwrap();
        store.insert(NewReport::new("C", "", ""), ReportKind::Lost).unwrap();

        b.mark_returned();
        store.save_record(&b).unwrap();

        let names: Vec<String> = store
            .list_records()
            .unwrap()
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(store.get_record(2).unwrap().status(), Status::Returned);
    }
}
