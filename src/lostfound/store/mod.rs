//! # Storage Layer
//!
//! The [`DataStore`] trait is the only owner of records. Commands read and
//! write through it and never hold records beyond a single call.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a `Vec` of records plus the id sequence.
//!   Nothing is persisted; the data lives as long as the store.
//!
//! ## Identity
//!
//! Ids are assigned by the store on insert, starting at 1 for every new
//! store instance, and are never reused. There is no process-wide counter,
//! so two stores (or two tests) never see each other's ids.

use crate::error::Result;
use crate::model::{NewReport, Record, RecordId, ReportKind};

pub mod memory;

/// Abstract interface for record storage.
pub trait DataStore {
    /// Create a record with the next id and today's date, returning a copy.
    fn insert(&mut self, report: NewReport, kind: ReportKind) -> Result<Record>;

    /// Get a record by id
    fn get_record(&self, id: RecordId) -> Result<Record>;

    /// All records in insertion order
    fn list_records(&self) -> Result<Vec<Record>>;

    /// Replace the stored record that has the same id
    fn save_record(&mut self, record: &Record) -> Result<()>;
}
