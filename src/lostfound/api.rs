//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all lost-and-found operations, whatever the UI.
//!
//! It:
//! - **Dispatches** to the matching command function
//! - **Gates** admin-only operations on the session [`Role`]
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not print, prompt, or format. Command logic is tested in the
//! command modules; tests here cover dispatch and the role gate.

use crate::commands;
use crate::error::{LostFoundError, Result};
use crate::model::{NewReport, RecordId, ReportKind, Role};
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;
use log::warn;

/// The main API facade, generic over the storage backend.
pub struct LostFoundApi<S: DataStore> {
    store: S,
    role: Role,
}

impl LostFoundApi<InMemoryStore> {
    /// A fresh session with an empty in-memory store.
    pub fn in_memory(role: Role) -> Self {
        Self::new(InMemoryStore::new(), role)
    }
}

impl<S: DataStore> LostFoundApi<S> {
    pub fn new(store: S, role: Role) -> Self {
        Self { store, role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn report(&mut self, report: NewReport, kind: ReportKind) -> Result<commands::CmdResult> {
        commands::report::run(&mut self.store, report, kind)
    }

    pub fn report_lost(&mut self, report: NewReport) -> Result<commands::CmdResult> {
        self.report(report, ReportKind::Lost)
    }

    pub fn report_found(&mut self, report: NewReport) -> Result<commands::CmdResult> {
        self.report(report, ReportKind::Found)
    }

    pub fn list_all(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_by_name(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn find_potential_matches(&self) -> Result<commands::CmdResult> {
        commands::matches::run(&self.store)
    }

    pub fn mark_returned(&mut self, id: RecordId) -> Result<commands::CmdResult> {
        if !self.role.is_admin() {
            warn!("{} role tried to mark item {} returned", self.role, id);
            return Err(LostFoundError::PermissionDenied(
                "marking items returned requires the admin role".to_string(),
            ));
        }
        commands::returned::run(&mut self.store, id)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
