//! Naive name matcher between lost and found records.
//!
//! Every `Lost` record is compared with every `Found` record over the whole
//! collection, lost loop outside and found loop inside, both in storage
//! order. Each pair with equal names (case-insensitive) is emitted. There is
//! no assignment step: one record can appear in many pairs, and nothing is
//! consumed or deduplicated. `Returned` records take part on neither side.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{PotentialMatch, Status};
use crate::store::DataStore;
use log::debug;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let records = store.list_records()?;

    let mut pairs = Vec::new();
    for lost in records.iter().filter(|r| r.status() == Status::Lost) {
        for found in records.iter().filter(|r| r.status() == Status::Found) {
            if found.name_matches(lost.name()) {
                pairs.push(PotentialMatch {
                    lost: lost.clone(),
                    found: found.clone(),
                });
            }
        }
    }

    debug!(
        "matcher compared {} record(s), {} pair(s)",
        records.len(),
        pairs.len()
    );
    Ok(CmdResult::default().with_matches(pairs))
}
