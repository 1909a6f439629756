use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{RecordId, Status};
use crate::store::DataStore;
use log::info;

pub fn run<S: DataStore>(store: &mut S, id: RecordId) -> Result<CmdResult> {
    let mut record = store.get_record(id)?;
    let previous = record.status();

    record.mark_returned();
    store.save_record(&record)?;

    if previous != Status::Returned {
        info!("record {} moved from {} to {}", id, previous, record.status());
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item ID {} has been marked as Returned.",
        id
    )));
    Ok(result.with_affected_records(vec![record]))
}
