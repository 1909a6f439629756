use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NewReport, ReportKind};
use crate::store::DataStore;
use log::warn;

pub fn run<S: DataStore>(store: &mut S, report: NewReport, kind: ReportKind) -> Result<CmdResult> {
    let blank_name = report.name.trim().is_empty();
    let record = store.insert(report, kind)?;

    let mut result = CmdResult::default();
    if blank_name {
        warn!("record {} was reported without a name", record.id());
        result.add_message(CmdMessage::warning(
            "Item has no name; it will only match searches for an empty name.",
        ));
    }
    result.add_message(CmdMessage::success(format!(
        "Successfully reported! The new Item ID is: {}",
        record.id()
    )));

    Ok(result.with_affected_records(vec![record]))
}
