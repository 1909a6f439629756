use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;
use log::debug;

/// Exact, case-insensitive name lookup. No substring or fuzzy matching.
pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    let hits: Vec<_> = store
        .list_records()?
        .into_iter()
        .filter(|r| r.name_matches(query))
        .collect();

    debug!("search {:?} matched {} record(s)", query, hits.len());
    Ok(CmdResult::default().with_listed_records(hits))
}
