use lostfound::error::{LostFoundError, Result};
use lostfound::model::RecordId;
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MenuChoice {
    ReportLost,
    ReportFound,
    ViewAll,
    Search,
    FindMatches,
    MarkReturned,
    Exit,
}

impl MenuChoice {
    fn from_number(n: i32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::ReportLost),
            2 => Some(MenuChoice::ReportFound),
            3 => Some(MenuChoice::ViewAll),
            4 => Some(MenuChoice::Search),
            5 => Some(MenuChoice::FindMatches),
            6 => Some(MenuChoice::MarkReturned),
            7 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MenuInput {
    Choice(MenuChoice),
    OutOfRange(i32),
}

/// A numeric id answer. Numbers no record can carry (zero, negative) are
/// kept so they can be reported as not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum IdInput {
    Id(RecordId),
    Unknown(i32),
}

pub(super) fn parse_menu(line: &str) -> Result<MenuInput> {
    let n = parse_number(line)?;
    Ok(MenuChoice::from_number(n)
        .map(MenuInput::Choice)
        .unwrap_or(MenuInput::OutOfRange(n)))
}

pub(super) fn parse_id(line: &str) -> Result<IdInput> {
    let n = parse_number(line)?;
    Ok(match RecordId::try_from(n) {
        Ok(id) if id > 0 => IdInput::Id(id),
        _ => IdInput::Unknown(n),
    })
}

/// Reads the first whitespace-separated token as a 32-bit integer; the rest
/// of the line is ignored. Tokens outside the `i32` range are malformed.
fn parse_number(line: &str) -> Result<i32> {
    let token = line.split_whitespace().next().unwrap_or("");
    token
        .parse()
        .map_err(|_| LostFoundError::MalformedInput(line.trim().to_string()))
}

/// Line-oriented reader over the session input.
pub(super) struct LineReader<R: BufRead> {
    inner: R,
}

impl<R: BufRead> LineReader<R> {
    pub(super) fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Next line without its terminator, verbatim otherwise. `None` at end of input.
    pub(super) fn next_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.inner.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }

    /// Next line with any non-whitespace content. Blank lines are skipped.
    pub(super) fn next_answer(&mut self) -> Result<Option<String>> {
        while let Some(line) = self.next_line()? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }
}
