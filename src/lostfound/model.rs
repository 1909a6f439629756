use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type RecordId = u32;

const RECORD_RULE: &str = "------------------------------------------";

/// Lifecycle state of a record. Records start as `Lost` or `Found` and can
/// only move forward to `Returned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Lost,
    Found,
    Returned,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Lost => "Lost",
            Status::Found => "Found",
            Status::Returned => "Returned",
        };
        f.write_str(label)
    }
}

/// The status a reporter may declare. `Returned` is not reportable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Lost,
    Found,
}

impl ReportKind {
    /// Lowercase verb used in prompts ("where the item was lost").
    pub fn verb(&self) -> &'static str {
        match self {
            ReportKind::Lost => "lost",
            ReportKind::Found => "found",
        }
    }
}

impl From<ReportKind> for Status {
    fn from(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Lost => Status::Lost,
            ReportKind::Found => Status::Found,
        }
    }
}

/// Session privilege level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Regular,
    #[default]
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Regular => f.write_str("regular"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

/// Raw field values collected from a reporter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewReport {
    pub name: String,
    pub description: String,
    pub location: String,
}

impl NewReport {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            location: location.into(),
        }
    }
}

/// One lost or found report.
///
/// Everything except `status` is fixed at creation. Records are only built
/// by a store, which owns id assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    name: String,
    description: String,
    location: String,
    reported_on: NaiveDate,
    status: Status,
}

impl Record {
    pub(crate) fn new(
        id: RecordId,
        report: NewReport,
        kind: ReportKind,
        reported_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: report.name,
            description: report.description,
            location: report.location,
            reported_on,
            status: kind.into(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn reported_on(&self) -> NaiveDate {
        self.reported_on
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn mark_returned(&mut self) {
        self.status = Status::Returned;
    }

    pub fn name_matches(&self, query: &str) -> bool {
        names_match(&self.name, query)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RECORD_RULE)?;
        writeln!(
            f,
            "ID: {} | Item: {} | Status: {}",
            self.id, self.name, self.status
        )?;
        writeln!(f, "Description: {}", self.description)?;
        write!(
            f,
            "Location: {} | Date Reported: {}",
            self.location,
            self.reported_on.format("%Y-%m-%d")
        )
    }
}

/// Case-insensitive name equality, char by char, without locale rules.
///
/// Two chars are equal when they are identical, when their uppercase forms
/// are, or when the lowercase forms of those uppercase forms are. Only
/// single-char mappings are used, so `ς`, `σ` and `Σ` all agree and `İ`
/// equals `i`, while `ß` never expands to `SS`.
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| chars_match(x, y))
}

fn chars_match(x: char, y: char) -> bool {
    if x == y {
        return true;
    }
    let (ux, uy) = (simple_upper(x), simple_upper(y));
    ux == uy || simple_lower(ux) == simple_lower(uy)
}

/// Uppercase when it is a single char, otherwise the char itself.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Lowercase base char. The only multi-char lowercase mapping (`İ`) starts
/// with its single-char form.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// A lost record paired with a found record of the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotentialMatch {
    pub lost: Record,
    pub found: Record,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: ReportKind) -> Record {
        let date = NaiveDate::from_ymd_opt(2024, 9, 3).unwrap();
        Record::new(
            7,
            NewReport::new("Wallet", "Brown leather", "Library"),
            kind,
            date,
        )
    }

    #[test]
    fn report_kind_maps_to_status() {
        assert_eq!(sample(ReportKind::Lost).status(), Status::Lost);
        assert_eq!(sample(ReportKind::Found).status(), Status::Found);
    }

    #[test]
    fn mark_returned_is_terminal() {
        let mut record = sample(ReportKind::Found);
        record.mark_returned();
        assert_eq!(record.status(), Status::Returned);
        record.mark_returned();
        assert_eq!(record.status(), Status::Returned);
    }

    #[test]
    fn display_renders_all_fields() {
        let rendered = sample(ReportKind::Lost).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], RECORD_RULE);
        assert_eq!(lines[1], "ID: 7 | Item: Wallet | Status: Lost");
        assert_eq!(lines[2], "Description: Brown leather");
        assert_eq!(lines[3], "Location: Library | Date Reported: 2024-09-03");
    }

    #[test]
    fn names_match_ignores_case_only() {
        assert!(names_match("Wallet", "wALLET"));
        assert!(names_match("Ünïcode", "üNÏCODE"));
        assert!(names_match("", ""));
        assert!(!names_match("Wallet", "Wallets"));
        assert!(!names_match("Wallet", " Wallet"));
    }

    #[test]
    fn names_match_sigma_forms_and_dotted_i() {
        assert!(names_match("ΟΔΟΣ", "οδος"));
        assert!(names_match("οδος", "ΟΔΟΣ"));
        assert!(names_match("ΟΔΟΣ", "οδοσ"));
        assert!(names_match("İ", "i"));
        assert!(names_match("i", "İ"));
        assert!(names_match("İstanbul", "istanbul"));
        assert!(!names_match("Straße", "STRASSE"));
        assert!(!names_match("İ", "j"));
    }

    #[test]
    fn role_defaults_to_admin() {
        assert_eq!(Role::default(), Role::Admin);
        assert!(!Role::Regular.is_admin());
    }

    #[test]
    fn role_deserializes_lowercase() {
        let role: Role = serde_json::from_str("\"regular\"").unwrap();
        assert_eq!(role, Role::Regular);
    }
}
