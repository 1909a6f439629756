use colored::Colorize;
use lostfound::api::{CmdMessage, MessageLevel};
use lostfound::model::{PotentialMatch, Record};
use std::io::{self, Write};

pub(super) const MENU_TITLE: &str = "Campus Lost and Found System";

const MENU_ENTRIES: [&str; 7] = [
    "Report a Lost Item",
    "Report a Found Item",
    "View All Reported Items",
    "Search for an Item by Name",
    "Find Potential Matches",
    "Mark an Item as Returned (Admin)",
    "Exit",
];

pub(super) fn print_menu<W: Write>(w: &mut W) -> io::Result<()> {
    print_header(w, MENU_TITLE)?;
    for (i, entry) in MENU_ENTRIES.iter().enumerate() {
        writeln!(w, "{}. {}", i + 1, entry)?;
    }
    print_prompt(w, "Enter your choice: ")
}

/// Writes a prompt without a newline and flushes so it shows before input.
pub(super) fn print_prompt<W: Write>(w: &mut W, text: &str) -> io::Result<()> {
    write!(w, "{}", text)?;
    w.flush()
}

pub(super) fn print_header<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", format!("--- {} ---", title).bold())
}

pub(super) fn print_messages<W: Write>(w: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(w, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(w, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(w, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(w, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// Records in the given order, or `empty_message` when there are none.
pub(super) fn print_records<W: Write>(
    w: &mut W,
    records: &[Record],
    empty_message: &str,
) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(w, "{}", empty_message);
    }
    for record in records {
        writeln!(w, "{}", record)?;
    }
    Ok(())
}

pub(super) fn print_matches<W: Write>(w: &mut W, matches: &[PotentialMatch]) -> io::Result<()> {
    if matches.is_empty() {
        return writeln!(w, "No potential matches found at this time.");
    }
    for pair in matches {
        writeln!(w, "{}", "Potential Match Found:".cyan())?;
        writeln!(w, "  Lost Item -> {}", pair.lost)?;
        writeln!(w, "  Found Item -> {}", pair.found)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lostfound::api::LostFoundApi;
    use lostfound::model::{NewReport, Role};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn menu_lists_seven_numbered_actions() {
        let out = render(|w| print_menu(w));
        assert!(out.starts_with("\n--- Campus Lost and Found System ---\n"));
        assert!(out.contains("1. Report a Lost Item\n"));
        assert!(out.contains("6. Mark an Item as Returned (Admin)\n"));
        assert!(out.contains("7. Exit\n"));
        assert!(out.ends_with("Enter your choice: "));
    }

    #[test]
    fn empty_records_print_the_empty_message() {
        let out = render(|w| print_records(w, &[], "No items have been reported yet."));
        assert_eq!(out, "No items have been reported yet.\n");
    }

    #[test]
    fn records_print_their_display_block() {
        let mut api = LostFoundApi::in_memory(Role::Admin);
        let result = api
            .report_lost(NewReport::new("Wallet", "Brown", "Library"))
            .unwrap();
        let out = render(|w| print_records(w, &result.affected_records, "none"));

        assert!(out.contains("ID: 1 | Item: Wallet | Status: Lost\n"));
        assert!(out.contains("Description: Brown\n"));
        assert!(out.contains("Location: Library | Date Reported: "));
    }

    #[test]
    fn matches_print_both_sides() {
        let mut api = LostFoundApi::in_memory(Role::Admin);
        api.report_lost(NewReport::new("Keys", "", "Gym")).unwrap();
        api.report_found(NewReport::new("keys", "", "Lab")).unwrap();
        let result = api.find_potential_matches().unwrap();

        let out = render(|w| print_matches(w, &result.matches));
        assert!(out.contains("Potential Match Found:\n"));
        assert!(out.contains("  Lost Item -> ----"));
        assert!(out.contains("  Found Item -> ----"));
        assert!(out.contains("ID: 2 | Item: keys | Status: Found"));
    }

    #[test]
    fn no_matches_message() {
        let out = render(|w| print_matches(w, &[]));
        assert_eq!(out, "No potential matches found at this time.\n");
    }

    #[test]
    fn messages_keep_their_text() {
        let messages = vec![
            CmdMessage::success("done"),
            CmdMessage::error("failed"),
            CmdMessage::info("fyi"),
            CmdMessage::warning("careful"),
        ];
        let out = render(|w| print_messages(w, &messages));
        assert_eq!(out, "done\nfailed\nfyi\ncareful\n");
    }
}
