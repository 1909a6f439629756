//! Startup wiring and the interactive menu session.
//!
//! `run()` parses flags, sets up logging and color, resolves the config and
//! hands stdin/stdout to a [`Session`]. The session owns the API (and so the
//! store) for its whole lifetime; records only leave it as copies inside a
//! `CmdResult` for rendering.

use super::print::{
    print_header, print_matches, print_menu, print_messages, print_prompt, print_records,
};
use super::prompt::{parse_id, parse_menu, IdInput, LineReader, MenuChoice, MenuInput};
use super::setup::Cli;
use clap::Parser;
use lostfound::api::{CmdMessage, LostFoundApi};
use lostfound::config::{ColorMode, LostFoundConfig};
use lostfound::error::{LostFoundError, Result};
use lostfound::model::{NewReport, ReportKind, Role};
use lostfound::store::DataStore;
use log::debug;
use std::io::{self, BufRead, Write};

const FAREWELL: &str = "Thank you for using the Campus Lost and Found System!";

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = LostFoundConfig::discover(cli.config.as_deref())?;
    let color = if cli.no_color {
        ColorMode::Never
    } else {
        config.color
    };
    apply_color(color);

    let role = cli.role.map(Role::from).unwrap_or(config.role);
    debug!("starting session as {}", role);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        LostFoundApi::in_memory(role),
        stdin.lock(),
        stdout.lock(),
    );
    session.run()
}

fn apply_color(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
    /// Input ended while a prompt was waiting.
    Closed,
}

/// One interactive menu conversation over any line input and any output.
pub struct Session<S: DataStore, R: BufRead, W: Write> {
    api: LostFoundApi<S>,
    input: LineReader<R>,
    out: W,
}

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(api: LostFoundApi<S>, input: R, out: W) -> Self {
        Self {
            api,
            input: LineReader::new(input),
            out,
        }
    }

    /// Runs until the user exits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            print_menu(&mut self.out)?;
            let Some(line) = self.input.next_answer()? else {
                self.close_prompt()?;
                break;
            };

            let flow = match parse_menu(&line) {
                Ok(MenuInput::Choice(choice)) => self.dispatch(choice)?,
                Ok(MenuInput::OutOfRange(n)) => {
                    debug!("menu choice {} out of range", n);
                    self.say(CmdMessage::error(
                        "Invalid choice. Please enter a number between 1 and 7.",
                    ))?;
                    Flow::Continue
                }
                Err(LostFoundError::MalformedInput(raw)) => {
                    debug!("discarding malformed menu input {:?}", raw);
                    self.say(CmdMessage::error("Invalid input. Please enter a number."))?;
                    Flow::Continue
                }
                Err(e) => return Err(e),
            };

            match flow {
                Flow::Continue => {}
                Flow::Exit => break,
                Flow::Closed => {
                    self.close_prompt()?;
                    break;
                }
            }
        }

        writeln!(self.out, "{}", FAREWELL)?;
        self.out.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::ReportLost => self.handle_report(ReportKind::Lost),
            MenuChoice::ReportFound => self.handle_report(ReportKind::Found),
            MenuChoice::ViewAll => self.handle_view_all(),
            MenuChoice::Search => self.handle_search(),
            MenuChoice::FindMatches => self.handle_matches(),
            MenuChoice::MarkReturned => self.handle_mark_returned(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn handle_report(&mut self, kind: ReportKind) -> Result<Flow> {
        let Some(name) = self.ask("Enter item name: ")? else {
            return Ok(Flow::Closed);
        };
        let Some(description) = self.ask("Enter a brief description: ")? else {
            return Ok(Flow::Closed);
        };
        let location_prompt = format!("Enter the location where the item was {}: ", kind.verb());
        let Some(location) = self.ask(&location_prompt)? else {
            return Ok(Flow::Closed);
        };

        let result = self
            .api
            .report(NewReport::new(name, description, location), kind)?;
        writeln!(self.out)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn handle_view_all(&mut self) -> Result<Flow> {
        let result = self.api.list_all()?;
        print_header(&mut self.out, "All Reported Items")?;
        print_records(
            &mut self.out,
            &result.listed_records,
            "No items have been reported yet.",
        )?;
        Ok(Flow::Continue)
    }

    fn handle_search(&mut self) -> Result<Flow> {
        let Some(query) = self.ask("Enter the name of the item to search for: ")? else {
            return Ok(Flow::Closed);
        };

        let result = self.api.search_by_name(&query)?;
        print_header(&mut self.out, "Search Results")?;
        print_records(
            &mut self.out,
            &result.listed_records,
            "No items found with that name.",
        )?;
        Ok(Flow::Continue)
    }

    fn handle_matches(&mut self) -> Result<Flow> {
        let result = self.api.find_potential_matches()?;
        print_header(&mut self.out, "Potential Matches")?;
        print_matches(&mut self.out, &result.matches)?;
        Ok(Flow::Continue)
    }

    fn handle_mark_returned(&mut self) -> Result<Flow> {
        print_prompt(&mut self.out, "Enter the ID of the item to mark as returned: ")?;
        let Some(line) = self.input.next_answer()? else {
            return Ok(Flow::Closed);
        };

        let message = match parse_id(&line) {
            Ok(IdInput::Id(id)) => match self.api.mark_returned(id) {
                Ok(result) => {
                    print_messages(&mut self.out, &result.messages)?;
                    return Ok(Flow::Continue);
                }
                Err(e) => match recoverable_message(&e) {
                    Some(message) => message,
                    None => return Err(e),
                },
            },
            Ok(IdInput::Unknown(n)) => CmdMessage::error(format!("Item with ID {} not found.", n)),
            Err(_) => CmdMessage::error("Invalid ID. Please enter a number."),
        };

        self.say(message)?;
        Ok(Flow::Continue)
    }

    /// Prompts and reads one verbatim line. `None` when the input has ended.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        print_prompt(&mut self.out, prompt)?;
        self.input.next_line()
    }

    /// Ends the dangling prompt line when the input runs out under it.
    fn close_prompt(&mut self) -> Result<()> {
        debug!("input closed");
        writeln!(self.out)?;
        Ok(())
    }

    fn say(&mut self, message: CmdMessage) -> Result<()> {
        print_messages(&mut self.out, &[message])?;
        Ok(())
    }
}

/// User-facing text for domain errors that must not end the session.
fn recoverable_message(err: &LostFoundError) -> Option<CmdMessage> {
    if !err.is_recoverable() {
        return None;
    }
    let content = match err {
        LostFoundError::PermissionDenied(_) => {
            "Only administrators can mark items as returned.".to_string()
        }
        _ => err.to_string(),
    };
    Some(CmdMessage::error(content))
}
