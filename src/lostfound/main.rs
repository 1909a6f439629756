//! # Lostfound CLI
//!
//! The binary is intentionally thin: the interactive client lives in
//! `cli/`, and this file only invokes `cli::run()` and handles process
//! termination.
//!
//! Running `lostfound` starts a menu session on stdin/stdout. Everything
//! reported during the session is held in memory and discarded on exit.
//!
//! ## Layout
//!
//! - `cli/setup.rs`: clap flags (`--role`, `--config`, `--no-color`, `--verbose`)
//! - `cli/commands.rs`: startup wiring and the menu session loop
//! - `cli/prompt.rs`: line reading and numeric input parsing
//! - `cli/print.rs`: menu, headers, records and colored messages
//!
//! Errors that reach `main` are I/O or startup failures. Domain failures
//! (unknown ids, malformed numbers, denied actions) are printed inside the
//! session and never end it.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
