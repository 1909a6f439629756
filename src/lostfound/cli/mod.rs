//! # CLI Layer
//!
//! This module is **one possible UI client** for lostfound. It is the only
//! place that reads stdin, writes stdout, or decides exit codes.
//!
//! The session is generic over its input (`BufRead`) and output (`Write`),
//! so tests drive whole menu conversations from a byte string and inspect
//! the transcript.

mod commands;
mod print;
mod prompt;
pub mod setup;

pub use commands::run;
