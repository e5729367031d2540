//! Command-line address book.
//!
//! Contacts live in a JSON file in the data directory (`--dir`, else
//! `ABOOK_HOME`, else the platform data directory). Run with a command for a
//! single action, or without one for an interactive session.
//!
//! Development flows **inside-out**: the library (`lib.rs`) owns validation,
//! storage and the birthday window; this binary only parses, dispatches and
//! prints. Set `ABOOK_LOG=debug` (or pass `--verbose`) to trace what it does.

mod cli;

use cli::Outcome;

fn main() {
    match cli::run() {
        Ok(Outcome::Success) => {}
        Ok(Outcome::CommandFailed) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
