//! # CLI Behavior
//!
//! This is **one possible UI client** for abook, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting.
//!
//! For the overall architecture, see the library documentation in `lib.rs`.
//!
//! ## Two Modes
//!
//! - `abook <command> [args]` runs one command and saves if the book changed.
//!   A command that fails exits with status 1.
//! - `abook` with no command starts the interactive session: a prompt, one
//!   command per line, until `close`, `exit` or end of input. The book is
//!   saved when the session ends.
//!
//! Command words are case-insensitive in the session (`ADD` works like
//! `add`). Arguments are whitespace-separated and kept as typed.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch for both modes
//! - `render`: Output formatting (tables, colors, error wording)
//! - `setup`: Argument parsing via clap, help text

mod commands;
mod render;
mod setup;

pub use commands::{run, Outcome};
