//! # CLI Dispatch
//!
//! Turns parsed commands into API calls and prints what comes back.
//!
//! - `run()`: entry point used by `main.rs`
//! - `run_once()`: a single command given on the shell command line
//! - `run_session()`: the interactive loop, one command per input line
//! - `execute()`: shared per-command dispatch for both modes
//!
//! Errors returned by a command are worded through `render::error_message`
//! and never end a session. Only failures to load or save the book reach
//! `main`.

use super::render::{
    error_message, line_error_message, print_messages, print_result, render_config,
};
use super::setup::{get_grouped_help, parse_line, Cli, Commands};
use abook::api::{AbookApi, ConfigAction};
use abook::error::Result;
use abook::init::{initialize, resolve_data_dir};
use abook::store::DataStore;
use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log filter override, e.g. `ABOOK_LOG=abook=trace`.
const LOG_ENV: &str = "ABOOK_LOG";
const PROMPT: &str = "Enter a command: ";
const WELCOME: &str = "Welcome to the assistant bot!";
const GOODBYE: &str = "Good bye!";

/// How the process should exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    CommandFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub fn run() -> Result<Outcome> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = resolve_data_dir(cli.dir.as_deref())?;
    let mut api = initialize(&data_dir)?;

    match cli.command {
        Some(command) => run_once(&mut api, command),
        None => {
            run_session(&mut api, io::stdin().lock())?;
            Ok(Outcome::Success)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs one command and saves only if it changed the book.
fn run_once<S: DataStore>(api: &mut AbookApi<S>, command: Commands) -> Result<Outcome> {
    let outcome = match execute(api, command) {
        Ok(_) => Outcome::Success,
        Err(e) => {
            debug!(error = ?e, "command failed");
            print_error(&error_message(&e));
            Outcome::CommandFailed
        }
    };

    if api.is_dirty() {
        api.save()?;
    }
    Ok(outcome)
}

/// Reads commands from `input` until `close`, `exit` or end of input, then
/// saves the book.
fn run_session<S: DataStore, R: BufRead>(api: &mut AbookApi<S>, mut input: R) -> Result<()> {
    println!("{}", WELCOME.bold());
    println!("{}", "Type 'info' to see what I can do.".dimmed());

    let mut buf = Vec::new();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            println!();
            break;
        }
        // Undecodable bytes become U+FFFD and fail as an unknown command or
        // a bad argument instead of ending the session.
        let line = String::from_utf8_lossy(&buf);

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                print_error(&line_error_message(&e));
                continue;
            }
        };

        match execute(api, command) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                debug!(error = ?e, "command failed");
                print_error(&error_message(&e));
            }
        }
    }

    api.save()
}

fn execute<S: DataStore>(api: &mut AbookApi<S>, command: Commands) -> Result<Flow> {
    debug!(?command, "dispatching");
    match command {
        Commands::Add { name, phone } => print_result(&api.add_contact(&name, &phone)?),
        Commands::Change {
            name,
            old_phone,
            new_phone,
        } => print_result(&api.change_phone(&name, &old_phone, &new_phone)?),
        Commands::RemovePhone { name, phone } => print_result(&api.remove_phone(&name, &phone)?),
        Commands::Phone { name } => {
            let result = api.phones(&name)?;
            if !result.phones.is_empty() {
                println!("Phone numbers of {}:", name.bold());
            }
            print_result(&result);
        }
        Commands::Delete { name } => {
            let result = api.delete_contact(&name)?;
            print_messages(&result.messages);
        }
        Commands::Clear => print_result(&api.clear()?),
        Commands::All => print_result(&api.list_contacts()?),
        Commands::AddBirthday { name, birthday } => {
            print_result(&api.add_birthday(&name, &birthday)?)
        }
        Commands::ShowBirthday { name } => print_result(&api.show_birthday(&name)?),
        Commands::Birthdays => print_result(&api.upcoming_birthdays()?),
        Commands::Config { key, value } => handle_config(api, key, value)?,
        Commands::Hello => println!("Hi!"),
        Commands::Info => print!("{}", get_grouped_help()),
        Commands::Close => {
            println!("{}", GOODBYE);
            return Ok(Flow::Exit);
        }
        Commands::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

fn handle_config<S: DataStore>(
    api: &mut AbookApi<S>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_error(message: &str) {
    eprintln!("{}", message.red());
}
