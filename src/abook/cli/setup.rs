use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "abook",
    bin_name = "abook",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Command-line address book with birthday reminders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the address book and its config
    #[arg(short, long, global = true, value_name = "DIR", help_heading = "Options")]
    pub dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// One line typed into the interactive session.
#[derive(Parser, Debug)]
#[command(
    name = "abook",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct SessionLine {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add a contact, or one more phone to an existing contact
    Add { name: String, phone: String },

    /// Replace one of a contact's phone numbers
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Remove one of a contact's phone numbers
    RemovePhone { name: String, phone: String },

    /// Show all phone numbers of a contact
    Phone { name: String },

    /// Delete a contact
    Delete { name: String },

    /// Remove all contacts from the address book
    Clear,

    /// Show all saved contacts
    All,

    /// Add a birthday to a contact (DD.MM.YYYY)
    AddBirthday { name: String, birthday: String },

    /// Show the birthday of a contact
    ShowBirthday { name: String },

    /// List birthdays to celebrate in the coming days
    Birthdays,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, upcoming-days)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Just say hi
    Hello,

    /// Show this help message
    #[command(alias = "help")]
    Info,

    /// Save, say goodbye and leave
    Close,

    /// Save and leave
    Exit,
}

/// Why a session line could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    UnknownCommand(String),
    BadArguments(String),
    Help(String),
}

/// Parses one interactive line. Blank lines yield `Ok(None)`.
///
/// The command word is case-insensitive; arguments are split on whitespace
/// and passed through untouched.
pub fn parse_line(line: &str) -> Result<Option<Commands>, LineError> {
    let mut words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    let Some(first) = words.first_mut() else {
        return Ok(None);
    };
    *first = first.to_lowercase();
    let command_word = first.clone();

    match SessionLine::try_parse_from(&words) {
        Ok(parsed) => Ok(Some(parsed.command)),
        Err(e) => match e.kind() {
            ErrorKind::InvalidSubcommand => Err(LineError::UnknownCommand(command_word)),
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Err(LineError::Help(e.to_string()))
            }
            _ => Err(LineError::BadArguments(command_word)),
        },
    }
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Contacts,
    Birthdays,
    General,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Contacts => "Contacts Management:",
            CommandGroup::Birthdays => "Birthday Management:",
            CommandGroup::General => "General:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "change" | "remove-phone" | "phone" | "delete" | "clear" | "all" => {
                Some(CommandGroup::Contacts)
            }
            "add-birthday" | "show-birthday" | "birthdays" => Some(CommandGroup::Birthdays),
            "config" | "hello" | "info" | "close" | "exit" => Some(CommandGroup::General),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Contacts,
            CommandGroup::Birthdays,
            CommandGroup::General,
        ]
    }
}

/// `add <name> <phone>` style usage for a subcommand.
fn usage_line(cmd: &clap::Command) -> String {
    let mut line = cmd.get_name().to_string();
    for arg in cmd.get_positionals() {
        let value = arg.get_id().as_str().replace('_', "-");
        if arg.is_required_set() {
            line.push_str(&format!(" <{}>", value));
        } else {
            line.push_str(&format!(" [{}]", value));
        }
    }
    line
}

/// Returns the grouped help shown by `info` and at session start
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("abook {version}\n"));
    output.push_str("Command-line address book with birthday reminders\n");
    output.push('\n');
    output.push_str("Usage: abook [OPTIONS] [COMMAND]\n");
    output.push_str("       abook [OPTIONS]            (interactive session)\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<34} {}\n", usage_line(sc), about));
            }
        }
    }

    output.push('\n');
    output.push_str("Notes:\n");
    output.push_str("  Phone numbers must be exactly 10 digits (no spaces, plus, or dashes)\n");
    output.push_str("  Birthdays use the DD.MM.YYYY format (e.g. 28.09.1990)\n");

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -d, --dir <DIR>  Directory holding the address book and its config\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}
