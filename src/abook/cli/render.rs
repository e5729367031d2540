use super::setup::LineError;
use abook::api::{CmdMessage, CmdResult, MessageLevel};
use abook::book::UpcomingBirthday;
use abook::config::{AbookConfig, CONFIG_KEYS};
use abook::error::AbookError;
use abook::model::{Phone, Record};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const DEFAULT_ERROR_MESSAGE: &str =
    "Make sure you enter correct command and arguments (run 'info' command if you have any doubts).";
const NO_BIRTHDAY: &str = "-";
const BIRTHDAY_WIDTH: usize = 10;

/// User-facing wording for every error kind.
pub(super) fn error_message(err: &AbookError) -> String {
    match err {
        AbookError::EmptyName => "Contact name cannot be empty.".to_string(),
        AbookError::RecordNotFound(_) => "No such user found. Make sure you enter name of \
             existing contact. Run 'all' command to see all contacts you have."
            .to_string(),
        AbookError::InvalidPhoneFormat(_) => "Invalid format of phone number. Make sure you \
             enter number with exactly 10 symbols, and it contains only digits."
            .to_string(),
        AbookError::InvalidBirthdayFormat(_) => {
            "Invalid format of birthday. Make sure you use DD.MM.YYYY format.".to_string()
        }
        AbookError::PhoneNotFound(_) => "No such phone number found. Make sure you enter \
             existing phone number, which was added to contact before."
            .to_string(),
        AbookError::Config(msg) => {
            format!("{}. {}", msg, DEFAULT_ERROR_MESSAGE)
        }
        AbookError::Io(_) | AbookError::Serialization(_) => {
            format!("Unexpected error. {}", DEFAULT_ERROR_MESSAGE)
        }
    }
}

pub(super) fn line_error_message(err: &LineError) -> String {
    match err {
        LineError::UnknownCommand(_) => "Invalid command.".to_string(),
        LineError::BadArguments(command) => format!(
            "Wrong arguments for '{}'. {}",
            command, DEFAULT_ERROR_MESSAGE
        ),
        LineError::Help(text) => text.trim_end().to_string(),
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Prints whatever a command produced: tables first, then messages.
pub(super) fn print_result(result: &CmdResult) {
    if !result.listed_records.is_empty() {
        print!("{}", render_contacts(&result.listed_records));
    }
    if !result.phones.is_empty() {
        print!("{}", render_phones(&result.phones));
    }
    if !result.upcoming.is_empty() {
        print!("{}", render_upcoming(&result.upcoming));
    }
    print_messages(&result.messages);
}

pub(super) fn render_contacts(records: &[Record]) -> String {
    let name_width = column_width(records.iter().map(|r| r.name().as_str()));
    let mut output = String::new();
    for record in records {
        let phones = record
            .phones()
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let birthday = record
            .birthday()
            .map(|b| b.to_string())
            .unwrap_or_else(|| NO_BIRTHDAY.to_string());
        output.push_str(&format!(
            "  {}  {}  {}\n",
            pad_to_width(record.name().as_str(), name_width).bold(),
            pad_to_width(&birthday, BIRTHDAY_WIDTH).dimmed(),
            phones
        ));
    }
    output
}

pub(super) fn render_phones(phones: &[Phone]) -> String {
    phones
        .iter()
        .enumerate()
        .map(|(i, phone)| format!("  {}. {}\n", i + 1, phone))
        .collect()
}

pub(super) fn render_upcoming(upcoming: &[UpcomingBirthday]) -> String {
    let name_width = column_width(upcoming.iter().map(|u| u.record.name().as_str()));
    let mut output = format!("{}\n", "Upcoming birthdays:".bold());
    for entry in upcoming {
        output.push_str(&format!(
            "  {}  {}\n",
            pad_to_width(entry.record.name().as_str(), name_width),
            entry.congratulation_date.yellow()
        ));
    }
    output
}

pub(super) fn render_config(config: &AbookConfig) -> String {
    CONFIG_KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn no_color() {
        colored::control::set_override(false);
    }

    fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        if let Some(raw) = birthday {
            record.add_birthday(raw).unwrap();
        }
        record
    }

    #[test]
    fn every_domain_error_has_its_own_message() {
        let kinds = [
            AbookError::EmptyName,
            AbookError::InvalidPhoneFormat(String::new()),
            AbookError::InvalidBirthdayFormat(String::new()),
            AbookError::RecordNotFound(String::new()),
            AbookError::PhoneNotFound(String::new()),
        ];
        let messages: std::collections::HashSet<_> = kinds.iter().map(error_message).collect();
        assert_eq!(messages.len(), kinds.len());
        assert!(error_message(&AbookError::RecordNotFound("x".into())).starts_with("No such user"));
    }

    #[test]
    fn unexpected_errors_get_a_generic_message() {
        let err = AbookError::Io(std::io::Error::other("disk on fire"));
        assert!(error_message(&err).starts_with("Unexpected error."));
    }

    #[test]
    fn config_errors_keep_their_detail() {
        let err = AbookError::Config("Could not determine data directory".into());
        assert!(error_message(&err).starts_with("Could not determine data directory. Make sure"));
    }

    #[test]
    fn line_errors() {
        assert_eq!(
            line_error_message(&LineError::UnknownCommand("fly".into())),
            "Invalid command."
        );
        assert!(line_error_message(&LineError::BadArguments("add".into())).contains("'add'"));
    }

    #[test]
    fn contacts_table_aligns_names() {
        no_color();
        let records = vec![
            record("Ann", &["1111111111", "2222222222"], Some("08.06.1990")),
            record("Bartholomew", &[], None),
        ];

        let output = render_contacts(&records);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(
            lines[0],
            "  Ann          08.06.1990  1111111111, 2222222222"
        );
        assert_eq!(lines[1].trim_end(), "  Bartholomew  -");
    }

    #[test]
    fn contacts_table_uses_display_width() {
        no_color();
        let records = vec![record("李雷", &["1111111111"], None), record("Ann", &[], None)];
        let output = render_contacts(&records);
        let lines: Vec<_> = output.lines().collect();
        assert!(lines[0].starts_with("  李雷  -"));
        assert!(lines[1].starts_with("  Ann   -"));
    }

    #[test]
    fn phones_are_numbered() {
        let phones = vec![
            Phone::new("1111111111").unwrap(),
            Phone::new("2222222222").unwrap(),
        ];
        assert_eq!(
            render_phones(&phones),
            "  1. 1111111111\n  2. 2222222222\n"
        );
    }

    #[test]
    fn upcoming_lists_dates() {
        no_color();
        let ann = record("Ann", &[], Some("12.06.1990"));
        let mut book = abook::book::AddressBook::new();
        book.add_record(ann);
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        let output = render_upcoming(&book.upcoming_birthdays_at(today, 7));
        assert_eq!(output, "Upcoming birthdays:\n  Ann  2024.06.12\n");
    }

    #[test]
    fn config_lists_every_key() {
        let output = render_config(&AbookConfig::default());
        assert_eq!(output, "data-file = addressbook.json\nupcoming-days = 7\n");
    }
}
