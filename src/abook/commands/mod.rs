use crate::book::UpcomingBirthday;
use crate::config::AbookConfig;
use crate::model::{Phone, Record};
use std::path::PathBuf;

pub mod add;
pub mod birthday;
pub mod birthdays;
pub mod change;
pub mod clear;
pub mod config;
pub mod delete;
pub mod list;
pub mod phone;

#[derive(Debug, Clone)]
pub struct AbookPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_records: Vec<Record>,
    pub phones: Vec<Phone>,
    pub upcoming: Vec<UpcomingBirthday>,
    pub config: Option<AbookConfig>,
    pub messages: Vec<CmdMessage>,
    /// Set when the book changed and needs saving
    pub mutated: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_phones(mut self, phones: Vec<Phone>) -> Self {
        self.phones = phones;
        self
    }

    pub fn with_upcoming(mut self, upcoming: Vec<UpcomingBirthday>) -> Self {
        self.upcoming = upcoming;
        self
    }

    pub fn with_config(mut self, config: AbookConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn mutated(mut self) -> Self {
        self.mutated = true;
        self
    }
}
