use crate::book::DEFAULT_UPCOMING_DAYS;
use crate::error::{AbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "addressbook.json";
const MAX_UPCOMING_DAYS: i64 = 366;

pub const CONFIG_KEYS: &[&str] = &["data-file", "upcoming-days"];

/// Configuration for abook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbookConfig {
    /// Address book file, relative to the data directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// How many days ahead `birthdays` looks
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: i64,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_upcoming_days() -> i64 {
    DEFAULT_UPCOMING_DAYS
}

impl Default for AbookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            upcoming_days: default_upcoming_days(),
        }
    }
}

impl AbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AbookError::Io)?;
        let config: AbookConfig =
            serde_json::from_str(&content).map_err(AbookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AbookError::Serialization)?;
        fs::write(config_path, content).map_err(AbookError::Io)?;
        Ok(())
    }

    /// Where the address book lives for a given data directory
    pub fn data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "upcoming-days" => Some(self.upcoming_days.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = value.to_string();
                Ok(())
            }
            "upcoming-days" => {
                let days: i64 = value
                    .parse()
                    .map_err(|_| format!("upcoming-days must be a number, got {}", value))?;
                if !(0..=MAX_UPCOMING_DAYS).contains(&days) {
                    return Err(format!(
                        "upcoming-days must be between 0 and {}",
                        MAX_UPCOMING_DAYS
                    ));
                }
                self.upcoming_days = days;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
