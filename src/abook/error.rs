use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbookError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid phone format: {0}")]
    InvalidPhoneFormat(String),

    #[error("Invalid birthday format: {0}")]
    InvalidBirthdayFormat(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

}

pub type Result<T> = std::result::Result<T, AbookError>;
