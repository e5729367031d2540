//! # Abook Architecture
//!
//! Abook is a small **address book library** with a command-line client on top.
//! It stores contacts (a name, any number of phone numbers, an optional
//! birthday), keeps them in a single file between runs, and answers the one
//! non-trivial question: whose birthday needs congratulating in the next week?
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - One-shot commands and the interactive session            │
//! │  - Turns error kinds into user-facing messages              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the loaded AddressBook for the session              │
//! │  - Tracks unsaved changes, saves on request                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per user command, returns CmdResult         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (model.rs, book.rs) and Storage (store/)            │
//! │  - Validated fields, Record, AddressBook, birthday window   │
//! │  - DataStore: whole-book load/save                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`error::Result`]. Validation and lookup failures
//! are distinct [`error::AbookError`] variants (`EmptyName`,
//! `InvalidPhoneFormat`, `InvalidBirthdayFormat`, `RecordNotFound`,
//! `PhoneNotFound`) so the CLI can word each one for the user. Nothing below
//! the CLI prints or exits.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`book`]: `AddressBook` and the upcoming-birthday query
//! - [`model`]: `Name`, `Phone`, `Birthday`, `Record`
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and session setup
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
