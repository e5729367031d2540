//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every abook operation, whatever the UI.
//!
//! `AbookApi` owns the loaded [`AddressBook`] for the whole session together
//! with the [`DataStore`] it came from. Commands mutate the in-memory book;
//! nothing is written until [`AbookApi::save`] is called, which the CLI does
//! when the session ends.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and `book.rs`
//! - **I/O to the terminal**: No stdout, stderr, or formatting
//!
//! ## Generic Over DataStore
//!
//! - Production: `AbookApi<FileStore>`
//! - Testing: `AbookApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::config::AbookConfig;
use crate::error::Result;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};
use tracing::debug;

pub struct AbookApi<S: DataStore> {
    store: S,
    book: AddressBook,
    paths: commands::AbookPaths,
    config: AbookConfig,
    dirty: bool,
}

impl<S: DataStore> AbookApi<S> {
    /// Loads the book from `store`. Fails if the stored data is unreadable.
    pub fn open(store: S, paths: commands::AbookPaths, config: AbookConfig) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            book,
            paths,
            config,
            dirty: false,
        })
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.book, name, phone)?;
        Ok(self.track(result))
    }

    pub fn change_phone(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> Result<commands::CmdResult> {
        let result = commands::change::run(&mut self.book, name, old_phone, new_phone)?;
        Ok(self.track(result))
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        let result = commands::phone::remove(&mut self.book, name, phone)?;
        Ok(self.track(result))
    }

    pub fn phones(&self, name: &str) -> Result<commands::CmdResult> {
        commands::phone::show(&self.book, name)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.book, name)?;
        Ok(self.track(result))
    }

    pub fn clear(&mut self) -> Result<commands::CmdResult> {
        let result = commands::clear::run(&mut self.book)?;
        Ok(self.track(result))
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<commands::CmdResult> {
        let result = commands::birthday::add(&mut self.book, name, birthday)?;
        Ok(self.track(result))
    }

    pub fn show_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::birthday::show(&self.book, name)
    }

    /// Upcoming birthdays from today, over the configured window.
    pub fn upcoming_birthdays(&self) -> Result<commands::CmdResult> {
        self.upcoming_birthdays_at(Local::now().date_naive())
    }

    pub fn upcoming_birthdays_at(&self, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::birthdays::run(&self.book, today, self.config.upcoming_days)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            // Window changes apply right away; a new data file waits for the
            // next session since this one already loaded its book.
            self.config.upcoming_days = config.upcoming_days;
        }
        Ok(result)
    }

    /// Writes the book back to the store and clears the dirty flag.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)?;
        self.dirty = false;
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Config in effect for this session.
    pub fn settings(&self) -> &AbookConfig {
        &self.config
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn paths(&self) -> &commands::AbookPaths {
        &self.paths
    }

    fn track(&mut self, result: commands::CmdResult) -> commands::CmdResult {
        if result.mutated {
            debug!("address book modified");
            self.dirty = true;
        }
        result
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{AbookPaths, CmdMessage, CmdResult, MessageLevel};
