//! # Storage Layer
//!
//! The whole [`AddressBook`] is loaded once when a session starts and written
//! back once when it ends. There is no per-record persistence: [`DataStore`]
//! only knows how to load and save a complete snapshot.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON file
//!   - A missing file loads as an empty book
//!   - A corrupt file is reported, never silently replaced
//!   - Saves go through a temp file and a rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keeps the last saved snapshot and counts saves
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── addressbook.json    # {"records": [{"name", "phones", "birthday"}, ...]}
//! └── config.json         # AbookConfig
//! ```

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for address book persistence.
pub trait DataStore {
    /// Load the stored book, or an empty one if nothing was saved yet
    fn load(&self) -> Result<AddressBook>;

    /// Replace the stored book with `book`
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
