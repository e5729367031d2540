use super::DataStore;
use crate::book::AddressBook;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    book: Option<AddressBook>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self {
            book: Some(book),
            saves: 0,
        }
    }

    /// The last saved (or seeded) book.
    pub fn snapshot(&self) -> Option<&AddressBook> {
        self.book.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.book.clone().unwrap_or_default())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.book = Some(book.clone());
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Record;

    #[derive(Default)]
    pub struct StoreFixture {
        book: AddressBook,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            self.book
                .find_mut(name)
                .unwrap()
                .add_birthday(birthday)
                .unwrap();
            self
        }

        pub fn book(&self) -> AddressBook {
            self.book.clone()
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_book(self.book)
        }
    }
}
