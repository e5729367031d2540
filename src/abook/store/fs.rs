use super::DataStore;
use crate::book::AddressBook;
use crate::error::{AbookError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AbookError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no address book yet, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(AbookError::Io(e)),
        };
        let book: AddressBook =
            serde_json::from_str(&content).map_err(AbookError::Serialization)?;
        debug!(path = %self.path.display(), records = book.len(), "loaded address book");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(book).map_err(AbookError::Serialization)?;

        // Write beside the target and swap it in, so a crash mid-write
        // leaves the previous book intact.
        let temp = self.temp_path();
        fs::write(&temp, content).map_err(AbookError::Io)?;
        fs::rename(&temp, &self.path).map_err(AbookError::Io)?;

        debug!(path = %self.path.display(), records = book.len(), "saved address book");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use tempfile::TempDir;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        let mut ann = Record::new("Ann").unwrap();
        ann.add_phone("1111111111").unwrap();
        ann.add_phone("2222222222").unwrap();
        ann.add_birthday("08.06.1990").unwrap();
        book.add_record(ann);
        book.add_record(Record::new("Bob").unwrap());
        book
    }

    #[test]
    fn missing_file_loads_empty_book() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("addressbook.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("nested/dir/addressbook.json"));
        let book = sample_book();

        store.save(&book).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, book);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("addressbook.json"));
        store.save(&sample_book()).unwrap();

        let mut smaller = sample_book();
        smaller.delete("Ann").unwrap();
        store.save(&smaller).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains("Bob"));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("addressbook.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(AbookError::Serialization(_))));
        // The broken file is left untouched for the user to inspect.
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn invalid_field_in_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("addressbook.json");
        fs::write(
            &path,
            r#"{"records":[{"name":"Ann","phones":["12345"],"birthday":null}]}"#,
        )
        .unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load(), Err(AbookError::Serialization(_))));
    }
}
