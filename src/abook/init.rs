use crate::api::{AbookApi, AbookPaths};
use crate::config::AbookConfig;
use crate::error::{AbookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Overrides the data directory when `--dir` is not given.
pub const HOME_ENV: &str = "ABOOK_HOME";

/// Picks the data directory: explicit flag, then `ABOOK_HOME`, then the
/// platform data directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "abook", "abook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AbookError::Config("Could not determine data directory".to_string()))
}

/// Loads config and the address book from `data_dir`.
///
/// A broken config file falls back to defaults with a warning; a broken
/// address book is an error, so it is never overwritten at session end.
pub fn initialize(data_dir: &Path) -> Result<AbookApi<FileStore>> {
    let config = match AbookConfig::load(data_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring unreadable config: {}", e);
            AbookConfig::default()
        }
    };

    let data_path = config.data_path(data_dir);
    debug!(path = %data_path.display(), "opening address book");

    let store = FileStore::new(data_path);
    let paths = AbookPaths {
        data_dir: data_dir.to_path_buf(),
    };
    AbookApi::open(store, paths, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_dir_wins() {
        let dir = Path::new("/tmp/some/where");
        assert_eq!(resolve_data_dir(Some(dir)).unwrap(), dir.to_path_buf());
    }

    #[test]
    fn initialize_empty_dir() {
        let temp = TempDir::new().unwrap();
        let api = initialize(temp.path()).unwrap();
        assert!(api.book().is_empty());
        assert_eq!(api.settings(), &AbookConfig::default());
        assert_eq!(
            api.store().path(),
            temp.path().join("addressbook.json").as_path()
        );
    }

    #[test]
    fn initialize_honours_data_file_setting() {
        let temp = TempDir::new().unwrap();
        let mut config = AbookConfig::default();
        config.set("data-file", "friends.json").unwrap();
        config.save(temp.path()).unwrap();

        let api = initialize(temp.path()).unwrap();
        assert_eq!(
            api.store().path(),
            temp.path().join("friends.json").as_path()
        );
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), "{").unwrap();

        let api = initialize(temp.path()).unwrap();
        assert_eq!(api.settings(), &AbookConfig::default());
    }

    #[test]
    fn broken_book_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("addressbook.json"), "garbage").unwrap();

        assert!(matches!(
            initialize(temp.path()),
            Err(AbookError::Serialization(_))
        ));
    }
}
