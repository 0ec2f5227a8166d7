//! JSON file persistence for contraction events.
//!
//! A single pretty-printed JSON array at `<data_dir>/contractions.json`.
//! Every save is a full-file overwrite (last writer wins); at human event
//! frequency this is cheap and keeps recovery trivial. A missing file on
//! load is not an error -- it reads as an empty list.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::contraction::ContractionEvent;
use crate::error::StoreError;

const STORE_FILE: &str = "contractions.json";

/// File-backed store for the contraction log.
#[derive(Debug, Clone)]
pub struct ContractionStore {
    path: PathBuf,
}

impl ContractionStore {
    /// Open the store at the default location.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self {
            path: super::data_dir()?.join(STORE_FILE),
        })
    }

    /// Open the store at an explicit path (used by tests).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read all persisted events, in whatever order they were stored.
    ///
    /// A missing file yields an empty list. An unreadable or corrupt file
    /// is a typed error; the caller decides whether to fall back.
    pub fn load(&self) -> Result<Vec<ContractionEvent>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Overwrite the store file with the full event list, pretty-printed.
    pub fn save(&self, events: &[ContractionEvent]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(events).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        std::fs::write(&self.path, json).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Delete the store file. A file that is already gone is fine.
    pub fn remove(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Write {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn store_in(dir: &tempfile::TempDir) -> ContractionStore {
        ContractionStore::at_path(dir.path().join(STORE_FILE))
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let events = vec![
            ContractionEvent::at(Utc::now()),
            ContractionEvent::at(Utc::now()),
        ];
        store.save(&events).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, events[0].id);
        assert_eq!(loaded[0].timestamp, events[0].timestamp);
        assert_eq!(loaded[1].id, events[1].id);
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "not json at all").unwrap();

        match store.load() {
            Err(StoreError::Parse { .. }) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn remove_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.remove().unwrap();
        store.save(&[]).unwrap();
        store.remove().unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn saved_file_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&[ContractionEvent::at(Utc::now())]).unwrap();
        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains('\n'));
    }
}
