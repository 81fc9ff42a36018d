use crate::entries::EntryCollection;
use crate::models::Theme;
use std::{
    collections::BTreeMap,
    fs, io,
    path::PathBuf,
};
use tracing::error;

pub const ENTRIES_KEY: &str = "studentWellnessMoods";
pub const THEME_KEY: &str = "wellness-theme";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access store file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode or decode store contents: {0}")]
    Json(#[from] serde_json::Error),
}

/// String values under string keys, the shape browser local storage has.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}

/// A JSON object on disk mapping keys to string values. The whole file is
/// rewritten on every change.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let payload = serde_json::to_vec_pretty(values)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value);
        self.write_all(&values)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut values = self.read_all()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

/// Rehydrates the collection. Any failure is logged and yields an empty one.
pub fn load_entries(store: &dyn KeyValueStore) -> EntryCollection {
    match store.get(ENTRIES_KEY) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to parse saved mood entries: {err}");
                EntryCollection::default()
            }
        },
        Ok(None) => EntryCollection::default(),
        Err(err) => {
            error!("failed to read saved mood entries: {err}");
            EntryCollection::default()
        }
    }
}

pub fn persist_entries(store: &mut dyn KeyValueStore, entries: &EntryCollection) -> Result<(), StorageError> {
    let payload = serde_json::to_string(entries)?;
    store.set(ENTRIES_KEY, payload)
}

pub fn load_theme(store: &dyn KeyValueStore) -> Theme {
    match store.get(THEME_KEY) {
        Ok(Some(value)) => Theme::from_stored(&value),
        Ok(None) => Theme::default(),
        Err(err) => {
            error!("failed to read theme preference: {err}");
            Theme::default()
        }
    }
}

pub fn persist_theme(store: &mut dyn KeyValueStore, theme: Theme) -> Result<(), StorageError> {
    store.set(THEME_KEY, theme.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mood, MoodEntry};
    use chrono::{Duration, TimeZone, Utc};

    fn sample_entries() -> EntryCollection {
        let base = Utc.with_ymd_and_hms(2026, 1, 5, 8, 15, 30).unwrap();
        let mut entries = EntryCollection::new();
        entries.append(MoodEntry::new(Mood::Neutral, base));
        entries.append(MoodEntry::new(Mood::Stressed, base - Duration::days(2)));
        entries
    }

    #[test]
    fn memory_store_get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v".to_string()).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn entries_round_trip_through_store() {
        let mut store = MemoryStore::new();
        let entries = sample_entries();
        persist_entries(&mut store, &entries).unwrap();
        assert_eq!(load_entries(&store), entries);
    }

    #[test]
    fn malformed_entries_load_as_empty() {
        let mut store = MemoryStore::new();
        store.set(ENTRIES_KEY, "{not json".to_string()).unwrap();
        assert!(load_entries(&store).is_empty());

        store.set(ENTRIES_KEY, r#"[{"id":"x","mood":"angry","timestamp":"2026-01-05T00:00:00.000Z"}]"#.to_string()).unwrap();
        assert!(load_entries(&store).is_empty());
    }

    #[test]
    fn theme_persists_and_defaults_light() {
        let mut store = MemoryStore::new();
        assert_eq!(load_theme(&store), Theme::Light);
        persist_theme(&mut store, Theme::Dark).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");
        let entries = sample_entries();

        let mut store = FileStore::new(&path);
        persist_entries(&mut store, &entries).unwrap();
        persist_theme(&mut store, Theme::Dark).unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(load_entries(&reopened), entries);
        assert_eq!(load_theme(&reopened), Theme::Dark);
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get(ENTRIES_KEY).unwrap(), None);
        assert!(load_entries(&store).is_empty());
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, b"garbage").unwrap();
        let store = FileStore::new(&path);
        assert!(load_entries(&store).is_empty());
        assert_eq!(load_theme(&store), Theme::Light);
    }
}
