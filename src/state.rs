use crate::entries::EntryCollection;
use crate::models::{MoodEntry, Theme};
use crate::storage::{self, KeyValueStore, StorageError};
use std::{sync::Arc, time::Duration};
use tokio::{sync::Mutex, task::JoinError};
use tracing::error;

/// Everything one running session owns: the store, the entries rehydrated
/// from it, and the theme preference.
pub struct Session {
    store: Box<dyn KeyValueStore>,
    entries: EntryCollection,
    theme: Theme,
}

impl Session {
    pub fn open(store: Box<dyn KeyValueStore>) -> Self {
        let entries = storage::load_entries(&*store);
        let theme = storage::load_theme(&*store);
        Self { store, entries, theme }
    }

    pub fn entries(&self) -> &EntryCollection {
        &self.entries
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Appends and persists. A failed write is logged; the entry stays in
    /// the session either way.
    pub fn commit(&mut self, entry: MoodEntry) {
        self.entries.append(entry);
        if let Err(err) = storage::persist_entries(&mut *self.store, &self.entries) {
            error!("failed to persist mood entries: {err}");
        }
    }

    /// The in-memory theme only changes once the new value is stored.
    pub fn toggle_theme(&mut self) -> Result<Theme, StorageError> {
        let next = self.theme.toggled();
        storage::persist_theme(&mut *self.store, next)?;
        self.theme = next;
        Ok(next)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub submit_delay: Duration,
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(store: Box<dyn KeyValueStore>, submit_delay: Duration) -> Self {
        Self {
            submit_delay,
            session: Arc::new(Mutex::new(Session::open(store))),
        }
    }

    /// Rehydrates on the blocking pool.
    pub async fn open(store: Box<dyn KeyValueStore>, submit_delay: Duration) -> Result<Self, JoinError> {
        let session = tokio::task::spawn_blocking(move || Session::open(store)).await?;
        Ok(Self {
            submit_delay,
            session: Arc::new(Mutex::new(session)),
        })
    }

    /// Runs `f` under the session lock on the blocking pool, so store I/O
    /// never stalls a runtime worker.
    pub async fn with_session<T, F>(&self, f: F) -> Result<T, JoinError>
    where
        F: FnOnce(&mut Session) -> T + Send + 'static,
        T: Send + 'static,
    {
        let session = Arc::clone(&self.session);
        tokio::task::spawn_blocking(move || f(&mut session.blocking_lock())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;
    use crate::storage::{MemoryStore, ENTRIES_KEY};
    use chrono::Utc;
    use std::sync::Mutex as StdMutex;
    use std::thread::{self, ThreadId};

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: String) -> Result<(), StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    struct ThreadRecordingStore {
        writer: Arc<StdMutex<Option<ThreadId>>>,
    }

    impl KeyValueStore for ThreadRecordingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: String) -> Result<(), StorageError> {
            *self.writer.lock().unwrap() = Some(thread::current().id());
            Ok(())
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn commit_persists_after_append() {
        let mut session = Session::open(Box::new(MemoryStore::new()));
        session.commit(MoodEntry::new(Mood::Happy, Utc::now()));
        assert_eq!(session.entries().len(), 1);

        let raw = session.store.get(ENTRIES_KEY).unwrap().expect("entries not persisted");
        let stored: EntryCollection = serde_json::from_str(&raw).unwrap();
        assert_eq!(&stored, session.entries());
    }

    #[test]
    fn toggle_theme_flips_and_persists() {
        let mut session = Session::open(Box::new(MemoryStore::new()));
        assert_eq!(session.theme(), Theme::Light);
        assert_eq!(session.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(storage::load_theme(&*session.store), Theme::Dark);
        assert_eq!(session.toggle_theme().unwrap(), Theme::Light);
    }

    #[test]
    fn failed_theme_write_keeps_current_theme() {
        let mut session = Session::open(Box::new(ReadOnlyStore));
        assert!(session.toggle_theme().is_err());
        assert_eq!(session.theme(), Theme::Light);
    }

    #[test]
    fn commit_round_trips_live_timestamps() {
        let mut session = Session::open(Box::new(MemoryStore::new()));
        session.commit(MoodEntry::new(Mood::Sad, Utc::now()));
        session.commit(MoodEntry::new(Mood::Neutral, Utc::now()));

        let reopened = Session::open(std::mem::replace(&mut session.store, Box::new(MemoryStore::new())));
        assert_eq!(reopened.entries(), session.entries());
    }

    #[tokio::test]
    async fn store_writes_run_off_the_calling_thread() {
        let writer = Arc::new(StdMutex::new(None));
        let store = ThreadRecordingStore { writer: Arc::clone(&writer) };
        let state = AppState::open(Box::new(store), Duration::ZERO).await.unwrap();

        let theme = state.with_session(|session| session.toggle_theme()).await.unwrap().unwrap();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(state.session.lock().await.theme(), Theme::Dark);

        let recorded = writer.lock().unwrap().expect("store was never written");
        assert_ne!(recorded, thread::current().id());
    }
}
