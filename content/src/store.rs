//! Loading and saving content records against the remote and local stores.
//!
//! DESIGN
//! ======
//! Both backends are addressed only by the content key and exchange the same
//! serialized JSON document, so a save writes byte-identical payloads to each.
//! Loads prefer the remote store and fall back to local storage, then to a
//! fresh default record.
//!
//! ERROR HANDLING
//! ==============
//! Load never fails. A remote that cannot be reached is logged and local
//! storage is tried. A document that exists but cannot be decoded is not
//! treated as absent: the load reports [`LoadSource::Unreadable`] and callers
//! must not save over it. Save reports every failure through [`SaveOutcome`] after awaiting
//! the remote write; a local copy written before a remote failure is noted in
//! the outcome rather than rolled back.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;

use crate::record::ContentRecord;
use crate::settings::EditorSettings;

/// Failure talking to a content store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("failed to decode content record: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode content record: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("store not available in this environment")]
    Unavailable,
}

/// Remote document store addressed by content key.
///
/// Futures are `?Send` so implementations can sit on the browser's
/// single-threaded executor.
#[async_trait(?Send)]
pub trait RemoteStore {
    /// Fetch the raw JSON document for `key`; `Ok(None)` when absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the document for `key` with `payload`.
    async fn put(&self, key: &str, payload: &str) -> Result<(), StoreError>;
}

/// Synchronous local key/value storage.
pub trait LocalStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error when the value cannot be stored (quota, no storage).
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Which source a loaded record came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadSource {
    Remote,
    Local,
    /// Nothing stored yet; the record is a fresh default.
    Default,
    /// A stored document exists but could not be decoded. The record is a
    /// placeholder default and saving would destroy the stored copy.
    Unreadable,
}

impl LoadSource {
    /// Whether saving over the loaded record is safe.
    #[must_use]
    pub fn allows_save(self) -> bool {
        !matches!(self, Self::Unreadable)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadedContent {
    pub record: ContentRecord,
    pub source: LoadSource,
}

/// Result of a save, surfaced to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    SaveFailed { reason: String, stored_locally: bool },
}

impl SaveOutcome {
    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    /// User-facing message for this outcome.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Saved => "Content saved".to_owned(),
            Self::SaveFailed { reason, stored_locally: true } => {
                format!("Saved on this device only; remote save failed: {reason}")
            }
            Self::SaveFailed { reason, stored_locally: false } => format!("Save failed: {reason}"),
        }
    }
}

/// Load/save orchestration over a remote and a local store.
pub struct ContentRepository<R, L> {
    remote: R,
    local: L,
    default_price: i64,
}

impl<R, L> ContentRepository<R, L>
where
    R: RemoteStore,
    L: LocalStore,
{
    pub fn new(remote: R, local: L, settings: &EditorSettings) -> Self {
        Self {
            remote,
            local,
            default_price: settings.default_ultra_price,
        }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn local(&self) -> &L {
        &self.local
    }

    /// Load the record for `key`: remote first, then local, then a default record.
    pub async fn load(&self, key: &str) -> LoadedContent {
        let stored = match self.remote.get(key).await {
            Ok(Some(raw)) => Some((raw, LoadSource::Remote)),
            Ok(None) => {
                log::debug!("content {key}: not found in remote store");
                None
            }
            Err(e) => {
                log::warn!("content {key}: remote load failed, falling back to local: {e}");
                None
            }
        };
        let stored = stored.or_else(|| self.local.get(key).map(|raw| (raw, LoadSource::Local)));

        let Some((raw, source)) = stored else {
            return self.placeholder(LoadSource::Default);
        };
        match ContentRecord::from_json(&raw) {
            Ok(record) => {
                log::debug!("content {key}: loaded from {source:?}");
                LoadedContent { record, source }
            }
            Err(e) => {
                let err = StoreError::Decode(e);
                log::error!("content {key}: {source:?} copy exists but is unreadable, refusing to replace it: {err}");
                self.placeholder(LoadSource::Unreadable)
            }
        }
    }

    /// Write `record` to local storage, then to the remote store, and report the result.
    pub async fn save(&self, key: &str, record: &ContentRecord) -> SaveOutcome {
        let payload = match record.to_json() {
            Ok(p) => p,
            Err(e) => {
                let err = StoreError::Encode(e);
                log::error!("content {key}: {err}");
                return SaveOutcome::SaveFailed {
                    reason: err.to_string(),
                    stored_locally: false,
                };
            }
        };

        let local_result = self.local.set(key, &payload);
        if let Err(e) = &local_result {
            log::warn!("content {key}: local save failed: {e}");
        }
        let stored_locally = local_result.is_ok();

        match (self.remote.put(key, &payload).await, local_result) {
            (Ok(()), Ok(())) => SaveOutcome::Saved,
            (Ok(()), Err(local_err)) => SaveOutcome::SaveFailed {
                reason: local_err.to_string(),
                stored_locally,
            },
            (Err(remote_err), _) => {
                log::warn!("content {key}: remote save failed: {remote_err}");
                SaveOutcome::SaveFailed {
                    reason: remote_err.to_string(),
                    stored_locally,
                }
            }
        }
    }

    fn placeholder(&self, source: LoadSource) -> LoadedContent {
        LoadedContent {
            record: ContentRecord::with_default_price(self.default_price),
            source,
        }
    }
}

/// In-memory remote store. Can be switched offline to simulate transport failures.
#[derive(Debug, Default)]
pub struct MemoryRemoteStore {
    docs: RefCell<HashMap<String, String>>,
    offline: Cell<bool>,
    puts: Cell<usize>,
}

impl MemoryRemoteStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    pub fn insert(&self, key: &str, payload: &str) {
        self.docs.borrow_mut().insert(key.to_owned(), payload.to_owned());
    }

    #[must_use]
    pub fn document(&self, key: &str) -> Option<String> {
        self.docs.borrow().get(key).cloned()
    }

    /// Number of successful `put` calls.
    #[must_use]
    pub fn put_count(&self) -> usize {
        self.puts.get()
    }
}

#[async_trait(?Send)]
impl RemoteStore for MemoryRemoteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.offline.get() {
            return Err(StoreError::Transport("remote store offline".to_owned()));
        }
        Ok(self.document(key))
    }

    async fn put(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        if self.offline.get() {
            return Err(StoreError::Transport("remote store offline".to_owned()));
        }
        self.insert(key, payload);
        self.puts.set(self.puts.get() + 1);
        Ok(())
    }
}

/// In-memory local store; optionally read-only to simulate a full quota.
#[derive(Debug, Default)]
pub struct MemoryLocalStore {
    items: RefCell<HashMap<String, String>>,
    read_only: Cell<bool>,
}

impl MemoryLocalStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl LocalStore for MemoryLocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only.get() {
            return Err(StoreError::Storage("quota exceeded".to_owned()));
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
