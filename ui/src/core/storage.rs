//! Local persistence helpers for the guest session.
//!
//! Values are stored as JSON strings under fixed keys, one key per mirrored
//! value. There is no schema version; a value that fails to parse is treated
//! as absent.

use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub const KEY_CHECKED_IN: &str = "isCheckedIn";
pub const KEY_DOCUMENTS: &str = "uploadedDocuments";
pub const KEY_DOCUMENTS_SENT: &str = "documentsSentViaWhatsApp";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("reading `{key}` failed: {reason}")]
    Read { key: String, reason: String },
    #[error("writing `{key}` failed: {reason}")]
    Write { key: String, reason: String },
    #[error("stored value for `{key}` is not valid JSON")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("value for `{key}` could not be encoded")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value storage on the guest's device.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                key: key.to_string(),
                source,
            }),
    }
}

pub fn write_json<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

/// In-memory store. Used by tests and whenever the device store cannot be opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage` in the browser.
#[cfg(target_arch = "wasm32")]
pub struct DeviceStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl DeviceStore {
    pub fn open() -> Result<Self, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?;
        let storage = window
            .local_storage()
            .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
            .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for DeviceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|err| StorageError::Read {
            key: key.to_string(),
            reason: format!("{err:?}"),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// JSON file in the platform data directory for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub struct DeviceStore {
    path: std::path::PathBuf,
    entries: BTreeMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl DeviceStore {
    pub fn open() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("com", "MiPA", "MiPA Companion")
            .ok_or_else(|| StorageError::Unavailable("no data directory".into()))?;
        Self::open_at(dirs.data_dir().join("storage.json"))
    }

    pub fn open_at(path: std::path::PathBuf) -> Result<Self, StorageError> {
        let entries = match std::fs::read_to_string(&path) {
            // A corrupt file reads as empty; the next `set` replaces it.
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                dioxus::logger::tracing::warn!(
                    "[storage] {} is not valid JSON ({err}); starting empty",
                    path.display()
                );
                BTreeMap::new()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(StorageError::Unavailable(err.to_string())),
        };
        Ok(Self { path, entries })
    }

    fn flush(&self, key: &str) -> Result<(), StorageError> {
        let write_err = |reason: String| StorageError::Write {
            key: key.to_string(),
            reason,
        };
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|err| write_err(err.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            StorageError::Encode {
                key: key.to_string(),
                source,
            }
        })?;
        std::fs::write(&self.path, raw).map_err(|err| write_err(err.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for DeviceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush(key)
    }
}

/// Open the device store, falling back to memory so the app still works
/// (without persistence) when storage is blocked.
pub fn open_device_store() -> Box<dyn KeyValueStore> {
    match DeviceStore::open() {
        Ok(store) => Box::new(store),
        Err(err) => {
            dioxus::logger::tracing::warn!("[storage] {err}; session will not survive a reload");
            Box::new(MemoryStore::new())
        }
    }
}
