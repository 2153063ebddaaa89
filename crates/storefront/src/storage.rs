//! Persisted client cache.
//!
//! A key/value mirror of selected slice state held in durable storage:
//! cart lines, shipping address, payment method, and the session profile.
//! Each slot is read once at store construction to seed initial state and
//! overwritten wholesale on every mutation of its owning slice.
//!
//! Slices never touch storage directly; the [`Store`](crate::store::Store)
//! writes through a [`PersistedCache`] after applying each in-memory update,
//! so slice logic stays pure and testable against [`MemoryCache`].

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::warn;

/// Errors that can occur when reading or writing the cache.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Slot value failed to serialize.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The durable slots mirrored from slice state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheSlot {
    /// Cart lines.
    CartItems,
    /// Shipping destination.
    ShippingAddress,
    /// Selected payment method.
    PaymentMethod,
    /// Session profile and bearer token.
    UserInfo,
}

impl CacheSlot {
    /// Stable storage key for the slot.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::CartItems => "cart_items",
            Self::ShippingAddress => "shipping_address",
            Self::PaymentMethod => "payment_method",
            Self::UserInfo => "user_info",
        }
    }
}

/// Backend storage for the persisted cache.
///
/// The narrow surface keeps slice logic independent of where state lives;
/// tests inject [`MemoryCache`], real sessions use [`FileCache`].
pub trait CacheBackend: Send + Sync {
    /// Read the raw value of a slot, `None` when the slot has never been
    /// written.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be read.
    fn get(&self, slot: CacheSlot) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn put(&self, slot: CacheSlot, value: &str) -> Result<(), StorageError>;

    /// Remove a slot. Removing an absent slot is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn remove(&self, slot: CacheSlot) -> Result<(), StorageError>;
}

/// File-backed cache: one JSON file per slot under a data directory.
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Create a file cache rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn slot_path(&self, slot: CacheSlot) -> PathBuf {
        self.dir.join(format!("{}.json", slot.key()))
    }
}

impl CacheBackend for FileCache {
    fn get(&self, slot: CacheSlot) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, slot: CacheSlot, value: &str) -> Result<(), StorageError> {
        fs::write(self.slot_path(slot), value)?;
        Ok(())
    }

    fn remove(&self, slot: CacheSlot) -> Result<(), StorageError> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory cache for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCache {
    slots: Mutex<HashMap<&'static str, String>>,
}

impl MemoryCache {
    /// Create an empty in-memory cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheBackend for MemoryCache {
    fn get(&self, slot: CacheSlot) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(slot.key()).cloned())
    }

    fn put(&self, slot: CacheSlot, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(slot.key(), value.to_owned());
        Ok(())
    }

    fn remove(&self, slot: CacheSlot) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.remove(slot.key());
        Ok(())
    }
}

/// Typed wrapper over a cache backend.
///
/// Read and write failures are logged and otherwise swallowed: persistence
/// is a mirror of in-memory state, and a mirror that cannot be written must
/// never fail the dispatch that updated the state.
#[derive(Clone)]
pub struct PersistedCache {
    backend: Arc<dyn CacheBackend>,
}

impl PersistedCache {
    /// Wrap a backend.
    #[must_use]
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }

    /// Load and decode a slot. Absence and undecodable values both yield
    /// `None`; the latter is logged.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, slot: CacheSlot) -> Option<T> {
        let raw = match self.backend.get(slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(slot = slot.key(), error = %e, "failed to read cache slot");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(
                    slot = slot.key(),
                    error = %e,
                    "stored value failed to decode, treating slot as absent"
                );
                None
            }
        }
    }

    /// Encode and overwrite a slot.
    pub fn store<T: Serialize>(&self, slot: CacheSlot, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(slot = slot.key(), error = %e, "failed to encode cache slot");
                return;
            }
        };

        if let Err(e) = self.backend.put(slot, &raw) {
            warn!(slot = slot.key(), error = %e, "failed to write cache slot");
        }
    }

    /// Remove a slot.
    pub fn remove(&self, slot: CacheSlot) {
        if let Err(e) = self.backend.remove(slot) {
            warn!(slot = slot.key(), error = %e, "failed to remove cache slot");
        }
    }
}
