//! Durable client-side key/value storage.
//!
//! Session and cached-profile state persist across process restarts through
//! this seam. Values are opaque strings (JSON where structured). The UI model
//! is single-threaded, so implementations only need to serialize writes, not
//! coordinate concurrent writers.
use thiserror::Error;

pub mod file;
pub mod memory;

/// Storage key for the opaque session token.
pub const KEY_TOKEN: &str = "token";
/// Storage key for the session role marker (`user` or `admin`).
pub const KEY_USER_TYPE: &str = "userType";
/// Storage key for the serialized identity payload.
pub const KEY_USER: &str = "user";
/// Storage key for the cached citizen profile.
pub const KEY_PROFILE: &str = "profile";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Minimal key/value contract every durable store implements.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}
