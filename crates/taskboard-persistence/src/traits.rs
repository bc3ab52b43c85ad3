use serde::de::DeserializeOwned;
use serde::Serialize;
use taskboard_core::TaskboardResult;

/// Abstract durable key-value medium.
///
/// Implementations store one opaque byte string per key and overwrite
/// eagerly: a `read_raw` after a `write_raw` in the same process observes
/// the new value.
pub trait KeyValueStore {
    /// Raw bytes stored under `key`, or `None` when the key is absent.
    fn read_raw(&self, key: &str) -> TaskboardResult<Option<Vec<u8>>>;

    /// Store `bytes` under `key`, replacing any previous value.
    fn write_raw(&self, key: &str, bytes: &[u8]) -> TaskboardResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn read_raw(&self, key: &str) -> TaskboardResult<Option<Vec<u8>>> {
        (**self).read_raw(key)
    }

    fn write_raw(&self, key: &str, bytes: &[u8]) -> TaskboardResult<()> {
        (**self).write_raw(key, bytes)
    }
}

/// JSON convenience layer over [`KeyValueStore`].
///
/// `read` never fails: a missing key, an unreadable medium, or corrupt
/// JSON all fall back to the provided default (with a warning), so one bad
/// value cannot take the application down.
pub trait KeyValueStoreExt: KeyValueStore {
    fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let bytes = match self.read_raw(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return default,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read stored value, using default");
                return default;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value is corrupt, using default");
                default
            }
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> TaskboardResult<()> {
        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|e| taskboard_core::TaskboardError::Serialization(e.to_string()))?;
        self.write_raw(key, &bytes)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

/// Persisted schema versions, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SchemaVersion {
    /// Flat task list: `{ columns: [..], tasks: [..] }`.
    V1,
    /// Per-column buckets: `{ columns: [..], tasks: { columnId: [..] } }`.
    V2,
}

impl SchemaVersion {
    pub const CURRENT: Self = Self::V2;

    pub fn as_u32(self) -> u32 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    pub fn from_u32(v: u32) -> Option<Self> {
        match v {
            1 => Some(Self::V1),
            2 => Some(Self::V2),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_u32(self.as_u32() + 1)
    }
}
