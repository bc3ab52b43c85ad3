use std::path::{Path, PathBuf};

use taskboard_core::TaskboardResult;

use crate::store::atomic_writer::AtomicWriter;
use crate::traits::KeyValueStore;

/// File-backed key-value store: one `<key>.json` file per key under a
/// directory, written with atomic replace.
#[derive(Debug, Clone)]
pub struct JsonKvStore {
    dir: PathBuf,
}

impl JsonKvStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonKvStore {
    fn read_raw(&self, key: &str) -> TaskboardResult<Option<Vec<u8>>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        AtomicWriter::read_all(&path).map(Some)
    }

    fn write_raw(&self, key: &str, bytes: &[u8]) -> TaskboardResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        AtomicWriter::write_atomic(&self.path_for(key), bytes)
    }
}
