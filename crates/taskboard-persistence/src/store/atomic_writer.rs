use std::io::Write;
use std::path::Path;

use taskboard_core::{TaskboardError, TaskboardResult};

/// Write-to-temp-file then atomic-rename, so a crash mid-write leaves the
/// previous file intact instead of a truncated one.
pub struct AtomicWriter;

impl AtomicWriter {
    pub fn write_atomic(path: &Path, data: &[u8]) -> TaskboardResult<()> {
        // Temp file in the same directory, so the rename stays on one
        // filesystem.
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp = tempfile::NamedTempFile::new_in(parent)?;
        temp.write_all(data)?;
        temp.persist(path)
            .map_err(|e| TaskboardError::Io(e.error))?;

        tracing::debug!("atomically wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    pub fn read_all(path: &Path) -> TaskboardResult<Vec<u8>> {
        let data = std::fs::read(path)?;
        tracing::debug!("read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}
