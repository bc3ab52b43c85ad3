use std::cell::RefCell;
use std::collections::HashMap;

use taskboard_core::TaskboardResult;

use crate::traits::KeyValueStore;

/// In-memory store for tests and ephemeral boards. Single-threaded by
/// design, like everything else in the engine.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn read_raw(&self, key: &str) -> TaskboardResult<Option<Vec<u8>>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write_raw(&self, key: &str, bytes: &[u8]) -> TaskboardResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
