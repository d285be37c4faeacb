//! In-memory session store for tests and ephemeral runs.

use std::collections::BTreeMap;
use std::sync::Mutex;

use barberbook_core::errors::BookingResult;

use crate::SessionStore;

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys. Handy for asserting that a logout really
    /// cleared everything.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("store lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> BookingResult<Option<String>> {
        Ok(self.entries.lock().expect("store lock").get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> BookingResult<()> {
        self.entries
            .lock()
            .expect("store lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> BookingResult<()> {
        self.entries.lock().expect("store lock").remove(key);
        Ok(())
    }
}
