//! JSON file-backed session store.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use barberbook_core::errors::{BookingError, BookingResult};
use eyre::{WrapErr, eyre};
use tracing::debug;

use crate::SessionStore;

/// Session store persisted as a flat JSON object on disk.
///
/// Values are cached in memory and every mutation rewrites the file through
/// a temporary sibling, so a crash mid-write cannot leave a half-written
/// store behind.
pub struct FileSessionStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileSessionStore {
    /// Open (or create) the store at `path`. Parent directories are created
    /// as needed; an unreadable existing file is an error rather than a
    /// silent reset.
    pub fn open(path: impl Into<PathBuf>) -> BookingResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .wrap_err_with(|| format!("failed to create {}", parent.display()))
                    .map_err(BookingError::Storage)?;
            }
        }

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))
                .map_err(BookingError::Storage)?;
            serde_json::from_str(&raw)
                .wrap_err_with(|| format!("{} is not a valid session file", path.display()))
                .map_err(BookingError::Storage)?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> BookingResult<()> {
        let raw = serde_json::to_string_pretty(entries)
            .wrap_err("failed to serialize session file")
            .map_err(BookingError::Storage)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .wrap_err_with(|| format!("failed to write {}", self.path.display()))
            .map_err(BookingError::Storage)?;

        debug!("Persisted session file {}", self.path.display());
        Ok(())
    }

    fn lock(&self) -> BookingResult<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| BookingError::Storage(eyre!("session store lock poisoned")))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> BookingResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> BookingResult<()> {
        let mut entries = self.lock()?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> BookingResult<()> {
        let mut entries = self.lock()?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}
