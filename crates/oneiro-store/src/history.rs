//! JSON-file-backed dream history with a bounded, newest-first list.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::migrate;
use crate::types::DreamRecord;
use oneiro_core::{Error, Result};

/// Capacity bound on the stored history.
pub const MAX_HISTORY: usize = 10;

/// Repository interface over the history collection.
pub trait HistoryStore {
    /// All records, newest first.
    fn load(&self) -> Result<Vec<DreamRecord>>;
    /// Replace the whole collection (bounded to [`MAX_HISTORY`]).
    fn save(&self, records: &[DreamRecord]) -> Result<()>;
}

/// History persisted to a single JSON file, with a write-through
/// in-memory cache.
pub struct JsonHistoryStore {
    path: PathBuf,
    records: Mutex<Vec<DreamRecord>>,
}

impl JsonHistoryStore {
    /// Open the store, running the versioned upgrade on existing data.
    /// A missing file is an empty history.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut records = match std::fs::read_to_string(&path) {
            Ok(data) => {
                let value = serde_json::from_str(&data)?;
                migrate::upgrade(value)?
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(Error::Storage(err.to_string())),
        };
        records.truncate(MAX_HISTORY);

        info!(
            "History store opened: {} records, path={}",
            records.len(),
            path.display()
        );

        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    /// Snapshot of the current records, newest first.
    pub fn records(&self) -> Vec<DreamRecord> {
        self.records.lock().clone()
    }

    /// Prepend a record, evicting the oldest past [`MAX_HISTORY`].
    pub fn push(&self, record: DreamRecord) -> Result<()> {
        let mut records = self.records.lock();
        records.insert(0, record);
        records.truncate(MAX_HISTORY);
        self.persist(&records)
    }

    /// Remove a record by id.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.records.lock();
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Err(Error::NotFound(format!("record {id}")));
        }
        self.persist(&records)
    }

    fn persist(&self, records: &[DreamRecord]) -> Result<()> {
        let data = serde_json::to_string_pretty(&migrate::envelope(records))?;
        std::fs::write(&self.path, data).map_err(|e| Error::Storage(e.to_string()))?;
        debug!("Persisted {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

impl HistoryStore for JsonHistoryStore {
    fn load(&self) -> Result<Vec<DreamRecord>> {
        Ok(self.records())
    }

    fn save(&self, records: &[DreamRecord]) -> Result<()> {
        let mut bounded = records.to_vec();
        bounded.truncate(MAX_HISTORY);
        let mut guard = self.records.lock();
        *guard = bounded;
        self.persist(&guard)
    }
}
