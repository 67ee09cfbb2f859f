//! JSON file implementation of the Gateway trait.
//!
//! Stores the two durable values as two small documents in one directory:
//! `counters.json` (a flat key-to-count map) and `selection.json` (a bare
//! string). Each write goes through a temp file and a rename so a crashed
//! write never leaves a half-written document behind.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tasbih_core::{CounterKey, Snapshot};

use crate::error::{GatewayError, Result};
use crate::traits::{Gateway, LoadOutcome};

const COUNTS_FILE: &str = "counters.json";
const SELECTION_FILE: &str = "selection.json";

/// Gateway backed by two JSON documents in a directory.
pub struct JsonFileGateway {
    dir: PathBuf,
}

impl JsonFileGateway {
    /// Open a gateway over the given directory, creating it if missing.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory holding the documents.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read a document, or `None` if it does not exist.
    fn read_document(&self, name: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.dir.join(name)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write a document through a temp file and rename.
    fn write_document(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let tmp = self.dir.join(format!("{}.tmp", name));
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, self.dir.join(name))?;
        Ok(())
    }

    /// Delete a document if it exists.
    fn remove_document(&self, name: &str) -> Result<()> {
        match fs::remove_file(self.dir.join(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Read both documents, or `None` when neither exists.
    fn read_snapshot(&self) -> Result<Option<Snapshot>> {
        let counts_raw = self.read_document(COUNTS_FILE)?;
        let selection_raw = self.read_document(SELECTION_FILE)?;

        if counts_raw.is_none() && selection_raw.is_none() {
            return Ok(None);
        }

        let counts: BTreeMap<CounterKey, u64> = match counts_raw {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| GatewayError::Serialization(format!("counters document: {}", e)))?,
            None => BTreeMap::new(),
        };

        let selected: Option<CounterKey> = match selection_raw {
            Some(bytes) => {
                let label: String = serde_json::from_slice(&bytes).map_err(|e| {
                    GatewayError::Serialization(format!("selection document: {}", e))
                })?;
                Some(CounterKey::from(label))
            }
            None => None,
        };

        Ok(Some(Snapshot::new(counts, selected)))
    }
}

impl Gateway for JsonFileGateway {
    fn load(&self) -> LoadOutcome {
        match self.read_snapshot() {
            Ok(Some(snapshot)) => LoadOutcome::Snapshot(snapshot),
            Ok(None) => LoadOutcome::NotFound,
            Err(err) => LoadOutcome::Corrupt(err),
        }
    }

    fn save_counts(&self, counts: &BTreeMap<CounterKey, u64>) -> Result<()> {
        let bytes = serde_json::to_vec(counts)
            .map_err(|e| GatewayError::Serialization(e.to_string()))?;
        self.write_document(COUNTS_FILE, &bytes)
    }

    fn save_selection(&self, selected: Option<&CounterKey>) -> Result<()> {
        match selected {
            Some(key) => {
                let bytes = serde_json::to_vec(key.as_str())
                    .map_err(|e| GatewayError::Serialization(e.to_string()))?;
                self.write_document(SELECTION_FILE, &bytes)
            }
            None => self.remove_document(SELECTION_FILE),
        }
    }
}
