//! Storage slot implementations.
//!
//! # Responsibility
//! - Provide file-backed and in-memory slots behind one trait.
//! - Report read/write outcomes without interpreting the payload.
//!
//! # Invariants
//! - `read` returns `None` for a slot that has never been written.
//! - `write` replaces the previous payload wholesale.

use super::{SlotError, SlotResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A single named durable location holding one serialized payload.
///
/// The trait is the seam test doubles plug into; the store never touches
/// files or buffers directly.
pub trait StorageSlot {
    /// Stable slot name used in diagnostics.
    fn name(&self) -> &str;

    /// Reads the current payload, `None` when the slot is empty.
    fn read(&self) -> SlotResult<Option<String>>;

    /// Overwrites the slot with `payload`.
    fn write(&mut self, payload: &str) -> SlotResult<()>;
}

/// File-backed slot: one file holds one collection.
///
/// Writes are plain overwrites with no atomic-rename step; a failure mid-write
/// can leave a truncated payload, which the store recovers from as an empty
/// collection on the next load.
pub struct FileSlot {
    path: PathBuf,
    name: String,
}

impl FileSlot {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> SlotResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SlotError::Io {
                slot: self.name.clone(),
                source: err,
            }),
        }
    }

    fn write(&mut self, payload: &str) -> SlotResult<()> {
        std::fs::write(&self.path, payload).map_err(|err| SlotError::Io {
            slot: self.name.clone(),
            source: err,
        })
    }
}

/// In-process slot for tests and smoke wiring.
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: Option<String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-seeded with a payload, as if previously written.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
        }
    }

    /// Returns the last written payload, if any.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl StorageSlot for MemorySlot {
    fn name(&self) -> &str {
        "memory"
    }

    fn read(&self) -> SlotResult<Option<String>> {
        Ok(self.payload.clone())
    }

    fn write(&mut self, payload: &str) -> SlotResult<()> {
        self.payload = Some(payload.to_string());
        Ok(())
    }
}
