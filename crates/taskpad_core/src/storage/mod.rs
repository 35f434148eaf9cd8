//! Durable slot storage and collection codec.
//!
//! # Responsibility
//! - Abstract the single named storage slot holding the serialized collection.
//! - Keep serialization details inside the core persistence boundary.
//!
//! # Invariants
//! - One slot holds exactly one serialized task collection.
//! - Write paths overwrite the whole payload; there is no partial update.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod codec;
pub mod slot;

pub use codec::{decode_tasks, encode_tasks, CodecError};
pub use slot::{FileSlot, MemorySlot, StorageSlot};

pub type SlotResult<T> = Result<T, SlotError>;

/// Slot-level read/write failure.
#[derive(Debug)]
pub enum SlotError {
    Io {
        slot: String,
        source: std::io::Error,
    },
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { slot, source } => {
                write!(f, "storage slot `{slot}` io failure: {source}")
            }
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}
