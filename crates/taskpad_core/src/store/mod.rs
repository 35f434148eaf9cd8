//! Task store: single source of truth for the collection.
//!
//! # Responsibility
//! - Own the in-memory task collection and mediate every read/write.
//! - Bridge memory, the durable slot, and registered observers.
//!
//! # Invariants
//! - Every completed mutation persists before it publishes.
//! - Memory, the persisted payload, and the last published snapshot never
//!   drift after a mutation completes.

use crate::storage::{CodecError, SlotError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod task_store;

pub use task_store::{SubscriptionId, TaskStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Mutation failure surfaced to callers.
///
/// Read-path failures never appear here; corrupt or missing payloads are
/// recovered as an empty collection at load time.
#[derive(Debug)]
pub enum StoreError {
    Slot(SlotError),
    Codec(CodecError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slot(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Slot(err) => Some(err),
            Self::Codec(err) => Some(err),
        }
    }
}

impl From<SlotError> for StoreError {
    fn from(value: SlotError) -> Self {
        Self::Slot(value)
    }
}

impl From<CodecError> for StoreError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}
