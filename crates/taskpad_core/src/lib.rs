//! Core task-collection store for taskpad.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskDraft, TaskId, TaskPatch, TaskPriority, TaskStatus};
pub use storage::{CodecError, FileSlot, MemorySlot, SlotError, StorageSlot};
pub use store::{StoreError, StoreResult, SubscriptionId, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
