//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its enumerated fields.
//! - Keep the serde shape byte-compatible with the persisted slot format.
//!
//! # Invariants
//! - `TaskId` values are assigned by the store, never by callers.
//! - `created_at <= updated_at` for every task the store hands out.

pub mod task;
