//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskpad_core` linkage and store
//!   wiring, independently from any UI runtime.
//! - Keep output deterministic for quick local sanity checks.
//!
//! This binary deliberately exposes no task operations; the store's consumer
//! surface is the library API.

use taskpad_core::{MemorySlot, TaskStore};

fn main() {
    let store = TaskStore::open(MemorySlot::new());
    println!("taskpad_core version={}", taskpad_core::core_version());
    println!("taskpad_core store tasks={}", store.tasks().len());
}
