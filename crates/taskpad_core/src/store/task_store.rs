//! Task store implementation over a storage slot.
//!
//! # Responsibility
//! - Assign task identifiers and timestamps.
//! - Persist the full collection on every mutation, then publish it.
//! - Replay the current collection to every new subscriber.
//!
//! # Invariants
//! - Ids are unique within the collection; a new id is `max(existing, 0) + 1`.
//! - `created_at` is written once and never changed by updates.
//! - Mutations that fail to persist are rolled back and not published.
//!
//! # Known limitation
//! - The `max + 1` id scheme assumes a single mutator. Two independent
//!   processes sharing one slot can both allocate the same id.

use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch};
use crate::storage::{codec, StorageSlot};
use crate::store::StoreResult;
use chrono::Utc;
use log::{debug, error, info, warn};

/// Handle identifying one registered observer.
pub type SubscriptionId = u64;

struct Subscriber {
    id: SubscriptionId,
    notify: Box<dyn FnMut(&[Task])>,
}

/// Owning state container for the task collection.
///
/// Single-threaded by contract: all operations run to completion on the
/// calling thread, so mutations are strictly sequential and need no locking.
pub struct TaskStore<S: StorageSlot> {
    slot: S,
    tasks: Vec<Task>,
    subscribers: Vec<Subscriber>,
    next_subscription: SubscriptionId,
}

impl<S: StorageSlot> TaskStore<S> {
    /// Opens a store over `slot`, loading any previously persisted collection.
    ///
    /// # Contract
    /// - An empty slot yields an empty collection.
    /// - An unreadable or unparseable payload is recovered as an empty
    ///   collection and logged; construction never fails.
    pub fn open(slot: S) -> Self {
        let tasks = match slot.read() {
            Ok(None) => {
                info!(
                    "event=store_load module=store status=ok slot={} count=0 source=empty",
                    slot.name()
                );
                Vec::new()
            }
            Ok(Some(payload)) => match codec::decode_tasks(&payload) {
                Ok(tasks) => {
                    info!(
                        "event=store_load module=store status=ok slot={} count={}",
                        slot.name(),
                        tasks.len()
                    );
                    tasks
                }
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=recovered slot={} error={}",
                        slot.name(),
                        err
                    );
                    Vec::new()
                }
            },
            Err(err) => {
                warn!(
                    "event=store_load module=store status=recovered slot={} error={}",
                    slot.name(),
                    err
                );
                Vec::new()
            }
        };

        Self {
            slot,
            tasks,
            subscribers: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Borrows the current collection.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Registers an observer and immediately replays the current collection.
    ///
    /// # Contract
    /// - The callback fires once right away with the last known collection,
    ///   then once after every completed mutation, in mutation order.
    /// - Every delivery carries the full collection, never a diff.
    pub fn subscribe(&mut self, mut notify: impl FnMut(&[Task]) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;

        notify(&self.tasks);
        self.subscribers.push(Subscriber {
            id,
            notify: Box::new(notify),
        });
        id
    }

    /// Removes a registered observer. Returns `false` for unknown handles.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|sub| sub.id != id);
        self.subscribers.len() != before
    }

    /// Creates a task from `draft`, persists and publishes.
    ///
    /// # Contract
    /// - The new id is strictly greater than every id currently held.
    /// - `created_at == updated_at` on the returned task.
    ///
    /// # Errors
    /// - Persistence failure rolls the creation back and is returned.
    pub fn create(&mut self, draft: TaskDraft) -> StoreResult<TaskId> {
        let id = self.next_task_id();
        self.tasks.push(draft.into_task(id, Utc::now()));

        if let Err(err) = self.persist() {
            self.tasks.pop();
            error!(
                "event=task_create module=store status=error slot={} id={} error={}",
                self.slot.name(),
                id,
                err
            );
            return Err(err);
        }

        info!(
            "event=task_create module=store status=ok id={} count={}",
            id,
            self.tasks.len()
        );
        self.publish();
        Ok(id)
    }

    /// Merges `patch` into the task with `id`, persists and publishes.
    ///
    /// Returns `Ok(false)` when no task has `id`: the collection, the slot
    /// and subscribers are all left untouched. The silent no-op mirrors the
    /// historical contract; callers wanting a not-found signal have the
    /// `bool`.
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> StoreResult<bool> {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            debug!("event=task_update module=store status=miss id={id}");
            return Ok(false);
        };

        let previous = self.tasks[index].clone();
        patch.apply_to(&mut self.tasks[index], Utc::now());

        if let Err(err) = self.persist() {
            self.tasks[index] = previous;
            error!(
                "event=task_update module=store status=error slot={} id={} error={}",
                self.slot.name(),
                id,
                err
            );
            return Err(err);
        }

        info!("event=task_update module=store status=ok id={id}");
        self.publish();
        Ok(true)
    }

    /// Removes the task with `id`, persists and publishes.
    ///
    /// Removal is permanent; there is no tombstone. Returns `Ok(false)` when
    /// no task has `id`, with no persist or publish.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<bool> {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            debug!("event=task_delete module=store status=miss id={id}");
            return Ok(false);
        };

        let removed = self.tasks.remove(index);

        if let Err(err) = self.persist() {
            self.tasks.insert(index, removed);
            error!(
                "event=task_delete module=store status=error slot={} id={} error={}",
                self.slot.name(),
                id,
                err
            );
            return Err(err);
        }

        info!(
            "event=task_delete module=store status=ok id={} count={}",
            id,
            self.tasks.len()
        );
        self.publish();
        Ok(true)
    }

    /// Returns the number of currently registered observers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn next_task_id(&self) -> TaskId {
        self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1
    }

    fn persist(&mut self) -> StoreResult<()> {
        let payload = codec::encode_tasks(&self.tasks)?;
        self.slot.write(&payload)?;
        Ok(())
    }

    fn publish(&mut self) {
        let tasks = &self.tasks;
        for subscriber in &mut self.subscribers {
            (subscriber.notify)(tasks);
        }
    }
}
