use chrono::{TimeZone, Utc};
use std::cell::RefCell;
use std::rc::Rc;
use taskpad_core::storage::encode_tasks;
use taskpad_core::{
    MemorySlot, TaskDraft, TaskId, TaskPatch, TaskPriority, TaskStatus, TaskStore,
};

fn draft(title: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        description: String::new(),
        status: TaskStatus::Pending,
        priority: TaskPriority::Medium,
        due_date: Utc.timestamp_opt(1_725_000_000, 0).single().unwrap(),
    }
}

fn record_ids(log: &Rc<RefCell<Vec<Vec<TaskId>>>>) -> impl FnMut(&[taskpad_core::Task]) + 'static {
    let log = Rc::clone(log);
    move |tasks| {
        log.borrow_mut()
            .push(tasks.iter().map(|task| task.id).collect());
    }
}

#[test]
fn subscribe_replays_last_known_collection_immediately() {
    let stamp = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap();
    let seeded = vec![draft("loaded").into_task(5, stamp)];
    let slot = MemorySlot::with_payload(encode_tasks(&seeded).unwrap());
    let mut store = TaskStore::open(slot);

    let log = Rc::new(RefCell::new(Vec::new()));
    store.subscribe(record_ids(&log));

    assert_eq!(log.borrow().as_slice(), &[vec![5]]);
}

#[test]
fn every_mutation_delivers_a_full_snapshot_in_order() {
    let mut store = TaskStore::open(MemorySlot::new());
    let log = Rc::new(RefCell::new(Vec::new()));
    store.subscribe(record_ids(&log));

    let a = store.create(draft("a")).unwrap();
    let b = store.create(draft("b")).unwrap();
    store.delete(a).unwrap();
    store
        .update(
            b,
            TaskPatch {
                status: Some(TaskStatus::Completed),
                ..TaskPatch::default()
            },
        )
        .unwrap();

    assert_eq!(
        log.borrow().as_slice(),
        &[vec![], vec![1], vec![1, 2], vec![2], vec![2]]
    );
}

#[test]
fn missing_id_mutations_do_not_publish() {
    let mut store = TaskStore::open(MemorySlot::new());
    store.create(draft("only")).unwrap();

    let log = Rc::new(RefCell::new(Vec::new()));
    store.subscribe(record_ids(&log));

    store.update(42, TaskPatch::default()).unwrap();
    store.delete(42).unwrap();

    // Only the subscription replay, nothing from the no-ops.
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn unsubscribe_stops_future_deliveries() {
    let mut store = TaskStore::open(MemorySlot::new());
    let log = Rc::new(RefCell::new(Vec::new()));
    let subscription = store.subscribe(record_ids(&log));

    store.create(draft("seen")).unwrap();
    assert!(store.unsubscribe(subscription));
    store.create(draft("unseen")).unwrap();

    assert_eq!(log.borrow().len(), 2);
    assert!(!store.unsubscribe(subscription));
}

#[test]
fn multiple_subscribers_each_receive_every_snapshot() {
    let mut store = TaskStore::open(MemorySlot::new());
    let first = Rc::new(RefCell::new(Vec::new()));
    let second = Rc::new(RefCell::new(Vec::new()));
    store.subscribe(record_ids(&first));
    store.subscribe(record_ids(&second));
    assert_eq!(store.subscriber_count(), 2);

    store.create(draft("shared")).unwrap();

    assert_eq!(first.borrow().as_slice(), &[vec![], vec![1]]);
    assert_eq!(second.borrow().as_slice(), &[vec![], vec![1]]);
}

#[test]
fn snapshots_reflect_updated_field_values() {
    let mut store = TaskStore::open(MemorySlot::new());
    let id = store.create(draft("watch me")).unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = Rc::clone(&seen);
        store.subscribe(move |tasks| {
            seen.borrow_mut()
                .push(tasks.iter().map(|task| task.status).collect::<Vec<_>>());
        });
    }

    store
        .update(
            id,
            TaskPatch {
                status: Some(TaskStatus::InProgress),
                ..TaskPatch::default()
            },
        )
        .unwrap();

    assert_eq!(
        seen.borrow().as_slice(),
        &[
            vec![TaskStatus::Pending],
            vec![TaskStatus::InProgress]
        ]
    );
}
