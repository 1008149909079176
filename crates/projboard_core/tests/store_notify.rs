use projboard_core::{Project, ProjectStatus, ProjectStore};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Subscribes a listener that records every snapshot it receives.
fn record_snapshots(store: &mut ProjectStore) -> Rc<RefCell<Vec<Vec<Project>>>> {
    let snapshots = Rc::new(RefCell::new(Vec::new()));
    let handle = Rc::clone(&snapshots);
    store.subscribe(Box::new(move |projects| {
        handle.borrow_mut().push(projects);
    }));
    snapshots
}

#[test]
fn create_appends_one_project_and_fires_one_notification() {
    let mut store = ProjectStore::new();
    let first_id = store
        .create("Build site", "Tutorial project", 3)
        .expect("valid project should store");

    let snapshots = record_snapshots(&mut store);
    let second_id = store
        .create("Write spec", "Docs task", 1)
        .expect("valid project should store");

    assert_ne!(first_id, second_id);
    let snapshots = snapshots.borrow();
    assert_eq!(snapshots.len(), 1, "exactly one notification per create");

    let snapshot = &snapshots[0];
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].id, first_id);
    assert_eq!(snapshot[0].title, "Build site");
    assert_eq!(snapshot[0].status, ProjectStatus::Active);
    assert_eq!(snapshot[1].id, second_id);
    assert_eq!(snapshot[1].status, ProjectStatus::Active);
}

#[test]
fn rejected_create_fires_no_notification() {
    let mut store = ProjectStore::new();
    let snapshots = record_snapshots(&mut store);

    store
        .create("   ", "Tutorial project", 3)
        .expect_err("blank title must be rejected");

    assert!(snapshots.borrow().is_empty());
    assert!(store.is_empty());
}

#[test]
fn move_changes_only_the_target_and_is_idempotent() {
    let mut store = ProjectStore::new();
    let first_id = store
        .create("Build site", "Tutorial project", 3)
        .expect("valid project should store");
    let second_id = store
        .create("Write spec", "Docs task", 1)
        .expect("valid project should store");

    let snapshots = record_snapshots(&mut store);
    store.move_project(first_id, ProjectStatus::Finished);

    {
        let snapshots = snapshots.borrow();
        assert_eq!(snapshots.len(), 1, "exactly one notification per move");
        let snapshot = &snapshots[0];
        assert_eq!(snapshot[0].id, first_id);
        assert_eq!(snapshot[0].status, ProjectStatus::Finished);
        assert_eq!(snapshot[1].id, second_id);
        assert_eq!(snapshot[1].status, ProjectStatus::Active);
    }

    // Same target status again: silent no-op, no further notification.
    store.move_project(first_id, ProjectStatus::Finished);
    assert_eq!(snapshots.borrow().len(), 1);

    // Moving back is permitted.
    store.move_project(first_id, ProjectStatus::Active);
    assert_eq!(snapshots.borrow().len(), 2);
    assert!(store.snapshot()[0].is_active());
}

#[test]
fn move_with_unknown_id_fires_no_notification() {
    let mut store = ProjectStore::new();
    store
        .create("Build site", "Tutorial project", 3)
        .expect("valid project should store");

    let snapshots = record_snapshots(&mut store);
    store.move_project(Uuid::new_v4(), ProjectStatus::Finished);

    assert!(snapshots.borrow().is_empty());
    assert_eq!(store.len(), 1);
}

#[test]
fn listeners_are_notified_in_registration_order() {
    let mut store = ProjectStore::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let handle = Rc::clone(&order);
        store.subscribe(Box::new(move |_projects| {
            handle.borrow_mut().push(tag);
        }));
    }

    store
        .create("Build site", "Tutorial project", 3)
        .expect("valid project should store");

    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn mutating_a_received_snapshot_does_not_affect_the_store() {
    let mut store = ProjectStore::new();
    store.subscribe(Box::new(|mut projects| {
        projects.clear();
        projects.push(Project::new("Intruder", "Should never be stored", 5));
    }));

    store
        .create("Build site", "Tutorial project", 3)
        .expect("valid project should store");
    store
        .create("Write spec", "Docs task", 1)
        .expect("valid project should store");

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].title, "Build site");
    assert_eq!(snapshot[1].title, "Write spec");
}

#[test]
fn end_to_end_create_create_move_keeps_creation_order() {
    let mut store = ProjectStore::new();
    let first_id = store
        .create("Build site", "Tutorial project", 3)
        .expect("valid project should store");
    store
        .create("Write spec", "Docs task", 1)
        .expect("valid project should store");

    store.move_project(first_id, ProjectStatus::Finished);

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].title, "Build site");
    assert_eq!(snapshot[0].status, ProjectStatus::Finished);
    assert_eq!(snapshot[1].title, "Write spec");
    assert_eq!(snapshot[1].status, ProjectStatus::Active);
}

#[test]
fn independent_stores_do_not_share_state() {
    let mut first = ProjectStore::new();
    let mut second = ProjectStore::new();

    first
        .create("Build site", "Tutorial project", 3)
        .expect("valid project should store");

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    second
        .create("Write spec", "Docs task", 1)
        .expect("valid project should store");
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}
