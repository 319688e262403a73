use assignust::store::{AssignmentStore, StoreError};

#[test]
fn test_add_prepends_and_assigns_unique_ids() {
    let mut store = AssignmentStore::new();
    let first = store.add("Read chapter 4", "2026-09-01").unwrap();
    let second = store.add("Lab report", "2026-09-03").unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(store.len(), 2);
    // Most recent addition sits at the front.
    assert_eq!(store.list()[0].id, second.id);
    assert_eq!(store.list()[1].id, first.id);
}

#[test]
fn test_add_trims_whitespace() {
    let mut store = AssignmentStore::new();
    let a = store.add("  Essay draft  ", " 2026-10-05 ").unwrap();
    assert_eq!(a.title, "Essay draft");
    assert_eq!(a.deadline, "2026-10-05");
}

#[test]
fn test_add_rejects_empty_title() {
    let mut store = AssignmentStore::new();
    let err = store.add("", "2026-09-01").unwrap_err();
    assert_eq!(err, StoreError::EmptyTitle);
    assert!(store.is_empty());
}

#[test]
fn test_add_rejects_whitespace_only_fields() {
    let mut store = AssignmentStore::new();
    assert_eq!(
        store.add("   ", "2026-09-01").unwrap_err(),
        StoreError::EmptyTitle
    );
    assert_eq!(
        store.add("Essay", "   ").unwrap_err(),
        StoreError::EmptyDeadline
    );
    assert!(store.is_empty());
}

#[test]
fn test_unparseable_deadline_is_still_accepted() {
    let mut store = AssignmentStore::new();
    let a = store.add("Group project", "next friday").unwrap();
    assert_eq!(a.deadline, "next friday");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_remove_by_id() {
    let mut store = AssignmentStore::new();
    let a = store.add("A", "2026-09-01").unwrap();
    let b = store.add("B", "2026-09-02").unwrap();

    let removed = store.remove(a.id).unwrap();
    assert_eq!(removed.id, a.id);
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].id, b.id);
}

#[test]
fn test_remove_unknown_id() {
    let mut store = AssignmentStore::new();
    store.add("A", "2026-09-01").unwrap();
    assert_eq!(store.remove(42).unwrap_err(), StoreError::UnknownId(42));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_remove_at_shifts_later_entries() {
    let mut store = AssignmentStore::new();
    store.add("A", "2026-09-01").unwrap();
    store.add("B", "2026-09-02").unwrap();
    store.add("C", "2026-09-03").unwrap();

    // The list reads C, B, A; removing position 1 drops B.
    let removed = store.remove_at(1).unwrap();
    assert_eq!(removed.title, "B");

    let titles: Vec<&str> = store.list().iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["C", "A"]);
}

#[test]
fn test_remove_at_out_of_range() {
    let mut store = AssignmentStore::new();
    store.add("A", "2026-09-01").unwrap();
    assert_eq!(
        store.remove_at(5).unwrap_err(),
        StoreError::IndexOutOfRange(5)
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn test_ids_are_not_reused_after_removal() {
    let mut store = AssignmentStore::new();
    let a = store.add("A", "2026-09-01").unwrap();
    store.remove(a.id).unwrap();
    let b = store.add("B", "2026-09-02").unwrap();
    assert!(b.id > a.id);
}

#[test]
fn test_list_is_read_only() {
    let mut store = AssignmentStore::new();
    store.add("A", "2026-09-01").unwrap();
    store.add("B", "2026-09-02").unwrap();

    let snapshot = store.list().to_vec();
    // Repeated reads observe the same list.
    assert_eq!(store.list(), snapshot.as_slice());
    assert_eq!(store.list(), snapshot.as_slice());
    assert_eq!(store.len(), 2);
}

#[test]
fn test_get_by_id() {
    let mut store = AssignmentStore::new();
    let a = store.add("A", "2026-09-01").unwrap();
    assert_eq!(store.get(a.id).map(|x| x.title.as_str()), Some("A"));
    assert!(store.get(999).is_none());
}
