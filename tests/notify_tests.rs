use assignust::notify::{PermissionStatus, ReminderNotifier, SessionNotifier};
use assignust::reminders::{ReminderKind, ReminderRequest, REMINDER_TITLE};
use chrono::{NaiveDate, NaiveDateTime};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn request(assignment_id: u64, kind: ReminderKind, fire_at: NaiveDateTime) -> ReminderRequest {
    ReminderRequest {
        assignment_id,
        title: REMINDER_TITLE.to_string(),
        body: kind.body().to_string(),
        fire_at,
        kind,
    }
}

#[test]
fn test_session_notifier_grants_permission() {
    let mut notifier = SessionNotifier::new();
    assert_eq!(notifier.request_permission(), PermissionStatus::Granted);
}

#[test]
fn test_take_due_returns_only_elapsed_requests() {
    let mut notifier = SessionNotifier::new();
    notifier
        .schedule_one_shot(request(1, ReminderKind::Noon, at(2026, 9, 1, 12, 0)))
        .unwrap();
    notifier
        .schedule_one_shot(request(1, ReminderKind::FinalCall, at(2026, 9, 1, 23, 30)))
        .unwrap();

    let due = notifier.take_due(at(2026, 9, 1, 14, 0));
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].kind, ReminderKind::Noon);
    // The final call stays queued.
    assert_eq!(notifier.pending().len(), 1);
    assert_eq!(notifier.pending()[0].kind, ReminderKind::FinalCall);
}

#[test]
fn test_take_due_includes_requests_at_the_exact_instant() {
    let mut notifier = SessionNotifier::new();
    notifier
        .schedule_one_shot(request(1, ReminderKind::Noon, at(2026, 9, 1, 12, 0)))
        .unwrap();

    let due = notifier.take_due(at(2026, 9, 1, 12, 0));
    assert_eq!(due.len(), 1);
    assert!(notifier.pending().is_empty());
}

#[test]
fn test_take_due_orders_by_fire_time() {
    let mut notifier = SessionNotifier::new();
    // Submitted out of firing order.
    notifier
        .schedule_one_shot(request(2, ReminderKind::FinalCall, at(2026, 9, 1, 23, 30)))
        .unwrap();
    notifier
        .schedule_one_shot(request(1, ReminderKind::Noon, at(2026, 9, 1, 12, 0)))
        .unwrap();

    let due = notifier.take_due(at(2026, 9, 2, 0, 0));
    assert_eq!(due.len(), 2);
    assert!(due[0].fire_at <= due[1].fire_at);
    assert_eq!(due[0].kind, ReminderKind::Noon);
}

#[test]
fn test_take_due_on_empty_queue() {
    let mut notifier = SessionNotifier::new();
    assert!(notifier.take_due(at(2026, 9, 1, 12, 0)).is_empty());
}

#[test]
fn test_pending_for_counts_per_assignment() {
    let mut notifier = SessionNotifier::new();
    notifier
        .schedule_one_shot(request(1, ReminderKind::Noon, at(2026, 9, 1, 12, 0)))
        .unwrap();
    notifier
        .schedule_one_shot(request(1, ReminderKind::FinalCall, at(2026, 9, 1, 23, 30)))
        .unwrap();
    notifier
        .schedule_one_shot(request(2, ReminderKind::Noon, at(2026, 9, 2, 12, 0)))
        .unwrap();

    assert_eq!(notifier.pending_for(1), 2);
    assert_eq!(notifier.pending_for(2), 1);
    assert_eq!(notifier.pending_for(3), 0);
}

#[test]
fn test_cancel_for_drops_only_that_assignment() {
    let mut notifier = SessionNotifier::new();
    notifier
        .schedule_one_shot(request(1, ReminderKind::Noon, at(2026, 9, 1, 12, 0)))
        .unwrap();
    notifier
        .schedule_one_shot(request(1, ReminderKind::FinalCall, at(2026, 9, 1, 23, 30)))
        .unwrap();
    notifier
        .schedule_one_shot(request(2, ReminderKind::FinalCall, at(2026, 9, 2, 23, 30)))
        .unwrap();

    let dropped = notifier.cancel_for(1);
    assert_eq!(dropped, 2);
    assert_eq!(notifier.pending().len(), 1);
    assert_eq!(notifier.pending()[0].assignment_id, 2);

    // Cancelling again finds nothing.
    assert_eq!(notifier.cancel_for(1), 0);
}
