use chrono::NaiveDateTime;
use thiserror::Error;

use crate::reminders::ReminderRequest;

/// Outcome of asking the platform for permission to notify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Failure modes a delivery backend can report at submission time.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification permission has not been granted")]
    PermissionRequired,
    #[error("notification backend rejected the request: {0}")]
    Rejected(String),
}

/// Capability seam for scheduling one-shot notifications.
///
/// Submission is fire-and-forget: `Ok` only acknowledges that the backend
/// accepted the request, delivery itself is never confirmed.
pub trait ReminderNotifier {
    /// Asks for permission to notify. Called once at session start; the
    /// answer drives a user-facing message and nothing else.
    fn request_permission(&mut self) -> PermissionStatus;

    /// Schedules a single notification at the request's instant.
    fn schedule_one_shot(&mut self, request: ReminderRequest) -> Result<(), NotifyError>;

    /// Best-effort retraction of pending reminders for one assignment.
    ///
    /// One-shot platform schedulers keep no handle to a submitted request,
    /// so the default retracts nothing. Backends that do keep a handle
    /// return how many requests were dropped.
    fn cancel_for(&mut self, assignment_id: u64) -> usize {
        let _ = assignment_id;
        0
    }
}

/// In-process backend that keeps reminders for the current session and hands
/// them back once their instant arrives.
pub struct SessionNotifier {
    pending: Vec<ReminderRequest>,
}

impl SessionNotifier {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Requests whose instant has not arrived yet, in submission order.
    pub fn pending(&self) -> &[ReminderRequest] {
        &self.pending
    }

    /// Number of pending reminders attached to one assignment.
    pub fn pending_for(&self, assignment_id: u64) -> usize {
        self.pending
            .iter()
            .filter(|r| r.assignment_id == assignment_id)
            .count()
    }

    /// Removes and returns every request due by `now`, earliest first.
    pub fn take_due(&mut self, now: NaiveDateTime) -> Vec<ReminderRequest> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|r| r.fire_at <= now);
        self.pending = pending;
        due.sort_by_key(|r| r.fire_at);
        due
    }
}

impl ReminderNotifier for SessionNotifier {
    fn request_permission(&mut self) -> PermissionStatus {
        // a terminal session needs no platform grant
        PermissionStatus::Granted
    }

    fn schedule_one_shot(&mut self, request: ReminderRequest) -> Result<(), NotifyError> {
        self.pending.push(request);
        Ok(())
    }

    fn cancel_for(&mut self, assignment_id: u64) -> usize {
        let before = self.pending.len();
        self.pending.retain(|r| r.assignment_id != assignment_id);
        before - self.pending.len()
    }
}

impl Default for SessionNotifier {
    fn default() -> Self {
        Self::new()
    }
}
