use chrono::{NaiveDate, NaiveDateTime, NaiveTime, ParseError};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::models::Assignment;
use crate::notify::{NotifyError, ReminderNotifier};

/// Date format deadlines are expected in, e.g. `2026-09-01`.
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// Notification title shared by every reminder.
pub const REMINDER_TITLE: &str = "Assignment Reminder";

/// The two fixed reminders fired on an assignment's deadline day.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// 12:00 heads-up that the assignment is due by the end of the day.
    Noon,
    /// 23:30 last warning, half an hour before the midnight cut-off.
    FinalCall,
}

impl ReminderKind {
    /// Local wall-clock time this reminder fires on the deadline day.
    pub fn fire_time(&self) -> NaiveTime {
        let (hour, minute) = match self {
            ReminderKind::Noon => (12, 0),
            ReminderKind::FinalCall => (23, 30),
        };
        // both constants are valid wall-clock times
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    /// Fixed notification body for this reminder.
    pub fn body(&self) -> &'static str {
        match self {
            ReminderKind::Noon => "Your assignment is due today at 11:59 PM.",
            ReminderKind::FinalCall => "Your assignment is due in 30 minutes.",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReminderKind::Noon => "noon",
            ReminderKind::FinalCall => "final call",
        }
    }
}

/// A candidate reminder instant derived from a deadline date.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderTrigger {
    pub kind: ReminderKind,
    pub fire_at: NaiveDateTime,
}

/// One-shot notification request handed to the delivery backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    /// Id of the assignment this reminder belongs to.
    pub assignment_id: u64,
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
    /// Local wall-clock instant the notification should be delivered at.
    pub fire_at: NaiveDateTime,
    pub kind: ReminderKind,
}

/// Result of planning reminders for one deadline string at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlinePlan {
    /// Triggers still strictly in the future, in firing order.
    pub upcoming: Vec<ReminderTrigger>,
    /// Triggers whose instant had already passed at planning time.
    pub elapsed: Vec<ReminderTrigger>,
    /// Set when the deadline text did not parse as a calendar date.
    pub deadline_error: Option<ParseError>,
}

/// Parses a deadline string in the `YYYY-MM-DD` format.
pub fn parse_deadline(deadline: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(deadline.trim(), DEADLINE_FORMAT)
}

/// Both candidate triggers for a deadline day, noon first.
pub fn deadline_triggers(deadline: NaiveDate) -> [ReminderTrigger; 2] {
    [ReminderKind::Noon, ReminderKind::FinalCall].map(|kind| ReminderTrigger {
        kind,
        fire_at: NaiveDateTime::new(deadline, kind.fire_time()),
    })
}

/// Derives the reminders still worth scheduling for a deadline string.
///
/// The deadline is parsed here rather than at entry time: an unrecognized
/// date yields a plan with no triggers and the parse error attached, leaving
/// the assignment itself unaffected. Each trigger is kept only if it fires
/// strictly after `now`, and the two are judged independently, so zero, one,
/// or both can survive.
pub fn plan_for_deadline(deadline: &str, now: NaiveDateTime) -> DeadlinePlan {
    let date = match parse_deadline(deadline) {
        Ok(date) => date,
        Err(err) => {
            return DeadlinePlan {
                upcoming: Vec::new(),
                elapsed: Vec::new(),
                deadline_error: Some(err),
            };
        }
    };

    let mut plan = DeadlinePlan {
        upcoming: Vec::new(),
        elapsed: Vec::new(),
        deadline_error: None,
    };
    for trigger in deadline_triggers(date) {
        if trigger.fire_at > now {
            plan.upcoming.push(trigger);
        } else {
            plan.elapsed.push(trigger);
        }
    }
    plan
}

/// What happened when one assignment's reminders were handed to the backend.
#[derive(Debug, Default)]
pub struct ScheduleReport {
    pub submitted: Vec<ReminderKind>,
    pub elapsed: Vec<ReminderKind>,
    pub failed: Vec<(ReminderKind, NotifyError)>,
    pub deadline_error: Option<ParseError>,
}

impl ScheduleReport {
    /// One-line account of the outcome, suitable for the notice line.
    pub fn summary(&self) -> String {
        if self.deadline_error.is_some() {
            return "no reminders scheduled: deadline not recognized (use YYYY-MM-DD)".to_string();
        }
        let mut parts = Vec::new();
        match self.submitted.len() {
            0 => parts.push("no reminders scheduled".to_string()),
            n => parts.push(format!("{} reminder{} scheduled", n, if n == 1 { "" } else { "s" })),
        }
        if !self.elapsed.is_empty() {
            let kinds: Vec<&str> = self.elapsed.iter().map(|k| k.label()).collect();
            parts.push(format!("{} already passed", kinds.join(" and ")));
        }
        if !self.failed.is_empty() {
            parts.push(format!("{} failed to submit", self.failed.len()));
        }
        parts.join("; ")
    }
}

/// Submits every still-future reminder for `assignment` to the backend.
///
/// Failures are collected rather than raised: one reminder failing to submit
/// does not stop the other, and nothing here waits for delivery. The caller
/// decides what to do with the report; the store is never touched.
pub fn schedule_reminders<N: ReminderNotifier>(
    notifier: &mut N,
    assignment: &Assignment,
    now: NaiveDateTime,
) -> ScheduleReport {
    let plan = plan_for_deadline(&assignment.deadline, now);

    if let Some(err) = plan.deadline_error {
        warn!(
            "assignment {} deadline '{}' not recognized ({}); no reminders scheduled",
            assignment.id, assignment.deadline, err
        );
        return ScheduleReport {
            deadline_error: Some(err),
            ..ScheduleReport::default()
        };
    }

    let mut report = ScheduleReport {
        elapsed: plan.elapsed.iter().map(|t| t.kind).collect(),
        ..ScheduleReport::default()
    };
    for trigger in plan.upcoming {
        let request = ReminderRequest {
            assignment_id: assignment.id,
            title: REMINDER_TITLE.to_string(),
            body: trigger.kind.body().to_string(),
            fire_at: trigger.fire_at,
            kind: trigger.kind,
        };
        match notifier.schedule_one_shot(request) {
            Ok(()) => {
                info!(
                    "scheduled {} reminder for assignment {} at {}",
                    trigger.kind.label(),
                    assignment.id,
                    trigger.fire_at
                );
                report.submitted.push(trigger.kind);
            }
            Err(err) => {
                warn!(
                    "could not schedule {} reminder for assignment {}: {}",
                    trigger.kind.label(),
                    assignment.id,
                    err
                );
                report.failed.push((trigger.kind, err));
            }
        }
    }
    report
}
