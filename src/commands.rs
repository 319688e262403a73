//! Non-interactive commands. These print directly to stdout/stderr and are
//! what the CLI surface dispatches to.

use chrono::{Local, NaiveDateTime};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use serde::Serialize;

use crate::reminders::{plan_for_deadline, ReminderTrigger};

/// Format accepted by `--at`, e.g. `2026-09-01 13:00`.
pub const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Serialize)]
struct PreviewEntry {
    kind: &'static str,
    fires_at: String,
    body: &'static str,
    scheduled: bool,
}

#[derive(Serialize)]
struct PreviewReport {
    deadline: String,
    now: String,
    reminders: Vec<PreviewEntry>,
}

/// Shows which reminders a deadline would produce, without scheduling any.
///
/// `at` overrides the wall clock so the output is reproducible in scripts;
/// `json` switches from the table to machine-readable output.
pub fn cmd_preview(deadline: String, at: Option<String>, json: bool) {
    let now = match at {
        Some(text) => match NaiveDateTime::parse_from_str(&text, CLOCK_FORMAT) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Invalid time '{}': {}. Use YYYY-MM-DD HH:MM.", text, e);
                return;
            }
        },
        None => Local::now().naive_local(),
    };

    let plan = plan_for_deadline(&deadline, now);
    if let Some(err) = plan.deadline_error {
        eprintln!("Invalid deadline '{}': {}. Use YYYY-MM-DD.", deadline.trim(), err);
        return;
    }

    // Recombine into firing order; the plan keeps upcoming and elapsed apart.
    let mut triggers: Vec<(ReminderTrigger, bool)> = Vec::new();
    triggers.extend(plan.upcoming.iter().map(|t| (*t, true)));
    triggers.extend(plan.elapsed.iter().map(|t| (*t, false)));
    triggers.sort_by_key(|(t, _)| t.fire_at);

    if json {
        let report = PreviewReport {
            deadline: deadline.trim().to_string(),
            now: now.format(CLOCK_FORMAT).to_string(),
            reminders: triggers
                .iter()
                .map(|(t, scheduled)| PreviewEntry {
                    kind: t.kind.label(),
                    fires_at: t.fire_at.format(CLOCK_FORMAT).to_string(),
                    body: t.kind.body(),
                    scheduled: *scheduled,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
        return;
    }

    println!(
        "Reminders for {} (evaluated at {}):",
        deadline.trim(),
        now.format(CLOCK_FORMAT)
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Reminder").add_attribute(Attribute::Bold),
            Cell::new("Fires At").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("Body").add_attribute(Attribute::Bold),
        ]);

    for (trigger, scheduled) in &triggers {
        let (status, color) = if *scheduled {
            ("Scheduled", Color::Green)
        } else {
            ("Passed", Color::Grey)
        };
        table.add_row(vec![
            Cell::new(trigger.kind.label()),
            Cell::new(trigger.fire_at.format(CLOCK_FORMAT)),
            Cell::new(status).fg(color),
            Cell::new(trigger.kind.body()),
        ]);
    }

    println!("{table}");
}
