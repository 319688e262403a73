//! Library crate behind the `assignust` binary: the in-memory assignment
//! store, the deadline reminder planner, the notification backend, and the
//! terminal UI that ties them together.

pub mod commands;
pub mod logging;
pub mod models;
pub mod notify;
pub mod reminders;
pub mod store;
pub mod tui;
