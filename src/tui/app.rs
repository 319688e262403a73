use chrono::{Local, NaiveDateTime};
use log::{info, warn};
use ratatui::widgets::TableState;

use crate::notify::{PermissionStatus, ReminderNotifier, SessionNotifier};
use crate::reminders::schedule_reminders;
use crate::store::AssignmentStore;

/// Input mode of the session.
pub enum InputMode {
    Normal,
    Adding,
    Confirming,
}

/// Answer given to the completion dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    Dismissed,
}

/// State for the "Add Assignment" wizard.
#[derive(Default)]
pub struct AddState {
    pub title: String,
    pub step: usize,
}

/// Holds the state of the interactive session.
pub struct App {
    pub store: AssignmentStore,
    pub notifier: SessionNotifier,
    pub state: TableState,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub add_state: AddState,
    /// Assignment waiting on the completion dialog's answer.
    pub pending_completion: Option<u64>,
    /// Transient status line: validation errors, scheduling summaries and
    /// fired reminders all surface here.
    pub notice: Option<String>,
}

impl App {
    /// Creates the session state and requests notification permission.
    ///
    /// A denied permission only produces a message; assignments can still be
    /// added and their reminders are still scheduled.
    pub fn new() -> App {
        let mut notifier = SessionNotifier::new();
        let notice = match notifier.request_permission() {
            PermissionStatus::Granted => None,
            PermissionStatus::Denied => {
                warn!("notification permission denied");
                Some("Notification permission is required for this app to work.".to_string())
            }
        };
        App {
            store: AssignmentStore::new(),
            notifier,
            state: TableState::default(),
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            add_state: AddState::default(),
            pending_completion: None,
            notice,
        }
    }

    /// Selects the next assignment in the list.
    pub fn next(&mut self) {
        if self.store.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.store.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Selects the previous assignment in the list.
    pub fn previous(&mut self) {
        if self.store.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.store.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Id of the assignment under the cursor.
    pub fn selected_id(&self) -> Option<u64> {
        self.state
            .selected()
            .and_then(|i| self.store.list().get(i))
            .map(|a| a.id)
    }

    /// Initiates the "Add Assignment" wizard.
    pub fn start_add(&mut self) {
        self.input_mode = InputMode::Adding;
        self.add_state = AddState::default();
        self.input_buffer.clear();
        self.notice = None;
    }

    /// Handles text input based on the current mode.
    pub fn handle_input(&mut self) {
        match self.input_mode {
            InputMode::Adding => self.handle_adding_input(),
            _ => {}
        }
    }

    /// Advances the "Add Assignment" wizard by one step.
    ///
    /// Empty input moves on as well; both fields are validated together on
    /// submission, so the error message can name them both.
    fn handle_adding_input(&mut self) {
        match self.add_state.step {
            0 => {
                // Title
                self.add_state.title = self.input_buffer.clone();
                self.add_state.step += 1;
                self.input_buffer.clear();
            }
            1 => {
                // Deadline
                let deadline = self.input_buffer.clone();
                self.input_buffer.clear();
                self.submit_add(deadline);
            }
            _ => {}
        }
    }

    fn submit_add(&mut self, deadline: String) {
        let title = self.add_state.title.clone();
        self.input_mode = InputMode::Normal;
        self.add_state = AddState::default();

        match self.store.add(&title, &deadline) {
            Ok(assignment) => {
                let report = schedule_reminders(
                    &mut self.notifier,
                    &assignment,
                    Local::now().naive_local(),
                );
                self.notice = Some(format!("Added '{}': {}.", assignment.title, report.summary()));
                // The new assignment sits at the top of the list.
                self.state.select(Some(0));
            }
            Err(e) => {
                info!("rejected assignment: {}", e);
                self.notice = Some("Please fill in both fields.".to_string());
            }
        }
    }

    /// Opens the completion dialog for the selected assignment.
    pub fn request_completion(&mut self) {
        if let Some(id) = self.selected_id() {
            self.pending_completion = Some(id);
            self.input_mode = InputMode::Confirming;
        }
    }

    /// Applies the completion dialog's answer. Only `Yes` removes the
    /// assignment; `No` and a dismissed dialog leave it untouched.
    pub fn resolve_completion(&mut self, answer: Confirmation) {
        self.input_mode = InputMode::Normal;
        let pending = self.pending_completion.take();
        if answer != Confirmation::Yes {
            return;
        }
        let Some(id) = pending else { return };

        match self.store.remove(id) {
            Ok(removed) => {
                let cancelled = self.notifier.cancel_for(id);
                info!(
                    "completed assignment {} '{}' ({} pending reminder(s) retracted)",
                    id, removed.title, cancelled
                );
                self.notice = Some("Assignment marked as completed.".to_string());
                if self.store.is_empty() {
                    self.state.select(None);
                } else if let Some(i) = self.state.selected() {
                    if i >= self.store.len() {
                        self.state.select(Some(self.store.len() - 1));
                    }
                }
            }
            Err(e) => {
                self.notice = Some(format!("Could not complete assignment: {}", e));
            }
        }
    }

    /// Delivers reminders that have come due since the last tick.
    pub fn tick(&mut self, now: NaiveDateTime) {
        let due = self.notifier.take_due(now);
        for request in &due {
            info!(
                "reminder fired for assignment {}: {}",
                request.assignment_id, request.body
            );
        }
        if let Some(request) = due.last() {
            self.notice = Some(format!("{}: {}", request.title, request.body));
        }
    }
}
