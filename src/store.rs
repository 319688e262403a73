use chrono::Local;
use thiserror::Error;

use crate::models::Assignment;

/// Errors returned by mutations on the session assignment list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("assignment title must not be empty")]
    EmptyTitle,
    #[error("assignment deadline must not be empty")]
    EmptyDeadline,
    #[error("no assignment at position {0}")]
    IndexOutOfRange(usize),
    #[error("no assignment with id {0}")]
    UnknownId(u64),
}

/// In-memory list of pending assignments for the current session.
///
/// Nothing here is persisted: the list starts empty when the process starts
/// and is gone when the session ends.
pub struct AssignmentStore {
    assignments: Vec<Assignment>,
    next_id: u64,
}

impl AssignmentStore {
    pub fn new() -> Self {
        Self {
            assignments: Vec::new(),
            next_id: 1,
        }
    }

    /// Records a new assignment at the front of the list and returns it.
    ///
    /// Both fields must contain something besides whitespace; otherwise the
    /// list is left untouched and the caller gets a validation error to
    /// surface. The deadline is stored as entered; an unrecognized date is
    /// handled by the reminder planner, not a reason to refuse the entry.
    pub fn add(&mut self, title: &str, deadline: &str) -> Result<Assignment, StoreError> {
        let title = title.trim();
        let deadline = deadline.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        if deadline.is_empty() {
            return Err(StoreError::EmptyDeadline);
        }

        let assignment = Assignment {
            id: self.next_id,
            title: title.to_string(),
            deadline: deadline.to_string(),
            created_at: Local::now().to_rfc3339(),
        };
        self.next_id += 1;
        self.assignments.insert(0, assignment.clone());
        Ok(assignment)
    }

    /// Removes an assignment by its stable id and returns it.
    pub fn remove(&mut self, id: u64) -> Result<Assignment, StoreError> {
        match self.assignments.iter().position(|a| a.id == id) {
            Some(index) => Ok(self.assignments.remove(index)),
            None => Err(StoreError::UnknownId(id)),
        }
    }

    /// Removes the assignment at a list position; later entries shift down
    /// by one.
    ///
    /// An out-of-range index leaves the list untouched and reports an error
    /// instead of panicking.
    pub fn remove_at(&mut self, index: usize) -> Result<Assignment, StoreError> {
        if index >= self.assignments.len() {
            return Err(StoreError::IndexOutOfRange(index));
        }
        Ok(self.assignments.remove(index))
    }

    /// Looks up an assignment by id.
    pub fn get(&self, id: u64) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    /// Read-only view of the list, most recently added first.
    pub fn list(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl Default for AssignmentStore {
    fn default() -> Self {
        Self::new()
    }
}
