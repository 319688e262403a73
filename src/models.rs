use serde::{Deserialize, Serialize};

/// Represents a single assignment tracked during the current session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Stable identifier assigned at creation, never reused in a session.
    pub id: u64,
    /// The name of the assignment.
    pub title: String,
    /// Deadline exactly as entered. The UI prompts for YYYY-MM-DD, but the
    /// text is kept verbatim; the reminder planner is the one that parses it.
    pub deadline: String,
    /// Timestamp when the assignment was recorded (ISO 8601).
    pub created_at: String,
}
