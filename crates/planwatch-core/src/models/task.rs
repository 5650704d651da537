//! Task model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// Represents a unit of work within a plan.
///
/// Tasks form a tree: every task may carry an ordered list of child tasks of
/// unbounded depth. The wire format uses camelCase field names; `commands`,
/// `successCriteria` and `subTasks` are optional on the wire and default to
/// empty here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// Human-readable description of the work
    pub description: String,

    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,

    /// Whether the task is currently being executed
    #[serde(default)]
    pub in_progress: bool,

    /// Shell-like commands associated with the task
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,

    /// Completion criterion for the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_criteria: Option<String>,

    /// Ordered child tasks (recursive)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_tasks: Vec<Task>,
}

impl Task {
    /// Derive the display status from the two boolean flags.
    pub fn status(&self) -> TaskStatus {
        TaskStatus::from_flags(self.completed, self.in_progress)
    }
}
