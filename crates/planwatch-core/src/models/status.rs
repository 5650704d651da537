//! Status derivation for tasks.

/// Type-safe derived status of a task.
///
/// The backend reports task state as two boolean flags (`completed`,
/// `inProgress`). The flags are mutually exclusive by convention; when both
/// are set, `completed` wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task has been completed
    Completed,

    /// Task is being worked on
    InProgress,

    /// Task has not been started
    Pending,
}

impl TaskStatus {
    /// Derive the status from the backend's boolean flags.
    ///
    /// Priority order: `completed` first, then `in_progress`, otherwise
    /// pending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planwatch_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::from_flags(true, true), TaskStatus::Completed);
    /// assert_eq!(TaskStatus::from_flags(false, true), TaskStatus::InProgress);
    /// assert_eq!(TaskStatus::from_flags(false, false), TaskStatus::Pending);
    /// ```
    pub fn from_flags(completed: bool, in_progress: bool) -> Self {
        if completed {
            TaskStatus::Completed
        } else if in_progress {
            TaskStatus::InProgress
        } else {
            TaskStatus::Pending
        }
    }

    /// Convert to the display string used in status lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "Completed",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Pending => "Pending",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Completed` - Checkmark for completed tasks
    /// - `➤ In Progress` - Arrow for active tasks
    /// - `○ Pending` - Circle for pending tasks
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "✓ Completed",
            TaskStatus::InProgress => "➤ In Progress",
            TaskStatus::Pending => "○ Pending",
        }
    }
}
