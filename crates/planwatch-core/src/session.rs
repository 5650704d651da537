//! Client-side session state for the polling dashboard.
//!
//! The source of truth for everything displayed lives on the backend; the
//! client only keeps the scalars needed to poll incrementally and to guard
//! the execute actions. The state is owned by the view loop and passed by
//! reference into the operation handlers — there are no ambient globals.

use crate::models::LogEntry;
use crate::params::LogStream;

/// Marker text that signals the end of a plan execution.
///
/// The executing flag is set only by a local execute action and cleared only
/// when a fetched log message contains this marker.
pub const COMPLETION_MARKER: &str = "Plan execution completed successfully";

/// Result of reconciling an observed plan id against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanTransition {
    /// Same id as before; the rendered tree is still valid
    Unchanged,
    /// A different plan became active; the full tree must be re-fetched
    Changed(String),
    /// The backend reports no active plan where one was displayed
    Cleared,
}

/// Mutable per-process state of a dashboard session.
///
/// Watermarks are monotonically non-decreasing and reset to zero only when a
/// new execution is started. The plan id doubles as the change-detection key
/// for the rendered tree.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    system_watermark: u64,
    conversation_watermark: u64,
    merged_watermark: u64,
    current_plan_id: Option<String>,
    executing: bool,
}

impl SessionState {
    /// Create a fresh session with zeroed watermarks and no active plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier of the plan currently considered active, if any.
    pub fn current_plan_id(&self) -> Option<&str> {
        self.current_plan_id.as_deref()
    }

    /// Whether an execution started from this session is still running.
    pub fn executing(&self) -> bool {
        self.executing
    }

    /// Last-seen entry id for the given stream.
    pub fn watermark(&self, stream: LogStream) -> u64 {
        match stream {
            LogStream::System => self.system_watermark,
            LogStream::Conversation => self.conversation_watermark,
            LogStream::All => self.merged_watermark,
        }
    }

    /// Advance a stream watermark to the id of the newest fetched entry.
    ///
    /// Watermarks never move backwards: a stale response arriving after a
    /// newer one cannot regress the fetch position.
    pub fn advance_watermark(&mut self, stream: LogStream, last_id: u64) {
        let mark = match stream {
            LogStream::System => &mut self.system_watermark,
            LogStream::Conversation => &mut self.conversation_watermark,
            LogStream::All => &mut self.merged_watermark,
        };
        *mark = (*mark).max(last_id);
    }

    /// Reconcile an observed plan id (or its absence) with the session.
    ///
    /// The change-detection key is updated before the caller fetches the new
    /// tree, so a failed tree fetch is not retried until the id changes
    /// again. `Cleared` is reported only on the transition from a known plan
    /// to none; repeated "no plan" observations are `Unchanged`.
    pub fn observe_plan_id(&mut self, observed: Option<&str>) -> PlanTransition {
        match observed {
            Some(id) => {
                if self.current_plan_id.as_deref() == Some(id) {
                    PlanTransition::Unchanged
                } else {
                    self.current_plan_id = Some(id.to_string());
                    PlanTransition::Changed(id.to_string())
                }
            }
            None => {
                if self.current_plan_id.take().is_some() {
                    PlanTransition::Cleared
                } else {
                    PlanTransition::Unchanged
                }
            }
        }
    }

    /// Mark an execution as started (optimistically, before the request).
    pub fn begin_execution(&mut self) {
        self.executing = true;
    }

    /// Roll the executing flag back after a failed execute request.
    pub fn rollback_execution(&mut self) {
        self.executing = false;
    }

    /// Reset all log watermarks for a freshly started execution.
    pub fn reset_logs(&mut self) {
        self.system_watermark = 0;
        self.conversation_watermark = 0;
        self.merged_watermark = 0;
    }

    /// Inspect a fetched message for the completion marker.
    ///
    /// Returns true (and clears the executing flag) when the marker is
    /// present.
    pub fn observe_message(&mut self, message: &str) -> bool {
        if message.contains(COMPLETION_MARKER) {
            self.executing = false;
            true
        } else {
            false
        }
    }

    /// Reconcile a fetched batch of entries with the stream's watermark.
    ///
    /// Advances the watermark to the last entry's id (entries arrive ordered
    /// by id) and scans every message for the completion marker. Returns
    /// true when the batch signalled completion.
    pub fn absorb_entries(&mut self, stream: LogStream, entries: &[LogEntry]) -> bool {
        if let Some(last) = entries.last() {
            self.advance_watermark(stream, last.id);
        }
        let mut completed = false;
        for entry in entries {
            completed |= self.observe_message(&entry.message);
        }
        completed
    }
}
