//! Log entry models and display classification.

use jiff::civil::DateTime;
use serde::{Deserialize, Serialize};

/// A single entry of an append-only log stream.
///
/// Entry ids increase monotonically within a stream and serve as the
/// watermark for incremental fetches. Timestamps arrive without a zone
/// (`2025-03-30T21:31:44.713`), exactly as the backend emits them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    /// Monotonically increasing identifier within the stream
    pub id: u64,

    /// Time the entry was recorded (backend-local, zone-less)
    pub timestamp: DateTime,

    /// Log message text
    pub message: String,

    /// Explicit severity tag, when the backend provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
}

impl LogEntry {
    /// Classify the entry for display.
    pub fn category(&self) -> LogCategory {
        LogCategory::classify(self.level, &self.message)
    }
}

/// A fix-history entry.
///
/// Fix logs are fetched on demand, never incrementally, so they carry no
/// watermark id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixLogEntry {
    /// Time the entry was recorded (backend-local, zone-less)
    pub timestamp: DateTime,

    /// Log message text
    pub message: String,

    /// Explicit severity tag, when the backend provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
}

impl FixLogEntry {
    /// Classify the entry for display.
    pub fn category(&self) -> LogCategory {
        LogCategory::classify(self.level, &self.message)
    }
}

/// Response body of the plan-specific fix-history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanFixes {
    /// Fix entries recorded for the plan
    #[serde(default)]
    pub fix_logs: Vec<FixLogEntry>,
}

/// Severity tags emitted by the backend log store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Success,
    Command,
    LlmRequest,
    LlmResponse,
}

/// Display classification of a log entry.
///
/// Derived from the explicit [`LogLevel`] when present, otherwise from
/// keyword matching on the message text. Classification is pure and total:
/// every entry maps to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Info,
    Warning,
    Error,
    Success,
    Command,
    LlmRequest,
    LlmResponse,
}

impl LogCategory {
    /// Classify an entry from its optional level and message text.
    pub fn classify(level: Option<LogLevel>, message: &str) -> Self {
        match level {
            Some(level) => LogCategory::from_level(level),
            None => LogCategory::from_message(message),
        }
    }

    /// Map an explicit backend level to its display category.
    pub fn from_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Info => LogCategory::Info,
            LogLevel::Warning => LogCategory::Warning,
            LogLevel::Error => LogCategory::Error,
            LogLevel::Success => LogCategory::Success,
            LogLevel::Command => LogCategory::Command,
            LogLevel::LlmRequest => LogCategory::LlmRequest,
            LogLevel::LlmResponse => LogCategory::LlmResponse,
        }
    }

    /// Classify an untagged message by keyword matching.
    ///
    /// The message is lowercased first. `error`/`failed`/`exception` take
    /// precedence over `success`/`completed`; messages starting with
    /// `executing command:` are commands; everything else is informational.
    pub fn from_message(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("error") || lower.contains("failed") || lower.contains("exception") {
            LogCategory::Error
        } else if lower.contains("success") || lower.contains("completed") {
            LogCategory::Success
        } else if lower.starts_with("executing command:") {
            LogCategory::Command
        } else {
            LogCategory::Info
        }
    }

    /// Convert to a lowercase identifier, used for plain-text display.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Info => "info",
            LogCategory::Warning => "warning",
            LogCategory::Error => "error",
            LogCategory::Success => "success",
            LogCategory::Command => "command",
            LogCategory::LlmRequest => "llm-request",
            LogCategory::LlmResponse => "llm-response",
        }
    }
}
