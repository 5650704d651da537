//! Parameter structures for dashboard operations.
//!
//! This module contains shared parameter types that can be used across
//! different interfaces without framework-specific derives. The CLI layer
//! wraps these with clap-specific argument structs and converts via `From`,
//! keeping the core free of argument-parsing concerns.

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// Selects one of the backend's log streams.
///
/// The backend exposes the execution log both as two split streams (system
/// events and LLM conversation) and as a single merged stream; each carries
/// its own independent watermark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStream {
    /// System events of the plan executor
    System,
    /// LLM request/response conversation entries
    Conversation,
    /// The merged single-stream view
    All,
}

impl LogStream {
    /// Endpoint path serving incremental reads for this stream.
    pub fn path(&self) -> &'static str {
        match self {
            LogStream::System => "/api/logs/system",
            LogStream::Conversation => "/api/logs/conversation",
            LogStream::All => "/api/logs",
        }
    }

    /// Short label used to tag rendered entries.
    pub fn label(&self) -> &'static str {
        match self {
            LogStream::System => "sys",
            LogStream::Conversation => "llm",
            LogStream::All => "log",
        }
    }
}

/// Parameters for starting a plan execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecuteRequest {
    /// Start the backend's default plan
    Default,
    /// Start a plan generated from a free-text prompt
    Custom {
        /// The prompt describing the plan to generate
        prompt: String,
    },
}

impl ExecuteRequest {
    /// Build a request from an optional prompt.
    pub fn from_prompt(prompt: Option<String>) -> Self {
        match prompt {
            Some(prompt) => ExecuteRequest::Custom { prompt },
            None => ExecuteRequest::Default,
        }
    }

    /// Validate the request before any network traffic.
    ///
    /// A custom execution requires a non-empty prompt after trimming; no
    /// request is issued otherwise.
    pub fn validate(&self) -> Result<()> {
        match self {
            ExecuteRequest::Default => Ok(()),
            ExecuteRequest::Custom { prompt } => {
                if prompt.trim().is_empty() {
                    Err(DashboardError::invalid_input(
                        "prompt",
                        "please enter a prompt for the plan",
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }
}
