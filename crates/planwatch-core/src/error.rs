//! Error types for the dashboard client library.

use thiserror::Error;

/// Comprehensive error type for all dashboard client operations.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Transport-level request failures (connection, decode, etc.)
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered with an unexpected status code
    #[error("Backend returned {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A plan is already being executed in this session
    #[error("A plan is already being executed. Please wait for it to complete.")]
    ExecutionInProgress,
}

impl DashboardError {
    /// Creates a transport error for the given request URL.
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        DashboardError::Http {
            url: url.into(),
            source,
        }
    }

    /// Creates a status error for a non-success response.
    pub fn status(url: impl Into<String>, status: reqwest::StatusCode) -> Self {
        DashboardError::Status {
            url: url.into(),
            status,
        }
    }

    /// Creates an input validation error for a named field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DashboardError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for dashboard client operations
pub type Result<T> = std::result::Result<T, DashboardError>;
