//! Typed HTTP gateway to the plan-executor backend.
//!
//! One method per backend endpoint, each returning deserialized domain
//! models. Every call is terminal-per-failure: there is no retry, no
//! backoff, and deliberately no request timeout (the backend defines none;
//! callers decide how to surface errors). A 404 from the current-plan
//! endpoint is the valid "no active plan" state, not an error.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    error::{DashboardError, Result},
    models::{CurrentPlan, FixLogEntry, LogEntry, Plan, PlanFixes},
    params::LogStream,
};

/// Client for the backend's REST API.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// The configured backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a response body, requiring a success status.
    async fn read_json<T: DeserializeOwned>(url: &str, response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::status(url, status));
        }
        response
            .json()
            .await
            .map_err(|e| DashboardError::http(url, e))
    }

    /// Fetch the identifier of the currently active plan.
    ///
    /// Returns `Ok(None)` when the backend reports no active plan (404).
    pub async fn current_plan_id(&self) -> Result<Option<String>> {
        let url = self.url("/api/plan/current");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::http(&url, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let current: CurrentPlan = Self::read_json(&url, response).await?;
        Ok(Some(current.plan_id))
    }

    /// Fetch the full task tree of a plan.
    pub async fn plan(&self, id: &str) -> Result<Plan> {
        let url = self.url(&format!("/api/plan/{id}"));
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::http(&url, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DashboardError::PlanNotFound { id: id.to_string() });
        }
        Self::read_json(&url, response).await
    }

    /// List all plan identifiers known to the backend.
    pub async fn list_plan_ids(&self) -> Result<Vec<String>> {
        let url = self.url("/api/plan/list");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::http(&url, e))?;
        Self::read_json(&url, response).await
    }

    /// Fetch log entries with ids strictly greater than `since`.
    ///
    /// Entries arrive ordered by id; an empty vector means nothing new.
    pub async fn logs_since(&self, stream: LogStream, since: u64) -> Result<Vec<LogEntry>> {
        let url = self.url(stream.path());
        let response = self
            .http
            .get(&url)
            .query(&[("since", since)])
            .send()
            .await
            .map_err(|e| DashboardError::http(&url, e))?;
        Self::read_json(&url, response).await
    }

    /// Start the backend's default plan.
    ///
    /// The acknowledgement body is opaque to the client and only logged.
    pub async fn execute_default(&self) -> Result<serde_json::Value> {
        let url = self.url("/api/execute");
        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|e| DashboardError::http(&url, e))?;
        Self::read_json(&url, response).await
    }

    /// Start a plan generated from a free-text prompt.
    ///
    /// The prompt travels URL-encoded as a query parameter, matching the
    /// backend's contract.
    pub async fn execute_custom(&self, prompt: &str) -> Result<serde_json::Value> {
        let url = self.url("/api/execute/custom");
        let response = self
            .http
            .post(&url)
            .query(&[("prompt", prompt)])
            .send()
            .await
            .map_err(|e| DashboardError::http(&url, e))?;
        Self::read_json(&url, response).await
    }

    /// Fetch the fix history recorded for a specific plan.
    pub async fn plan_fixes(&self, id: &str) -> Result<Vec<FixLogEntry>> {
        let url = self.url(&format!("/api/plan-fixes/{id}"));
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::http(&url, e))?;
        let fixes: PlanFixes = Self::read_json(&url, response).await?;
        Ok(fixes.fix_logs)
    }

    /// Fetch the plan-agnostic fix log (fallback endpoint).
    pub async fn fix_logs(&self) -> Result<Vec<FixLogEntry>> {
        let url = self.url("/api/logs/fixes");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::http(&url, e))?;
        Self::read_json(&url, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let api = ApiClient::new("http://localhost:8080/");
        assert_eq!(api.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_url_joins_path() {
        let api = ApiClient::new("http://localhost:8080");
        assert_eq!(api.url("/api/plan/current"), "http://localhost:8080/api/plan/current");
        assert_eq!(api.url("/api/plan/42"), "http://localhost:8080/api/plan/42");
    }

    #[test]
    fn test_stream_paths() {
        let api = ApiClient::new("http://localhost:8080");
        assert_eq!(
            api.url(LogStream::System.path()),
            "http://localhost:8080/api/logs/system"
        );
        assert_eq!(
            api.url(LogStream::Conversation.path()),
            "http://localhost:8080/api/logs/conversation"
        );
        assert_eq!(api.url(LogStream::All.path()), "http://localhost:8080/api/logs");
    }
}
