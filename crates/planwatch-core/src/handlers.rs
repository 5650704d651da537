//! Operation handlers shared by the one-shot commands and the watch loop.
//!
//! Each handler encapsulates one complete dashboard workflow over the pair
//! `(&ApiClient, &mut SessionState)`, so every interface reconciles state
//! the same way. Handlers return data; rendering and error logging stay with
//! the caller.

use crate::{
    api::ApiClient,
    error::{DashboardError, Result},
    models::{FixLogEntry, Plan},
    params::ExecuteRequest,
    session::{PlanTransition, SessionState},
};

/// Outcome of a plan poll tick.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanUpdate {
    /// The active plan id is unchanged; nothing was fetched
    Unchanged,
    /// A new plan became active and its tree was fetched
    Loaded {
        /// Identifier of the newly active plan
        id: String,
        /// The plan's full task tree
        plan: Plan,
    },
    /// No plan is active anymore; the display should show the placeholder
    Cleared,
}

/// Poll the active plan id and fetch the tree when it changed.
///
/// An unchanged id never re-fetches or re-renders the tree. A 404 from the
/// current-plan endpoint clears the displayed plan. Note that the session's
/// change-detection key is updated before the tree fetch: if fetching the
/// tree fails, the error is returned and the fetch is not repeated until
/// the id changes again.
pub async fn handle_refresh_plan(
    api: &ApiClient,
    session: &mut SessionState,
) -> Result<PlanUpdate> {
    let observed = api.current_plan_id().await?;
    match session.observe_plan_id(observed.as_deref()) {
        PlanTransition::Unchanged => Ok(PlanUpdate::Unchanged),
        PlanTransition::Cleared => Ok(PlanUpdate::Cleared),
        PlanTransition::Changed(id) => {
            let plan = api.plan(&id).await?;
            Ok(PlanUpdate::Loaded { id, plan })
        }
    }
}

/// Start a plan execution (default or custom).
///
/// Validation happens before any network traffic: an empty prompt issues no
/// request, and a session that is already executing is refused. The
/// executing flag is set optimistically and rolled back if the request
/// fails; on success the log watermarks are reset for the fresh execution.
pub async fn handle_execute(
    api: &ApiClient,
    session: &mut SessionState,
    request: &ExecuteRequest,
) -> Result<serde_json::Value> {
    request.validate()?;
    if session.executing() {
        return Err(DashboardError::ExecutionInProgress);
    }

    session.begin_execution();
    let result = match request {
        ExecuteRequest::Default => api.execute_default().await,
        ExecuteRequest::Custom { prompt } => api.execute_custom(prompt.trim()).await,
    };

    match result {
        Ok(ack) => {
            session.reset_logs();
            Ok(ack)
        }
        Err(e) => {
            session.rollback_execution();
            Err(e)
        }
    }
}

/// Fetch the fix history for the session's active plan.
///
/// Returns `Ok(None)` when no plan is active (nothing is fetched). When the
/// plan-specific endpoint fails, the general fix-log endpoint serves as a
/// fallback.
pub async fn handle_fix_history(
    api: &ApiClient,
    session: &SessionState,
) -> Result<Option<Vec<FixLogEntry>>> {
    let Some(plan_id) = session.current_plan_id() else {
        return Ok(None);
    };
    match api.plan_fixes(plan_id).await {
        Ok(fixes) => Ok(Some(fixes)),
        Err(_) => api.fix_logs().await.map(Some),
    }
}

/// List all plan identifiers known to the backend.
pub async fn handle_list_plans(api: &ApiClient) -> Result<Vec<String>> {
    api.list_plan_ids().await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Points at a reserved-port base URL; the guard tests below must fail
    // before any request is attempted, so the address is never contacted.
    fn offline_api() -> ApiClient {
        ApiClient::new("http://127.0.0.1:0")
    }

    #[tokio::test]
    async fn test_execute_rejects_empty_prompt_without_request() {
        let api = offline_api();
        let mut session = SessionState::new();
        let request = ExecuteRequest::Custom {
            prompt: "   ".to_string(),
        };

        let err = handle_execute(&api, &mut session, &request)
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::InvalidInput { ref field, .. } if field == "prompt"));
        // The flag must be untouched by a rejected action
        assert!(!session.executing());
    }

    #[tokio::test]
    async fn test_execute_refuses_reentrancy() {
        let api = offline_api();
        let mut session = SessionState::new();
        session.begin_execution();

        let err = handle_execute(&api, &mut session, &ExecuteRequest::Default)
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::ExecutionInProgress));
        assert!(session.executing());
    }

    #[tokio::test]
    async fn test_fix_history_without_active_plan_fetches_nothing() {
        let api = offline_api();
        let session = SessionState::new();

        let fixes = handle_fix_history(&api, &session).await.unwrap();
        assert!(fixes.is_none());
    }
}
