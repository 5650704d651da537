//! Plan model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::Task;

/// Represents the full task tree of an execution plan.
///
/// The plan identifier is not part of this payload; it is obtained separately
/// from the current-plan endpoint and used as the change-detection key. The
/// tree is replaced wholesale whenever that identifier changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Ordered top-level tasks of the plan
    #[serde(default)]
    pub top_level_tasks: Vec<Task>,
}

/// Response body of the current-plan endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPlan {
    /// Identifier of the currently active plan (opaque, comparable)
    pub plan_id: String,
}
