//! Core client library for the planwatch execution dashboard.
//!
//! This crate provides everything the terminal dashboard needs short of a
//! terminal: typed models of the backend's wire format, an HTTP gateway to
//! its REST API, the session state that drives incremental polling, the
//! operation handlers shared by all commands, and display wrappers for
//! rendering.
//!
//! # Architecture
//!
//! ```text
//! Interface (CLI) → Handlers → ApiClient  → Models
//!                      ↕
//!                 SessionState
//! ```
//!
//! - **Models** ([`models`]): transient wire-facing data, nothing persisted
//! - **ApiClient** ([`api`]): one method per backend endpoint, no retries
//! - **SessionState** ([`session`]): watermarks, plan change-detection key,
//!   executing flag — owned by the view loop, passed into handlers
//! - **Handlers** ([`handlers`]): complete workflows (poll, execute, fix
//!   history) reconciling API responses with session state
//! - **Display** ([`display`]): wrapper types producing terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use planwatch_core::{
//!     handlers::{handle_refresh_plan, PlanUpdate},
//!     ApiClient, SessionState,
//! };
//!
//! # async fn example() -> planwatch_core::Result<()> {
//! let api = ApiClient::new("http://127.0.0.1:8080");
//! let mut session = SessionState::new();
//!
//! match handle_refresh_plan(&api, &mut session).await? {
//!     PlanUpdate::Loaded { id, plan } => {
//!         println!("plan {id}: {} top-level tasks", plan.top_level_tasks.len());
//!     }
//!     PlanUpdate::Cleared => println!("no active plan"),
//!     PlanUpdate::Unchanged => {}
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod display;
pub mod error;
pub mod handlers;
pub mod models;
pub mod params;
pub mod session;

// Re-export commonly used types
pub use api::ApiClient;
pub use display::{FixLogLine, LocalTime, LogLine, PlanTree};
pub use error::{DashboardError, Result};
pub use models::{
    CurrentPlan, FixLogEntry, LogCategory, LogEntry, LogLevel, Plan, PlanFixes, Task, TaskStatus,
};
pub use params::{ExecuteRequest, LogStream};
pub use session::{PlanTransition, SessionState, COMPLETION_MARKER};
