//! Command argument structures and the command dispatcher.
//!
//! Argument structs carry the clap-specific derives and convert into core
//! parameter types via `From`, keeping `planwatch-core` free of CLI
//! framework concerns. The [`Cli`] dispatcher owns the API client and the
//! terminal renderer and maps each command onto a core handler.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::info;
use planwatch_core::{
    display::{FixLogLine, LogLine, PlanTree},
    handlers::{
        handle_execute, handle_fix_history, handle_list_plans, handle_refresh_plan, PlanUpdate,
    },
    ApiClient, ExecuteRequest, LogStream, SessionState,
};

use crate::{renderer::TerminalRenderer, watch::Watcher};

/// Watch the live execution dashboard
#[derive(Args)]
pub struct WatchArgs {
    /// Poll interval in seconds
    #[arg(long, default_value_t = 1)]
    pub interval_seconds: u64,
}

/// Start a plan execution and follow its logs
///
/// Without a prompt the backend's default plan is started; with a prompt a
/// custom plan is generated from it. The command follows the log streams
/// until the backend reports completion unless `--no-follow` is given.
#[derive(Args)]
pub struct RunArgs {
    /// Free-text prompt for a custom plan (omit to run the default plan)
    pub prompt: Option<String>,
    /// Only start the execution, do not follow its logs
    #[arg(long)]
    pub no_follow: bool,
    /// Poll interval in seconds while following
    #[arg(long, default_value_t = 1)]
    pub interval_seconds: u64,
}

/// Show the current plan tree
#[derive(Args)]
pub struct PlanArgs {
    /// Expand each task's content block (status, commands, criteria)
    #[arg(long)]
    pub detailed: bool,
}

/// Fetch new log entries once
#[derive(Args)]
pub struct LogsArgs {
    /// Log stream to read
    #[arg(long, value_enum, default_value_t = LogStreamArg::All)]
    pub stream: LogStreamArg,
    /// Only fetch entries with ids greater than this watermark
    #[arg(long, default_value_t = 0)]
    pub since: u64,
}

/// Command-line argument representation of the backend log streams
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogStreamArg {
    /// System events of the plan executor
    System,
    /// LLM request/response conversation entries
    Conversation,
    /// The merged single-stream view
    All,
}

impl From<LogStreamArg> for LogStream {
    fn from(val: LogStreamArg) -> Self {
        match val {
            LogStreamArg::System => LogStream::System,
            LogStreamArg::Conversation => LogStream::Conversation,
            LogStreamArg::All => LogStream::All,
        }
    }
}

impl std::fmt::Display for LogStreamArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogStreamArg::System => write!(f, "system"),
            LogStreamArg::Conversation => write!(f, "conversation"),
            LogStreamArg::All => write!(f, "all"),
        }
    }
}

/// Command dispatcher holding the API client and renderer.
pub struct Cli {
    api: ApiClient,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a dispatcher for the given backend and renderer.
    pub fn new(api: ApiClient, renderer: TerminalRenderer) -> Self {
        Self { api, renderer }
    }

    /// Run the live dashboard until interrupted.
    pub async fn watch(&self, args: WatchArgs) -> Result<()> {
        let mut session = SessionState::new();
        Watcher::new(&self.api, &self.renderer, args.interval_seconds)
            .run(&mut session)
            .await
    }

    /// Start an execution, then follow its logs to completion.
    pub async fn run(&self, args: RunArgs) -> Result<()> {
        let mut session = SessionState::new();
        let request = ExecuteRequest::from_prompt(args.prompt);

        let ack = handle_execute(&self.api, &mut session, &request)
            .await
            .context("Failed to start execution")?;
        info!("Execution started: {ack}");

        if args.no_follow {
            self.renderer.render("Execution started.\n")?;
            return Ok(());
        }

        self.renderer.render("Starting execution...\n")?;
        Watcher::new(&self.api, &self.renderer, args.interval_seconds)
            .until_complete()
            .run(&mut session)
            .await
    }

    /// Fetch and render the current plan tree once.
    pub async fn show_plan(&self, args: PlanArgs) -> Result<()> {
        let mut session = SessionState::new();
        match handle_refresh_plan(&self.api, &mut session).await? {
            PlanUpdate::Loaded { id, plan } => {
                let tree = PlanTree::new(&id, &plan.top_level_tasks);
                let tree = if args.detailed { tree.detailed() } else { tree };
                self.renderer.render(&tree.to_string())
            }
            PlanUpdate::Cleared | PlanUpdate::Unchanged => self
                .renderer
                .render("No active plan. Use `pw run` to start execution.\n"),
        }
    }

    /// List all plan ids known to the backend.
    pub async fn list_plans(&self) -> Result<()> {
        let ids = handle_list_plans(&self.api).await?;
        if ids.is_empty() {
            return self.renderer.render("No plans found.\n");
        }

        let mut output = String::from("# Plans\n\n");
        for id in &ids {
            output.push_str(&format!("- {id}\n"));
        }
        self.renderer.render(&output)
    }

    /// Fetch log entries newer than the given watermark, once.
    pub async fn show_logs(&self, args: LogsArgs) -> Result<()> {
        let entries = self
            .api
            .logs_since(args.stream.into(), args.since)
            .await?;
        if entries.is_empty() {
            return self.renderer.render("No new log entries.\n");
        }

        for entry in &entries {
            self.renderer
                .render_log_line(entry.category(), &LogLine(entry).to_string());
        }
        Ok(())
    }

    /// Fetch and render the current plan's fix history once.
    pub async fn show_fixes(&self) -> Result<()> {
        let mut session = SessionState::new();
        let observed = self
            .api
            .current_plan_id()
            .await
            .context("Failed to fetch current plan ID")?;
        session.observe_plan_id(observed.as_deref());

        match handle_fix_history(&self.api, &session).await? {
            None => self.renderer.render("No active plan.\n"),
            Some(fixes) if fixes.is_empty() => self
                .renderer
                .render("No fix history available for this plan.\n"),
            Some(fixes) => {
                for fix in &fixes {
                    self.renderer
                        .render_log_line(fix.category(), &FixLogLine(fix).to_string());
                }
                Ok(())
            }
        }
    }
}
