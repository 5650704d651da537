use clap::{Parser, Subcommand};

use crate::cli::{LogsArgs, PlanArgs, RunArgs, WatchArgs};

/// Main command-line interface for the planwatch dashboard
///
/// Planwatch is a terminal dashboard for a plan-executor backend. It polls
/// the backend's REST API, renders the hierarchical execution plan, and
/// tails the execution log streams. Plans are started with `run` and
/// observed with `watch`; the remaining commands are one-shot reads.
#[derive(Parser)]
#[command(version, about, name = "pw")]
pub struct Args {
    /// Base URL of the plan-executor backend
    #[arg(long, global = true, default_value = "http://127.0.0.1:8080")]
    pub base_url: String,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the planwatch CLI
///
/// Without a subcommand, `pw` behaves like `pw watch`.
#[derive(Subcommand)]
pub enum Commands {
    /// Watch the live execution dashboard
    #[command(alias = "w")]
    Watch(WatchArgs),
    /// Start a plan execution and follow its logs
    #[command(alias = "r")]
    Run(RunArgs),
    /// Show the current plan tree
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// List all plan ids known to the backend
    Plans,
    /// Fetch new log entries once
    #[command(alias = "l")]
    Logs(LogsArgs),
    /// Show the fix history for the current plan
    #[command(alias = "f")]
    Fixes,
}
