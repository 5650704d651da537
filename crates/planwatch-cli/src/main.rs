//! Planwatch CLI Application
//!
//! Terminal dashboard for a plan-executor backend: polls the backend's REST
//! API, renders the hierarchical execution plan, and tails the execution log
//! streams.

mod args;
mod cli;
mod renderer;
mod watch;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, WatchArgs};
use log::info;
use planwatch_core::ApiClient;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { base_url, no_color, command } = Args::parse();

    let api = ApiClient::new(base_url);
    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(api, renderer);

    info!("Planwatch started");

    match command {
        Some(Watch(args)) => cli.watch(args).await,
        Some(Run(args)) => cli.run(args).await,
        Some(Plan(args)) => cli.show_plan(args).await,
        Some(Plans) => cli.list_plans().await,
        Some(Logs(args)) => cli.show_logs(args).await,
        Some(Fixes) => cli.show_fixes().await,
        None => cli.watch(WatchArgs { interval_seconds: 1 }).await,
    }
}
