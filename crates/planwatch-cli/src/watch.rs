//! The timer-driven dashboard loop.

use std::time::Duration;

use anyhow::Result;
use log::{error, info};
use planwatch_core::{
    display::{LogLine, PlanTree},
    models::{LogEntry, Plan},
    ApiClient, LogStream, PlanTransition, Result as CoreResult, SessionState,
};
use tokio::{
    signal,
    sync::mpsc::{self, UnboundedSender},
    time,
};

use crate::renderer::TerminalRenderer;

/// Placeholder shown when the backend stops reporting an active plan.
const NO_PLAN_PANEL: &str = "No active plan. Use `pw run` to start execution.\n";

/// Streams polled by the dashboard on every tick.
const POLLED_STREAMS: [LogStream; 2] = [LogStream::System, LogStream::Conversation];

/// One backend response, delivered to the state-owning loop.
enum PollEvent {
    PlanId(CoreResult<Option<String>>),
    Plan(String, CoreResult<Plan>),
    Logs(LogStream, CoreResult<Vec<LogEntry>>),
}

/// Polls the backend on a fixed period and renders what comes back.
///
/// Every tick fires the idempotent reads (current plan id and both split log
/// streams) as detached tasks; responses come back over a channel and are
/// applied to the session in arrival order. No tick waits for a previous
/// tick's requests to settle, so overlapping in-flight reads are possible
/// and a late response simply wins — the session's monotonic watermarks keep
/// a stale log response from rewinding the fetch position.
///
/// Poll failures are logged and swallowed; the next tick tries again.
pub struct Watcher<'a> {
    api: &'a ApiClient,
    renderer: &'a TerminalRenderer,
    interval: Duration,
    until_complete: bool,
}

impl<'a> Watcher<'a> {
    /// Create a watcher polling every `interval_seconds`.
    pub fn new(api: &'a ApiClient, renderer: &'a TerminalRenderer, interval_seconds: u64) -> Self {
        Self {
            api,
            renderer,
            interval: Duration::from_secs(interval_seconds),
            until_complete: false,
        }
    }

    /// Stop the loop once the completion marker is observed.
    pub fn until_complete(mut self) -> Self {
        self.until_complete = true;
        self
    }

    /// Drive the loop until Ctrl-C, or until completion when configured via
    /// [`Self::until_complete`].
    pub async fn run(&self, session: &mut SessionState) -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = time::interval(self.interval);

        info!(
            "watching {} every {}s",
            self.api.base_url(),
            self.interval.as_secs()
        );
        self.renderer
            .render("*Waiting for log output — press Ctrl-C to stop.*\n")?;

        loop {
            tokio::select! {
                _ = ticker.tick() => self.spawn_polls(&tx, session),
                Some(event) = rx.recv() => {
                    if self.apply(event, &tx, session)? {
                        break;
                    }
                }
                _ = signal::ctrl_c() => {
                    info!("interrupted");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Fire one tick's reads without awaiting them.
    fn spawn_polls(&self, tx: &UnboundedSender<PollEvent>, session: &SessionState) {
        let api = self.api.clone();
        let plan_tx = tx.clone();
        tokio::spawn(async move {
            let _ = plan_tx.send(PollEvent::PlanId(api.current_plan_id().await));
        });

        for stream in POLLED_STREAMS {
            let api = self.api.clone();
            let tx = tx.clone();
            let since = session.watermark(stream);
            tokio::spawn(async move {
                let _ = tx.send(PollEvent::Logs(stream, api.logs_since(stream, since).await));
            });
        }
    }

    /// Apply one response to the session; returns true when the loop is done.
    fn apply(
        &self,
        event: PollEvent,
        tx: &UnboundedSender<PollEvent>,
        session: &mut SessionState,
    ) -> Result<bool> {
        match event {
            PollEvent::PlanId(Ok(observed)) => {
                match session.observe_plan_id(observed.as_deref()) {
                    PlanTransition::Changed(id) => {
                        let api = self.api.clone();
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            let plan = api.plan(&id).await;
                            let _ = tx.send(PollEvent::Plan(id, plan));
                        });
                    }
                    PlanTransition::Cleared => self.renderer.render(NO_PLAN_PANEL)?,
                    PlanTransition::Unchanged => {}
                }
            }
            PollEvent::PlanId(Err(e)) => error!("Error fetching plan ID: {e}"),
            PollEvent::Plan(id, Ok(plan)) => {
                self.renderer
                    .render(&PlanTree::new(&id, &plan.top_level_tasks).to_string())?;
            }
            PollEvent::Plan(id, Err(e)) => {
                error!("Error fetching plan {id}: {e}");
                self.renderer.render("Error loading plan.\n")?;
            }
            PollEvent::Logs(stream, Ok(entries)) => {
                let completed = session.absorb_entries(stream, &entries);
                for entry in &entries {
                    let line = format!("{} │ {}", stream.label(), LogLine(entry));
                    self.renderer.render_log_line(entry.category(), &line);
                }
                if completed {
                    info!("plan execution completed");
                    if self.until_complete {
                        return Ok(true);
                    }
                }
            }
            PollEvent::Logs(stream, Err(e)) => {
                error!("Error fetching {} logs: {e}", stream.label());
            }
        }
        Ok(false)
    }
}
