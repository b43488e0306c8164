use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::{bail, Context};
use chrono::Utc;
use launchboard_core::{build_query, update, AppState, FetchPhase, Msg, ResultsView};
use launchboard_engine::{Fetcher, ReqwestFetcher};
use launchboard_logging::{board_debug, board_info, board_warn};

use crate::cli::{Cli, Command, RenderArgs};
use crate::config::AppConfig;
use crate::effects::EffectRunner;
use crate::input::{self, InputCommand};
use crate::output::OutputTarget;
use crate::render;

/// Everything the dispatch loop reacts to.
pub enum HostEvent {
    Msg(Msg),
    Quit,
}

/// Result of applying the latest response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    Rendered { rows: usize },
    Failed(String),
}

pub fn run(cli: Cli, config: AppConfig) -> anyhow::Result<ExitCode> {
    let endpoint = cli
        .endpoint
        .clone()
        .unwrap_or_else(|| config.endpoint.clone());

    match cli.command {
        Command::Url(filters) => {
            println!("{}", build_query(&endpoint, &filters.to_filters()));
            Ok(ExitCode::SUCCESS)
        }
        Command::Fetch(args) => {
            let (state, output) = prepare(&endpoint, &config, &args);
            let fetcher = Arc::new(ReqwestFetcher::new(config.fetch_settings()));
            match run_once(state, fetcher, output)? {
                Settled::Rendered { .. } => Ok(ExitCode::SUCCESS),
                Settled::Failed(_) => Ok(ExitCode::FAILURE),
            }
        }
        Command::Watch(args) => {
            let (state, output) = prepare(&endpoint, &config, &args);
            let fetcher = Arc::new(ReqwestFetcher::new(config.fetch_settings()));
            run_watch(state, fetcher, output, BufReader::new(io::stdin()))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn prepare(endpoint: &str, config: &AppConfig, args: &RenderArgs) -> (AppState, OutputTarget) {
    let state = AppState::with_base_url(endpoint).with_filters(args.filters.to_filters());
    let path = args.output.as_deref().unwrap_or(config.output.as_path());
    let output = OutputTarget::from_path(path);
    (state, output)
}

/// Issues the page-load request and waits for its outcome.
pub(crate) fn run_once(
    state: AppState,
    fetcher: Arc<dyn Fetcher>,
    output: OutputTarget,
) -> anyhow::Result<Settled> {
    let (mut session, host_tx) = Session::start(state, fetcher, output)?;
    drop(host_tx);

    session.dispatch(Msg::PageLoaded)?;
    loop {
        match session.events.recv() {
            Ok(HostEvent::Msg(msg)) => {
                if let Some(settled) = session.dispatch(msg)? {
                    session.report(&settled);
                    return Ok(settled);
                }
            }
            Ok(HostEvent::Quit) => bail!("interrupted before the response arrived"),
            Err(_) => bail!("fetch engine stopped before the response arrived"),
        }
    }
}

/// Refreshes on page load and on every filter command read from `reader`.
pub(crate) fn run_watch<R>(
    state: AppState,
    fetcher: Arc<dyn Fetcher>,
    output: OutputTarget,
    reader: R,
) -> anyhow::Result<()>
where
    R: BufRead + Send + 'static,
{
    let (mut session, host_tx) = Session::start(state, fetcher, output)?;
    eprintln!("{}", input::HELP);
    spawn_input_reader(reader, host_tx);

    session.dispatch(Msg::PageLoaded)?;
    while let Ok(event) = session.events.recv() {
        match event {
            HostEvent::Msg(msg) => {
                if let Some(settled) = session.dispatch(msg)? {
                    session.report(&settled);
                }
            }
            HostEvent::Quit => break,
        }
    }
    Ok(())
}

fn spawn_input_reader<R>(reader: R, host_tx: mpsc::Sender<HostEvent>)
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    board_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            let event = match input::parse_line(&line) {
                InputCommand::Set { field, value } => {
                    HostEvent::Msg(Msg::FilterChanged { field, value })
                }
                InputCommand::Quit => break,
                InputCommand::Help => {
                    eprintln!("{}", input::HELP);
                    continue;
                }
                InputCommand::Empty => continue,
                InputCommand::Unknown(word) => {
                    board_warn!("Unknown command {:?}; type `help` for usage", word);
                    continue;
                }
            };
            if host_tx.send(event).is_err() {
                return;
            }
        }
        let _ = host_tx.send(HostEvent::Quit);
    });
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    output: OutputTarget,
    events: mpsc::Receiver<HostEvent>,
}

impl Session {
    fn start(
        state: AppState,
        fetcher: Arc<dyn Fetcher>,
        output: OutputTarget,
    ) -> anyhow::Result<(Self, mpsc::Sender<HostEvent>)> {
        let (host_tx, events) = mpsc::channel();
        let runner =
            EffectRunner::start(fetcher, host_tx.clone()).context("starting fetch engine")?;
        let session = Self {
            state,
            runner,
            output,
            events,
        };
        Ok((session, host_tx))
    }

    /// Applies one message; returns the outcome when it settled the latest request.
    fn dispatch(&mut self, msg: Msg) -> anyhow::Result<Option<Settled>> {
        let completion = match &msg {
            Msg::LaunchesLoaded { request_id, .. } | Msg::LaunchesFailed { request_id, .. } => {
                Some(*request_id)
            }
            _ => None,
        };
        if let Some(request_id) = completion {
            if !self.state.is_latest(request_id) {
                board_debug!(
                    "Discarding stale response for request {} (latest is {:?})",
                    request_id,
                    self.state.latest_request()
                );
            }
        }

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let changed = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);

        if !changed || completion.is_none() {
            return Ok(None);
        }

        let view = self.state.view();
        match view.phase {
            FetchPhase::Rendered => {
                let page = render::render_page(&view, &Utc::now().to_rfc3339());
                self.output
                    .write(&page)
                    .with_context(|| format!("writing results to {}", self.output.describe()))?;
                let rows = match &view.results {
                    Some(ResultsView::Table(table)) => table.rows.len(),
                    _ => 0,
                };
                board_info!("Rendered {} launches to {}", rows, self.output.describe());
                Ok(Some(Settled::Rendered { rows }))
            }
            FetchPhase::Failed => Ok(Some(Settled::Failed(
                view.last_failure.unwrap_or_default(),
            ))),
            FetchPhase::Idle | FetchPhase::Fetching => Ok(None),
        }
    }

    fn report(&self, settled: &Settled) {
        match settled {
            Settled::Rendered { rows: 0 } => {
                eprintln!("No results found. Page written to {}.", self.output.describe())
            }
            Settled::Rendered { rows } => {
                eprintln!("{rows} launch(es) written to {}.", self.output.describe())
            }
            Settled::Failed(reason) => {
                eprintln!("Refresh failed: {reason}. Previous results kept.")
            }
        }
    }
}
