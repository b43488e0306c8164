use std::sync::{mpsc, Arc};
use std::thread;

use launchboard_core::{Effect, LaunchRecord, Msg};
use launchboard_engine::{ApiLaunch, EngineError, EngineEvent, EngineHandle, Fetcher};
use launchboard_logging::{board_debug, board_error, board_trace};

use crate::app::HostEvent;

/// Executes core effects on the engine and feeds completions back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn start(
        fetcher: Arc<dyn Fetcher>,
        host_tx: mpsc::Sender<HostEvent>,
    ) -> Result<Self, EngineError> {
        let (event_tx, event_rx) = mpsc::channel();
        let engine = EngineHandle::with_fetcher(fetcher, event_tx)?;
        spawn_event_pump(event_rx, host_tx);
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchLaunches { request_id, url } => {
                    board_debug!("FetchLaunches request_id={} url_len={}", request_id, url.len());
                    self.engine.fetch(request_id, url);
                }
            }
        }
    }
}

fn spawn_event_pump(event_rx: mpsc::Receiver<EngineEvent>, host_tx: mpsc::Sender<HostEvent>) {
    thread::spawn(move || {
        for event in event_rx {
            match event {
                EngineEvent::Progress(progress) => {
                    board_trace!(
                        "request {} downloaded {} bytes",
                        progress.request_id,
                        progress.bytes
                    );
                }
                EngineEvent::FetchCompleted { request_id, result } => {
                    let msg = match result {
                        Ok(launches) => Msg::LaunchesLoaded {
                            request_id,
                            records: launches.into_iter().map(map_launch).collect(),
                        },
                        Err(err) => {
                            board_error!("Error fetching data for request {}: {}", request_id, err);
                            Msg::LaunchesFailed {
                                request_id,
                                reason: err.to_string(),
                            }
                        }
                    };
                    if host_tx.send(HostEvent::Msg(msg)).is_err() {
                        break;
                    }
                }
            }
        }
    });
}

fn map_launch(launch: ApiLaunch) -> LaunchRecord {
    LaunchRecord {
        flight_number: launch.flight_number,
        mission_name: launch.mission_name,
        rocket_name: launch.rocket.rocket_name,
        launch_year: launch.launch_year,
        launch_success: launch.launch_success,
    }
}
