use std::sync::{mpsc, Arc};
use std::thread;

use launchboard_logging::{board_debug, board_info};

use crate::decode::decode_launches;
use crate::fetch::{ChannelProgressSink, FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, RequestId};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    Fetch { request_id: RequestId, url: String },
}

/// Handle to the background fetch runtime.
///
/// Every fetch runs as its own task, so several may be in flight at once and
/// completions are delivered in the order they resolve, not the order issued.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Starts the runtime thread. Progress and completions are sent to `event_tx`.
    pub fn new(
        settings: FetchSettings,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Result<Self, EngineError> {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)), event_tx)
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn Fetcher>,
        event_tx: mpsc::Sender<EngineEvent>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
            board_debug!("engine command channel closed; shutting down runtime");
        });

        Ok(Self { cmd_tx })
    }

    pub fn fetch(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request_id,
            url: url.into(),
        });
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { request_id, url } => {
            board_info!("request {} GET {}", request_id, url);
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = fetcher
                .fetch(request_id, &url, &sink)
                .await
                .and_then(|output| decode_launches(&output.bytes));
            let _ = event_tx.send(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}
