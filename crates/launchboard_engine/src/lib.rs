//! Launchboard engine: HTTP fetching, response decoding and output persistence.
mod decode;
mod engine;
mod fetch;
mod persist;
mod types;

pub use decode::{decode_launches, ApiLaunch, ApiRocket};
pub use engine::{EngineError, EngineHandle};
pub use fetch::{ChannelProgressSink, FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use types::{EngineEvent, FailureKind, FetchError, FetchOutput, FetchProgress, RequestId};
