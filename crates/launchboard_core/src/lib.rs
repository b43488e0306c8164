//! Launchboard core: pure state machine, query builder and view-model helpers.
mod effect;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use query::{build_query, FilterField, Filters, DEFAULT_ENDPOINT};
pub use state::{AppState, FetchPhase, LaunchRecord, RequestId};
pub use update::update;
pub use view_model::{
    render_results, AppViewModel, LaunchStatus, ResultsView, TableRow, TableView,
    NO_RESULTS_MESSAGE, TABLE_HEADERS,
};
