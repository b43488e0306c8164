use crate::{FetchPhase, Filters, LaunchRecord, RequestId};

/// Column labels of the results table, in display order.
pub const TABLE_HEADERS: [&str; 5] = [
    "Flight Number",
    "Mission Name",
    "Rocket Name",
    "Launch Year",
    "Status",
];

pub const NO_RESULTS_MESSAGE: &str = "No results found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub phase: FetchPhase,
    pub filters: Filters,
    /// URL the next refresh would request.
    pub url: String,
    pub latest_request: Option<RequestId>,
    /// `None` until the first response has been applied.
    pub results: Option<ResultsView>,
    pub last_failure: Option<String>,
    pub dirty: bool,
}

/// Contents of the results container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    NoResults,
    Table(TableView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: [&'static str; 5],
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub flight_number: String,
    pub mission_name: String,
    pub rocket_name: String,
    pub launch_year: String,
    pub status: LaunchStatus,
}

impl TableRow {
    /// Text of every column except Status.
    pub fn text_cells(&self) -> [&str; 4] {
        [
            &self.flight_number,
            &self.mission_name,
            &self.rocket_name,
            &self.launch_year,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStatus {
    Success,
    Failure,
}

impl LaunchStatus {
    /// A missing outcome counts as a failure.
    pub fn from_flag(launch_success: Option<bool>) -> Self {
        if launch_success.unwrap_or(false) {
            LaunchStatus::Success
        } else {
            LaunchStatus::Failure
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LaunchStatus::Success => "Success",
            LaunchStatus::Failure => "Failure",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            LaunchStatus::Success => "green",
            LaunchStatus::Failure => "red",
        }
    }
}

/// Builds the results container for a decoded response, preserving record order.
pub fn render_results(records: &[LaunchRecord]) -> ResultsView {
    if records.is_empty() {
        return ResultsView::NoResults;
    }

    let rows = records
        .iter()
        .map(|record| TableRow {
            flight_number: record.flight_number.to_string(),
            mission_name: record.mission_name.clone(),
            rocket_name: record.rocket_name.clone(),
            launch_year: record.launch_year.clone(),
            status: LaunchStatus::from_flag(record.launch_success),
        })
        .collect();

    ResultsView::Table(TableView {
        headers: TABLE_HEADERS,
        rows,
    })
}
