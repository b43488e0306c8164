use crate::query::{build_query, FilterField, Filters, DEFAULT_ENDPOINT};
use crate::view_model::{render_results, AppViewModel, ResultsView};

pub type RequestId = u64;

/// One launch as shown in the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRecord {
    pub flight_number: u32,
    pub mission_name: String,
    pub rocket_name: String,
    pub launch_year: String,
    /// `None` for launches the API has no outcome for yet.
    pub launch_success: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Fetching,
    Rendered,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    base_url: String,
    filters: Filters,
    next_request_id: RequestId,
    latest_request: Option<RequestId>,
    phase: FetchPhase,
    results: Option<ResultsView>,
    last_failure: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_ENDPOINT)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            filters: Filters::default(),
            next_request_id: 1,
            latest_request: None,
            phase: FetchPhase::Idle,
            results: None,
            last_failure: None,
            dirty: false,
        }
    }

    /// Seeds the filter controls before the first refresh.
    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            filters: self.filters.clone(),
            url: build_query(&self.base_url, &self.filters),
            latest_request: self.latest_request,
            results: self.results.clone(),
            last_failure: self.last_failure.clone(),
            dirty: self.dirty,
        }
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest_request
    }

    /// True when a completion for `request_id` would be applied.
    pub fn is_latest(&self, request_id: RequestId) -> bool {
        self.latest_request == Some(request_id)
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_filter(&mut self, field: FilterField, value: &str) {
        self.filters.set(field, value);
        self.mark_dirty();
    }

    /// Allocates the next request id and builds its URL.
    pub(crate) fn issue_request(&mut self) -> (RequestId, String) {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.latest_request = Some(request_id);
        self.phase = FetchPhase::Fetching;
        self.mark_dirty();
        (request_id, build_query(&self.base_url, &self.filters))
    }

    /// Replaces the results container. Completions for superseded requests are ignored.
    pub(crate) fn apply_records(
        &mut self,
        request_id: RequestId,
        records: &[LaunchRecord],
    ) -> bool {
        if !self.is_latest(request_id) {
            return false;
        }
        self.results = Some(render_results(records));
        self.last_failure = None;
        self.phase = FetchPhase::Rendered;
        self.mark_dirty();
        true
    }

    /// Records a failure. The results container keeps its previous contents.
    pub(crate) fn apply_failure(&mut self, request_id: RequestId, reason: String) -> bool {
        if !self.is_latest(request_id) {
            return false;
        }
        self.last_failure = Some(reason);
        self.phase = FetchPhase::Failed;
        self.mark_dirty();
        true
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
