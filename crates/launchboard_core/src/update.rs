use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded => refresh(&mut state),
        Msg::FilterChanged { field, value } => {
            // No debouncing: every edit issues its own request, even when the
            // trimmed value did not change.
            state.set_filter(field, &value);
            refresh(&mut state)
        }
        Msg::LaunchesLoaded {
            request_id,
            records,
        } => {
            state.apply_records(request_id, &records);
            Vec::new()
        }
        Msg::LaunchesFailed { request_id, reason } => {
            state.apply_failure(request_id, reason);
            Vec::new()
        }
    };

    (state, effects)
}

fn refresh(state: &mut AppState) -> Vec<Effect> {
    let (request_id, url) = state.issue_request();
    vec![Effect::FetchLaunches { request_id, url }]
}
