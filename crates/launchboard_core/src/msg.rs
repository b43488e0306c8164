#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Initial load of the page; triggers one refresh.
    PageLoaded,
    /// User edited one of the filter controls. Every change refreshes.
    FilterChanged {
        field: crate::FilterField,
        value: String,
    },
    /// Engine delivered decoded launches for a request.
    LaunchesLoaded {
        request_id: crate::RequestId,
        records: Vec<crate::LaunchRecord>,
    },
    /// Engine failed to fetch or decode the response for a request.
    LaunchesFailed {
        request_id: crate::RequestId,
        reason: String,
    },
}
