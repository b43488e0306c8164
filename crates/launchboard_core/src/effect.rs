#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one GET against `url`; the completion must echo `request_id`.
    FetchLaunches {
        request_id: crate::RequestId,
        url: String,
    },
}
