use crate::{backend::client::BackendClient, error::ApiError, types::TimelineSnapshot};

impl BackendClient {
    /// Fetches the per-period listening statistics as one whole snapshot.
    /// There is no partial-period merging; the mapping arrives in the order
    /// the backend emits it.
    pub async fn timeline(&self, token: &str) -> Result<TimelineSnapshot, ApiError> {
        self.get_json("/api/music-timeline", Some(token)).await
    }
}
