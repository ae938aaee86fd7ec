use leadgen_client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The scrape call failed; the session is left in [`crate::SearchPhase::Failed`].
    #[error("search failed: {0}")]
    Search(#[from] ClientError),

    /// Ranking was requested before any search produced results.
    #[error("no search results to rank")]
    NoResults,
}
