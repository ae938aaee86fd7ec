//! The seam between the session orchestrator and the remote services.

use async_trait::async_trait;
use leadgen_core::{RawLead, SearchRequest};

use crate::client::LeadServiceClient;
use crate::error::ClientError;

/// The three remote operations a search session depends on.
///
/// [`LeadServiceClient`] is the HTTP implementation; tests substitute
/// in-memory fakes.
#[async_trait]
pub trait LeadBackend: Send + Sync {
    /// Runs a scrape and returns the raw leads (empty when the service
    /// reported none).
    async fn scrape(&self, request: &SearchRequest) -> Result<Vec<RawLead>, ClientError>;

    /// Records a search request in the history service.
    async fn save_request(&self, request: &SearchRequest) -> Result<(), ClientError>;

    /// Returns the request history exactly as the service rendered it.
    async fn previous_requests(&self) -> Result<String, ClientError>;
}

#[async_trait]
impl LeadBackend for LeadServiceClient {
    async fn scrape(&self, request: &SearchRequest) -> Result<Vec<RawLead>, ClientError> {
        LeadServiceClient::scrape(self, request).await
    }

    async fn save_request(&self, request: &SearchRequest) -> Result<(), ClientError> {
        LeadServiceClient::save_request(self, request).await
    }

    async fn previous_requests(&self) -> Result<String, ClientError> {
        LeadServiceClient::previous_requests(self).await
    }
}
