//! HTTP client for the scrape and request-history services.
//!
//! The two services live on different hosts. Each call is attempted exactly
//! once; the `reqwest` client carries a request timeout so no call can hang
//! indefinitely.

use std::time::Duration;

use leadgen_core::{AppConfig, RawLead, SearchRequest};
use reqwest::{Client, Response, Url};

use crate::error::ClientError;
use crate::types::{SaveRequestBody, ScrapeResponse};

const SCRAPE_PATH: &str = "scrape";
const SAVE_REQUEST_PATH: &str = "saverequest";
const PREVIOUS_REQUESTS_PATH: &str = "getpreviousrequests";

/// Client for the scraping service and the request-history service.
///
/// Use [`LeadServiceClient::from_config`] in the binary or
/// [`LeadServiceClient::new`] to point both services at a mock server in
/// tests.
#[derive(Debug, Clone)]
pub struct LeadServiceClient {
    client: Client,
    scrape_base: Url,
    history_base: Url,
}

impl LeadServiceClient {
    /// Creates a client with explicit base URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if either
    /// base URL does not parse.
    pub fn new(
        scrape_base_url: &str,
        history_base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            scrape_base: parse_base_url(scrape_base_url)?,
            history_base: parse_base_url(history_base_url)?,
        })
    }

    /// Creates a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// Same as [`LeadServiceClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.scrape_base_url,
            &config.history_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Sends `POST /scrape` with the search payload and returns the leads.
    ///
    /// A response without a `results` field yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not the expected JSON.
    pub async fn scrape(&self, request: &SearchRequest) -> Result<Vec<RawLead>, ClientError> {
        let url = endpoint(&self.scrape_base, SCRAPE_PATH)?;
        tracing::debug!(
            business_name = %request.business_name,
            location = %request.location,
            "requesting scrape"
        );

        let response = self.client.post(url.clone()).json(request).send().await?;
        let body = check_status(response, &url)?.text().await?;
        let parsed: ScrapeResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        let leads = parsed.into_leads();
        tracing::info!(count = leads.len(), "scrape returned leads");
        Ok(leads)
    }

    /// Sends `POST /saverequest` with `{"request": "<serialized payload>"}`.
    ///
    /// The response body is ignored.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Serialize`] if the payload cannot be encoded.
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::UnexpectedStatus`] on any non-2xx status.
    pub async fn save_request(&self, request: &SearchRequest) -> Result<(), ClientError> {
        let url = endpoint(&self.history_base, SAVE_REQUEST_PATH)?;
        let body = SaveRequestBody {
            request: serde_json::to_string(request).map_err(ClientError::Serialize)?,
        };

        let response = self.client.post(url.clone()).json(&body).send().await?;
        check_status(response, &url)?;
        Ok(())
    }

    /// Sends `GET /getpreviousrequests` and returns the body as raw text.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::UnexpectedStatus`] on any non-2xx status.
    pub async fn previous_requests(&self) -> Result<String, ClientError> {
        let url = endpoint(&self.history_base, PREVIOUS_REQUESTS_PATH)?;
        let response = self.client.get(url.clone()).send().await?;
        let text = check_status(response, &url)?.text().await?;
        Ok(text)
    }
}

/// Parses a base URL, ensuring exactly one trailing slash so that
/// [`Url::join`] appends to the path instead of replacing its last segment.
fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let normalised = format!("{}/", raw.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}

fn endpoint(base: &Url, path: &str) -> Result<Url, ClientError> {
    base.join(path).map_err(|e| ClientError::InvalidBaseUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })
}

fn check_status(response: Response, url: &Url) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
