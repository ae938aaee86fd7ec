//! Wire shapes for the scrape and request-history services.

use leadgen_core::RawLead;
use serde::{Deserialize, Serialize};

/// Body of a `POST /scrape` response.
///
/// The service omits `results` (or sends `null`) when it found nothing.
#[derive(Debug, Default, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default)]
    pub results: Option<Vec<RawLead>>,
}

impl ScrapeResponse {
    #[must_use]
    pub fn into_leads(self) -> Vec<RawLead> {
        self.results.unwrap_or_default()
    }
}

/// Body of a `POST /saverequest` call: the original search payload,
/// serialized to a JSON string and wrapped once more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequestBody {
    pub request: String,
}
