//! Sequences the remote calls of a search session and owns its state.
//!
//! A search runs the scrape call to completion, stores the results, and only
//! then hands the request to a background task that records it in the history
//! service. That task never writes back into the session: its outcome goes to
//! the log and nowhere else, so a failing history service can neither delay
//! nor spoil the results the user asked for. Dropping the session detaches
//! pending saves rather than cancelling them.

use std::sync::Arc;

use leadgen_client::LeadBackend;
use leadgen_core::{rank, score_all, RawLead, ScoredLead, SearchRequest};
use tokio::task::JoinHandle;

use crate::error::SessionError;
use crate::state::{HistoryPhase, SearchPhase, SessionState};

/// One user's search session.
///
/// Every state transition takes `&mut self`, so transitions never interleave;
/// the only concurrent work is the fire-and-forget request save.
pub struct SearchSession {
    backend: Arc<dyn LeadBackend>,
    state: SessionState,
    background: Vec<JoinHandle<()>>,
}

impl SearchSession {
    pub fn new(backend: Arc<dyn LeadBackend>) -> Self {
        Self {
            backend,
            state: SessionState::default(),
            background: Vec::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Leads of the current result set, normalized and scored, in display order.
    #[must_use]
    pub fn scored_leads(&self) -> Vec<ScoredLead> {
        score_all(&self.state.leads)
    }

    /// Runs a search for `business_name` in `location`.
    ///
    /// Clears the ranked flag, scrapes, stores the results unranked, then
    /// spawns the request save without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Search`] if the scrape call fails. The session
    /// is then in [`SearchPhase::Failed`] with no leads, and no save is issued.
    pub async fn submit_search(
        &mut self,
        business_name: &str,
        location: &str,
    ) -> Result<&[RawLead], SessionError> {
        self.reap_background();

        let request = SearchRequest::new(business_name, location);
        self.state.ranked = false;
        self.state.phase = SearchPhase::Searching;
        self.state.last_request = Some(request.clone());

        match self.backend.scrape(&request).await {
            Ok(leads) => {
                tracing::info!(
                    business_name,
                    location,
                    count = leads.len(),
                    "search completed"
                );
                self.state.leads = leads;
                self.state.phase = SearchPhase::ResultsAvailable;
                self.spawn_save(request);
                Ok(&self.state.leads)
            }
            Err(err) => {
                tracing::error!(business_name, location, error = %err, "search failed");
                self.state.leads.clear();
                self.state.phase = SearchPhase::Failed {
                    message: err.to_string(),
                };
                Err(SessionError::Search(err))
            }
        }
    }

    /// Replaces the current leads with their ranked order.
    ///
    /// Re-ranking an already ranked result set leaves it unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoResults`] unless the last search succeeded.
    pub fn apply_ranking(&mut self) -> Result<&[RawLead], SessionError> {
        match self.state.phase {
            SearchPhase::ResultsAvailable | SearchPhase::Ranked => {}
            _ => return Err(SessionError::NoResults),
        }

        self.state.leads = rank(&self.state.leads);
        self.state.ranked = true;
        self.state.phase = SearchPhase::Ranked;
        tracing::debug!(count = self.state.leads.len(), "leads ranked");
        Ok(&self.state.leads)
    }

    /// Fetches the request history and stores it for display.
    ///
    /// Never fails: an error from the history service is stored as an
    /// `"Error: ..."` string in place of the history text.
    pub async fn fetch_history(&mut self) -> &str {
        self.state.history_loading = true;
        self.state.history_phase = HistoryPhase::Loading;

        let (text, phase) = match self.backend.previous_requests().await {
            Ok(text) => (text, HistoryPhase::Available),
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch previous requests");
                (format!("Error: {err}"), HistoryPhase::Error)
            }
        };

        self.state.history_loading = false;
        self.state.history_phase = phase;
        self.state.history_text.insert(text).as_str()
    }

    /// Waits for outstanding request saves to finish.
    ///
    /// Only short-lived callers need this, to avoid exiting before a save is
    /// sent. Session state is not touched.
    pub async fn drain_background(&mut self) {
        for handle in std::mem::take(&mut self.background) {
            if let Err(err) = handle.await {
                tracing::warn!(error = %err, "request save task did not complete");
            }
        }
    }

    fn spawn_save(&mut self, request: SearchRequest) {
        let backend = Arc::clone(&self.backend);
        self.background.push(tokio::spawn(async move {
            match backend.save_request(&request).await {
                Ok(()) => tracing::debug!(
                    business_name = %request.business_name,
                    location = %request.location,
                    "request saved"
                ),
                Err(err) => tracing::warn!(
                    business_name = %request.business_name,
                    location = %request.location,
                    error = %err,
                    "failed to save request"
                ),
            }
        }));
    }

    /// Drops handles of saves that already finished.
    fn reap_background(&mut self) {
        self.background.retain(|handle| !handle.is_finished());
    }
}

impl std::fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("state", &self.state)
            .field("pending_saves", &self.background.len())
            .finish_non_exhaustive()
    }
}
