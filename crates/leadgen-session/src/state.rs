//! In-memory state of one search session.

use leadgen_core::{RawLead, SearchRequest};

const UNRANKED_PROMPT: &str = "I can score these from best to worst based on lead quality: \
completeness of info, address presence, and business type.";
const RANKED_SUMMARY: &str = "Results are now sorted from best to worst. Top leads have more \
complete info (name, address, business type).";

/// Progress of the most recent search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    ResultsAvailable,
    Ranked,
    /// The scrape call failed; `message` is the rendered error.
    Failed { message: String },
}

/// Progress of the most recent history fetch. Independent of [`SearchPhase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryPhase {
    #[default]
    Idle,
    Loading,
    Available,
    Error,
}

/// Everything the front end renders. Only [`crate::SearchSession`] mutates it.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub(crate) leads: Vec<RawLead>,
    pub(crate) ranked: bool,
    pub(crate) phase: SearchPhase,
    pub(crate) last_request: Option<SearchRequest>,
    pub(crate) history_text: Option<String>,
    pub(crate) history_loading: bool,
    pub(crate) history_phase: HistoryPhase,
}

impl SessionState {
    #[must_use]
    pub fn leads(&self) -> &[RawLead] {
        &self.leads
    }

    #[must_use]
    pub fn ranked(&self) -> bool {
        self.ranked
    }

    #[must_use]
    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    /// The payload of the last submitted search, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<&SearchRequest> {
        self.last_request.as_ref()
    }

    /// Raw history text, or an `"Error: ..."` description if the last fetch failed.
    #[must_use]
    pub fn history_text(&self) -> Option<&str> {
        self.history_text.as_deref()
    }

    #[must_use]
    pub fn history_loading(&self) -> bool {
        self.history_loading
    }

    #[must_use]
    pub fn history_phase(&self) -> HistoryPhase {
        self.history_phase
    }

    /// Short status line shown beside a non-empty result list.
    #[must_use]
    pub fn assistant_message(&self) -> Option<String> {
        if self.leads.is_empty() {
            return None;
        }
        if self.ranked {
            Some(RANKED_SUMMARY.to_string())
        } else {
            Some(format!(
                "I found {} leads for you. {UNRANKED_PROMPT}",
                self.leads.len()
            ))
        }
    }
}
