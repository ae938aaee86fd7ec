//! Lead quality scoring and ranking.
//!
//! The score is a completeness heuristic: a present name is worth 3, an
//! address 2, a category 1, plus `len(name) / 100` so that among equally
//! complete leads the more specific (longer) business name wins. The weights
//! are fixed; rankings saved by earlier clients depend on them.

use serde::Serialize;

use crate::lead::{normalize, NormalizedLead, RawLead};

const NAME_WEIGHT: f64 = 3.0;
const ADDRESS_WEIGHT: f64 = 2.0;
const CATEGORY_WEIGHT: f64 = 1.0;
const NAME_LENGTH_DIVISOR: f64 = 100.0;

/// A normalized lead paired with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredLead {
    pub lead: NormalizedLead,
    pub score: f64,
}

/// Scores a normalized lead. Pure and deterministic.
///
/// The name-length tie-break uses [`NormalizedLead::name_length`], which is
/// 0 for names that were not strings or arrays on the wire.
#[must_use]
pub fn score(lead: &NormalizedLead) -> f64 {
    let mut total = 0.0;
    if lead.name.is_some() {
        total += NAME_WEIGHT;
        #[allow(clippy::cast_precision_loss)]
        let len = lead.name_length as f64;
        total += len / NAME_LENGTH_DIVISOR;
    }
    if lead.address.is_some() {
        total += ADDRESS_WEIGHT;
    }
    if lead.category.is_some() {
        total += CATEGORY_WEIGHT;
    }
    total
}

/// Normalizes and scores every lead, preserving input order.
#[must_use]
pub fn score_all(leads: &[RawLead]) -> Vec<ScoredLead> {
    leads
        .iter()
        .map(|raw| {
            let lead = normalize(raw);
            let score = score(&lead);
            ScoredLead { lead, score }
        })
        .collect()
}

/// Returns a new sequence ordered by descending score.
///
/// The input slice is left untouched. Leads with equal scores keep their
/// input order, so ranking an already ranked sequence is a no-op.
#[must_use]
pub fn rank(leads: &[RawLead]) -> Vec<RawLead> {
    let mut keyed: Vec<(f64, &RawLead)> = leads
        .iter()
        .map(|raw| (score(&normalize(raw)), raw))
        .collect();
    // `sort_by` is stable.
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    keyed.into_iter().map(|(_, raw)| raw.clone()).collect()
}
