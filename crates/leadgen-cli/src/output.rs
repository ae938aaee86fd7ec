//! Plain-text rendering for terminal output.

use std::fmt;

use leadgen_core::{industry_label, ScoredLead, INDUSTRIES};

/// Industry identifiers next to their labels, one per line.
pub(crate) struct IndustryList;

impl fmt::Display for IndustryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in INDUSTRIES {
            writeln!(f, "{id:<26}{}", industry_label(id))?;
        }
        Ok(())
    }
}

/// One block per lead: position, name, score, then address, category and
/// search link on indented lines. Absent fields are skipped.
pub(crate) struct ResultList<'a> {
    pub(crate) leads: &'a [ScoredLead],
    pub(crate) ranked: bool,
}

impl fmt::Display for ResultList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.leads.is_empty() {
            return writeln!(f, "No results found.");
        }

        let order = if self.ranked { " (best first)" } else { "" };
        writeln!(f, "{} results found{order}", self.leads.len())?;
        for (idx, scored) in self.leads.iter().enumerate() {
            let lead = &scored.lead;
            writeln!(
                f,
                "\n{:>3}. {}  [score {:.2}]",
                idx + 1,
                lead.name.as_deref().unwrap_or("(unnamed)"),
                scored.score
            )?;
            if let Some(address) = &lead.address {
                writeln!(f, "     {address}")?;
            }
            if let Some(category) = &lead.category {
                writeln!(f, "     {category}")?;
            }
            writeln!(f, "     {}", lead.search_url())?;
        }
        Ok(())
    }
}

/// Request history body under a heading, newline-terminated.
pub(crate) struct History<'a>(pub(crate) &'a str);

impl fmt::Display for History<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\nPrevious requests:\n{}", self.0)?;
        if !self.0.ends_with('\n') {
            writeln!(f)?;
        }
        Ok(())
    }
}
