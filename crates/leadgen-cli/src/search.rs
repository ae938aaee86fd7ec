//! `search` and `history` command handlers.

use std::sync::Arc;

use anyhow::Context;
use leadgen_client::LeadServiceClient;
use leadgen_core::AppConfig;
use leadgen_session::SearchSession;

use crate::output;

#[derive(Debug)]
pub(crate) struct SearchArgs {
    pub(crate) industry: String,
    pub(crate) location: String,
    pub(crate) rank: bool,
    pub(crate) history: bool,
}

fn build_session(config: &AppConfig) -> anyhow::Result<SearchSession> {
    let client = LeadServiceClient::from_config(config)
        .context("failed to construct lead service client")?;
    Ok(SearchSession::new(Arc::new(client)))
}

/// Runs one search, optionally ranks it, and prints the results.
///
/// Waits for the background request save before returning so the process
/// does not exit with the save still in flight. A failed save is only logged.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the scrape call fails.
pub(crate) async fn run_search(config: &AppConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let mut session = build_session(config)?;

    let searched = session
        .submit_search(&args.industry, &args.location)
        .await
        .map(<[_]>::len);
    if let Err(err) = searched {
        session.drain_background().await;
        return Err(err).with_context(|| {
            format!(
                "search for {} in '{}' failed",
                leadgen_core::industry_label(&args.industry),
                args.location
            )
        });
    }

    if args.rank {
        session.apply_ranking()?;
    }

    print!(
        "{}",
        output::ResultList {
            leads: &session.scored_leads(),
            ranked: session.state().ranked(),
        }
    );
    if let Some(message) = session.state().assistant_message() {
        println!("\n{message}");
    }

    if args.history {
        let text = session.fetch_history().await;
        print!("{}", output::History(text));
    }

    session.drain_background().await;
    Ok(())
}

/// Fetches and prints the request history. History failures are printed,
/// not returned.
///
/// # Errors
///
/// Returns an error only if the client cannot be built.
pub(crate) async fn run_history(config: &AppConfig) -> anyhow::Result<()> {
    let mut session = build_session(config)?;
    let text = session.fetch_history().await;
    print!("{}", output::History(text));
    Ok(())
}
