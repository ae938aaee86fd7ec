mod output;
mod search;

use clap::{Parser, Subcommand};
use leadgen_core::AppConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leadgen-cli")]
#[command(about = "Find business leads by industry and location")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape leads for an industry in a location
    Search {
        /// Industry identifier (see `industries`)
        #[arg(long, value_parser = parse_industry)]
        industry: String,

        /// City or region to search, e.g. "Austin"
        #[arg(long)]
        location: String,

        /// Sort results from best to worst lead quality
        #[arg(long)]
        rank: bool,

        /// Also print previously saved requests
        #[arg(long)]
        history: bool,
    },
    /// Print previously saved search requests
    History,
    /// List the industries a search can target
    Industries,
}

fn parse_industry(raw: &str) -> Result<String, String> {
    if leadgen_core::is_known_industry(raw) {
        Ok(raw.to_owned())
    } else {
        Err(format!(
            "unknown industry '{raw}'; expected one of: {}",
            leadgen_core::INDUSTRIES.join(", ")
        ))
    }
}

/// Loads `.env` and the environment into an [`AppConfig`] and installs the
/// stderr log subscriber. Only commands that talk to the services need this.
fn init() -> anyhow::Result<AppConfig> {
    let config = leadgen_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            industry,
            location,
            rank,
            history,
        }) => {
            let config = init()?;
            search::run_search(
                &config,
                &search::SearchArgs {
                    industry,
                    location,
                    rank,
                    history,
                },
            )
            .await?;
        }
        Some(Commands::History) => search::run_history(&init()?).await?,
        Some(Commands::Industries) => print!("{}", output::IndustryList),
        None => println!("leadgen-cli ready; run with --help for commands"),
    }

    Ok(())
}
