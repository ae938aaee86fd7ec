#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration for the lead-generation client.
///
/// Service base URLs are carried here rather than as constants so the client
/// and orchestrator can be pointed at mock servers in tests.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Base URL of the scraping service (`POST /scrape`).
    pub scrape_base_url: String,
    /// Base URL of the request-history service (`/saverequest`, `/getpreviousrequests`).
    pub history_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}
