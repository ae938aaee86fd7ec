pub mod app_config;
pub mod config;
pub mod industries;
pub mod lead;
pub mod scoring;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use industries::{industry_label, is_known_industry, INDUSTRIES};
pub use lead::{normalize, NormalizedLead, RawLead, SearchRequest};
pub use scoring::{rank, score, score_all, ScoredLead};
