use thiserror::Error;

use crate::app_config::{AppConfig, Environment};

pub const DEFAULT_SCRAPE_BASE_URL: &str = "https://webscraperpythonlogic-production.up.railway.app";
pub const DEFAULT_HISTORY_BASE_URL: &str = "https://leadsscraperbackend-production.up.railway.app";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`
/// lookup and no `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let base_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected an http(s) URL, got '{raw}'"),
            });
        }
        Ok(trimmed.to_string())
    };

    let env = parse_environment(&or_default("LEADGEN_ENV", "development"));
    let log_level = or_default("LEADGEN_LOG_LEVEL", "info");

    let scrape_base_url = base_url("LEADGEN_SCRAPE_BASE_URL", DEFAULT_SCRAPE_BASE_URL)?;
    let history_base_url = base_url("LEADGEN_HISTORY_BASE_URL", DEFAULT_HISTORY_BASE_URL)?;

    let request_timeout_secs = parse_u64("LEADGEN_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LEADGEN_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }
    let user_agent = or_default("LEADGEN_USER_AGENT", "leadgen/0.1 (lead-generation)");

    Ok(AppConfig {
        env,
        log_level,
        scrape_base_url,
        history_base_url,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_test() {
        assert_eq!(parse_environment("test"), Environment::Test);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn build_app_config_uses_defaults_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.scrape_base_url, DEFAULT_SCRAPE_BASE_URL);
        assert_eq!(cfg.history_base_url, DEFAULT_HISTORY_BASE_URL);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "leadgen/0.1 (lead-generation)");
    }

    #[test]
    fn base_urls_are_overridable_and_lose_trailing_slash() {
        let mut map = HashMap::new();
        map.insert("LEADGEN_SCRAPE_BASE_URL", "http://localhost:8000/");
        map.insert("LEADGEN_HISTORY_BASE_URL", "http://localhost:8080");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.scrape_base_url, "http://localhost:8000");
        assert_eq!(cfg.history_base_url, "http://localhost:8080");
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let mut map = HashMap::new();
        map.insert("LEADGEN_HISTORY_BASE_URL", "ftp://example.com");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADGEN_HISTORY_BASE_URL"),
            "expected InvalidEnvVar(LEADGEN_HISTORY_BASE_URL), got: {result:?}"
        );
    }

    #[test]
    fn request_timeout_override() {
        let mut map = HashMap::new();
        map.insert("LEADGEN_REQUEST_TIMEOUT_SECS", "5");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 5);
    }

    #[test]
    fn request_timeout_invalid() {
        let mut map = HashMap::new();
        map.insert("LEADGEN_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADGEN_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(LEADGEN_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn request_timeout_zero_is_rejected() {
        let mut map = HashMap::new();
        map.insert("LEADGEN_REQUEST_TIMEOUT_SECS", "0");
        assert!(build_app_config(lookup_from_map(&map)).is_err());
    }
}
