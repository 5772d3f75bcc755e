use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; a malformed value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON document backing the store. `None` keeps records in memory only.
    pub store_path: Option<PathBuf>,
    pub seed_demo_data: bool,
    pub session_ttl_minutes: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            store_path: None,
            seed_demo_data: true,
            session_ttl_minutes: 480,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            store_path: std::env::var("STORE_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            seed_demo_data: parse_env("SEED_DEMO_DATA", defaults.seed_demo_data)
                .context("SEED_DEMO_DATA must be true or false")?,
            session_ttl_minutes: parse_env("SESSION_TTL_MINUTES", defaults.session_ttl_minutes)
                .context("SESSION_TTL_MINUTES must be a whole number of minutes")?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Could not parse environment variable '{key}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert!(config.store_path.is_none());
        assert!(config.seed_demo_data);
        assert_eq!(config.session_ttl_minutes, 480);
    }

    #[test]
    fn test_parse_env_falls_back_when_unset() {
        let value: u16 = parse_env("MATCHDESK_TEST_UNSET_VAR", 1234).unwrap();
        assert_eq!(value, 1234);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("MATCHDESK_TEST_BAD_PORT", "eighty");
        assert!(parse_env::<u16>("MATCHDESK_TEST_BAD_PORT", 80).is_err());
        std::env::remove_var("MATCHDESK_TEST_BAD_PORT");
    }
}
