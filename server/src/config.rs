//! Process configuration read from the environment.
//!
//! `PEXELS_API_KEY` is required. `PORT` defaults to 8080 and `PEXELS_API_URL`
//! to the public API root. A `.env` file is loaded first when present.

use pexels_core::DEFAULT_BASE_URL;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PEXELS_API_KEY not found in environment variables")]
    MissingApiKey,

    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub port: u16,
    pub api_url: String,
}

impl Config {
    /// Load `.env` if it exists, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenv::dotenv() {
            tracing::debug!(error = %err, "no .env file loaded");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("PEXELS_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let port = match lookup("PORT").filter(|p| !p.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_url = lookup("PEXELS_API_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            port,
            api_url,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("port", &self.port)
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup(&[("PEXELS_API_KEY", "abc")])).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_url, "https://api.pexels.com/v1");
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn missing_key_is_fatal() {
        let err = Config::from_lookup(lookup(&[("PORT", "3000")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[("PEXELS_API_KEY", "")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
    }

    #[test]
    fn port_and_url_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PEXELS_API_KEY", "abc"),
            ("PORT", "3000"),
            ("PEXELS_API_URL", "http://localhost:9000/v1"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.api_url, "http://localhost:9000/v1");
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = Config::from_lookup(lookup(&[("PEXELS_API_KEY", "abc"), ("PORT", "http")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("http".to_string()));
    }

    #[test]
    fn debug_redacts_key() {
        let config = Config::from_lookup(lookup(&[("PEXELS_API_KEY", "super-secret")])).unwrap();
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
