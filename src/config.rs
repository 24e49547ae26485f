use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::profile::client::{
    DEFAULT_BATCH_SIZE, DEFAULT_PROFILES_URL, DEFAULT_SESSION_URL, DEFAULT_TIMEOUT,
};

/// Largest batch size accepted from configuration. Mojang answers 400 to
/// any batch above this, failing the whole lookup.
const MAX_BATCH_SIZE: usize = DEFAULT_BATCH_SIZE;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default pointing at the public Mojang API.
#[derive(Debug, Clone)]
pub struct Config {
    /// Batch name lookup endpoint (PLAYERINDEX_PROFILES_URL)
    pub profiles_url: String,
    /// Single profile endpoint, without the trailing uuid (PLAYERINDEX_SESSION_URL)
    pub session_url: String,
    /// Per-request upstream timeout (PLAYERINDEX_TIMEOUT_SECS)
    pub timeout: Duration,
    /// Max names per upstream batch request (PLAYERINDEX_BATCH_SIZE)
    pub batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profiles_url: DEFAULT_PROFILES_URL.to_string(),
            session_url: DEFAULT_SESSION_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Split out from `load` so tests don't have to mutate the process
    /// environment.
    pub fn load_from<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let timeout = match lookup("PLAYERINDEX_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("PLAYERINDEX_TIMEOUT_SECS is not a number: {raw}"))?;
                if secs == 0 {
                    anyhow::bail!("PLAYERINDEX_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        let batch_size = match lookup("PLAYERINDEX_BATCH_SIZE") {
            Some(raw) => {
                let size: usize = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("PLAYERINDEX_BATCH_SIZE is not a number: {raw}"))?;
                if !(1..=MAX_BATCH_SIZE).contains(&size) {
                    anyhow::bail!(
                        "PLAYERINDEX_BATCH_SIZE must be between 1 and {MAX_BATCH_SIZE}, got {size}"
                    );
                }
                size
            }
            None => defaults.batch_size,
        };

        Ok(Self {
            profiles_url: lookup("PLAYERINDEX_PROFILES_URL").unwrap_or(defaults.profiles_url),
            session_url: lookup("PLAYERINDEX_SESSION_URL").unwrap_or(defaults.session_url),
            timeout,
            batch_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::load_from(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.profiles_url, DEFAULT_PROFILES_URL);
        assert_eq!(config.session_url, DEFAULT_SESSION_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PLAYERINDEX_PROFILES_URL", "http://localhost:9000/profiles"),
            ("PLAYERINDEX_TIMEOUT_SECS", "3"),
            ("PLAYERINDEX_BATCH_SIZE", " 5 "),
        ])
        .unwrap();
        assert_eq!(config.profiles_url, "http://localhost:9000/profiles");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.batch_size, 5);
    }

    #[test]
    fn test_rejects_bad_numbers() {
        assert!(load(&[("PLAYERINDEX_TIMEOUT_SECS", "soon")]).is_err());
        assert!(load(&[("PLAYERINDEX_TIMEOUT_SECS", "0")]).is_err());
        assert!(load(&[("PLAYERINDEX_BATCH_SIZE", "0")]).is_err());
        assert!(load(&[("PLAYERINDEX_BATCH_SIZE", "101")]).is_err());
    }

    #[test]
    fn test_batch_size_capped_at_upstream_limit() {
        assert_eq!(
            load(&[("PLAYERINDEX_BATCH_SIZE", "10")]).unwrap().batch_size,
            DEFAULT_BATCH_SIZE
        );
        assert!(load(&[("PLAYERINDEX_BATCH_SIZE", "11")]).is_err());
    }
}
