//! Runtime configuration. Built once at startup, passed into every client.
//!
//! Sources, in order:
//!   1. `.env.local` or `.env` in the working directory (first found wins)
//!   2. the process environment
//!
//! After `Config::from_env` returns, nothing in the crate reads the
//! environment again.

use crate::error::{Error, Result};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_LOCATION: &str = "New York";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub vision_api_key: Option<String>,
    pub maps_api_key: Option<String>,
    pub model: String,
    pub request_timeout: Duration,
    pub default_location: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            vision_api_key: None,
            maps_api_key: None,
            model: DEFAULT_MODEL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_location: DEFAULT_LOCATION.to_string(),
        }
    }
}

impl Config {
    /// Load dotenv files from `dir`, then read the environment.
    ///
    /// Runs before the logger exists, so dotenv results go to stderr.
    pub fn load(dir: &Path) -> Result<Self> {
        load_dotenv(dir);
        Self::from_env()
    }

    /// Build from the process environment only.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let shared = get("GOOGLE_API_KEY");

        let request_timeout = match get("CURIO_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    Error::Config(format!(
                        "CURIO_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                        raw
                    ))
                })?;
                if secs == 0 {
                    return Err(Error::Config(
                        "CURIO_REQUEST_TIMEOUT_SECS must be greater than zero".into(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            gemini_api_key: get("GEMINI_API_KEY"),
            vision_api_key: get("GOOGLE_VISION_API_KEY").or_else(|| shared.clone()),
            maps_api_key: get("GOOGLE_MAPS_API_KEY").or(shared),
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            request_timeout,
            default_location: get("CURIO_DEFAULT_LOCATION")
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        })
    }

    /// Shared `reqwest` client with the configured timeout. No retries.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()?)
    }

    /// One line per key for startup logs: presence only, never the value.
    pub fn describe(&self) -> String {
        fn present(key: &Option<String>) -> &'static str {
            if key.is_some() {
                "set"
            } else {
                "missing"
            }
        }
        format!(
            "model={}, timeout={}s, gemini_key={}, vision_key={}, maps_key={}",
            self.model,
            self.request_timeout.as_secs(),
            present(&self.gemini_api_key),
            present(&self.vision_api_key),
            present(&self.maps_api_key),
        )
    }
}

fn load_dotenv(dir: &Path) {
    for env_file in [".env.local", ".env"] {
        let path = dir.join(env_file);
        if path.exists() {
            match dotenvy::from_path(&path) {
                Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.default_location, DEFAULT_LOCATION);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.gemini_api_key.is_none());
        assert!(config.maps_api_key.is_none());
    }

    #[test]
    fn shared_google_key_fills_vision_and_maps() {
        let config = Config::from_lookup(lookup(&[("GOOGLE_API_KEY", "shared")])).unwrap();
        assert_eq!(config.vision_api_key.as_deref(), Some("shared"));
        assert_eq!(config.maps_api_key.as_deref(), Some("shared"));
    }

    #[test]
    fn specific_keys_win_over_shared() {
        let config = Config::from_lookup(lookup(&[
            ("GOOGLE_API_KEY", "shared"),
            ("GOOGLE_MAPS_API_KEY", "maps"),
        ]))
        .unwrap();
        assert_eq!(config.vision_api_key.as_deref(), Some("shared"));
        assert_eq!(config.maps_api_key.as_deref(), Some("maps"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).unwrap();
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let err = Config::from_lookup(lookup(&[("CURIO_REQUEST_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_lookup(lookup(&[("CURIO_REQUEST_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn describe_never_prints_keys() {
        let config = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "sk-secret")])).unwrap();
        let line = config.describe();
        assert!(line.contains("gemini_key=set"));
        assert!(!line.contains("sk-secret"));
    }
}
