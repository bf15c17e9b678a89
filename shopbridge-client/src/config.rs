use serde::Deserialize;
use std::env;

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Connection settings for the remote commerce API.
///
/// Two request-timeout keys exist because integrators historically set either
/// one; `request_timeout_ms` wins when both are present.
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub request_timeout_ms: Option<u64>,
    pub api_timeout_ms: Option<u64>,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_health_timeout_ms")]
    pub health_timeout_ms: u64,
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

fn default_health_timeout_ms() -> u64 {
    2_000
}

impl UpstreamConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_ms: None,
            api_timeout_ms: None,
            connect_timeout_ms: default_connect_timeout_ms(),
            health_timeout_ms: default_health_timeout_ms(),
        }
    }

    /// Effective per-request deadline in milliseconds.
    pub fn effective_timeout_ms(&self) -> u64 {
        self.request_timeout_ms
            .or(self.api_timeout_ms)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
    }

    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of SHOPBRIDGE)
            // Eg.. `SHOPBRIDGE_BASE_URL=...` would set the `base_url` key
            .add_source(config::Environment::with_prefix("SHOPBRIDGE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_wins_over_legacy_key() {
        let mut config = UpstreamConfig::new("http://upstream");
        config.request_timeout_ms = Some(1_000);
        config.api_timeout_ms = Some(9_000);
        assert_eq!(config.effective_timeout_ms(), 1_000);
    }

    #[test]
    fn test_legacy_key_applies_when_alone() {
        let mut config = UpstreamConfig::new("http://upstream");
        config.api_timeout_ms = Some(9_000);
        assert_eq!(config.effective_timeout_ms(), 9_000);
    }

    #[test]
    fn test_timeout_defaults() {
        let config = UpstreamConfig::new("http://upstream");
        assert_eq!(config.effective_timeout_ms(), DEFAULT_REQUEST_TIMEOUT_MS);
        assert_eq!(config.connect_timeout_ms, 5_000);
        assert_eq!(config.health_timeout_ms, 2_000);
    }
}
