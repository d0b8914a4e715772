//! Generator configuration.
//!
//! Read once at process start and passed by reference into the client.

use std::fmt;

use crate::error::ConfigError;

/// Variable holding the API key.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Variable overriding the API base URL.
pub const API_URL_ENV: &str = "LEARNGOAL_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com";

/// Process-wide settings for the completion client.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Anthropic API key.
    pub api_key: String,

    /// Base URL without the `/v1/messages` path.
    pub base_url: String,
}

impl GeneratorConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `ANTHROPIC_API_KEY` | API key (required) |
    /// | `LEARNGOAL_API_URL` | API base URL |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiKey { var: API_KEY_ENV })?;

        let mut config = Self::new(api_key);
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(url);
        }
        Ok(config)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim().trim_end_matches('/').to_string();
        self
    }

    /// Full endpoint for the Messages API.
    pub fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_key_is_error() {
        let err = GeneratorConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingApiKey {
                var: "ANTHROPIC_API_KEY"
            }
        ));
    }

    #[test]
    fn test_blank_key_is_error() {
        let result = GeneratorConfig::from_lookup(lookup_from(&[(API_KEY_ENV, "  \n")]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey { .. })));
    }

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[(API_KEY_ENV, "sk-ant-test\n")]))
            .unwrap();
        assert_eq!(config.api_key, "sk-ant-test");
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.messages_url(), "https://api.anthropic.com/v1/messages");
    }

    #[test]
    fn test_url_override_strips_trailing_slash() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, "k"),
            (API_URL_ENV, "http://127.0.0.1:8080/"),
        ]))
        .unwrap();
        assert_eq!(config.messages_url(), "http://127.0.0.1:8080/v1/messages");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GeneratorConfig::new("sk-ant-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-ant-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
