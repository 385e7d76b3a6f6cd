//! Configuration management for the contacts search server.
//!
//! Configuration is read from environment variables. A `.env` file is loaded
//! first if present; stdout is never written to since MCP uses it.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the search service client and server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the document-search service
    pub search_url: String,

    /// Optional API key sent as `Authorization: ApiKey <key>`
    pub search_api_key: Option<String>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `SEARCH_URL`: Base URL of the search service
    ///
    /// Optional environment variables:
    /// - `SEARCH_API_KEY`: API key for the search service
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let search_url = env::var("SEARCH_URL")
            .map_err(|_| ConfigError::MissingVar("SEARCH_URL".to_string()))?;

        if !search_url.starts_with("http://") && !search_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let search_api_key = match env::var("SEARCH_API_KEY") {
            Ok(key) if key.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "SEARCH_API_KEY".to_string(),
                    reason: "Cannot be empty when set".to_string(),
                });
            }
            Ok(key) => Some(key),
            Err(_) => None,
        };

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            search_url,
            search_api_key,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search_url: "http://localhost:9200".to_string(),
            search_api_key: None,
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Sets env vars and removes them again on drop
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }

        fn unset(&mut self, key: &str) {
            env::remove_var(key);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.search_url, "http://localhost:9200");
        assert_eq!(config.request_timeout, 10);
        assert!(config.search_api_key.is_none());
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("SEARCH_URL", "localhost:9200");
        guard.unset("SEARCH_API_KEY");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "SEARCH_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_blank_api_key() {
        let mut guard = EnvGuard::new();
        guard.set("SEARCH_URL", "http://localhost:9200");
        guard.set("SEARCH_API_KEY", "  ");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "SEARCH_API_KEY"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_zero_timeout() {
        let mut guard = EnvGuard::new();
        guard.set("SEARCH_URL", "http://localhost:9200");
        guard.unset("SEARCH_API_KEY");
        guard.set("REQUEST_TIMEOUT", "0");

        let result = Config::from_env();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("SEARCH_URL", "https://search.internal:9200");
        guard.set("SEARCH_API_KEY", "key-123");
        guard.set("REQUEST_TIMEOUT", "30");

        let config = Config::from_env().unwrap();
        assert_eq!(config.search_url, "https://search.internal:9200");
        assert_eq!(config.search_api_key.as_deref(), Some("key-123"));
        assert_eq!(config.request_timeout, 30);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");

        assert_eq!(Config::parse_env_u64("TEST_U64", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u64("NONEXISTENT_U64", 10).unwrap(), 10);

        guard.set("TEST_U64_INVALID", "not-a-number");
        assert!(Config::parse_env_u64("TEST_U64_INVALID", 10).is_err());
    }
}
