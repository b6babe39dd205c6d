//! Configuration management for the Agenda client.
//!
//! The library itself never reads the environment: a [`Config`] is built here and
//! handed to [`DirectoryClient::from_config`](crate::client::DirectoryClient::from_config).
//! The .env file is loaded through `dotenvy`, which does not print to stdout.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Base URL used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8888/agenda";

/// Configuration for the Agenda client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Agenda service base URL (the collection lives under `/contatos`)
    pub server_url: String,

    /// HTTP request timeout in seconds; `None` keeps the transport defaults
    pub request_timeout: Option<u64>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `AGENDA_SERVER_URL`: Base URL of the service (default: `http://localhost:8888/agenda`)
    /// - `AGENDA_REQUEST_TIMEOUT`: HTTP timeout in seconds (default: transport default)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let server_url =
            env::var("AGENDA_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        if !server_url.starts_with("http://") && !server_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "AGENDA_SERVER_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("AGENDA_REQUEST_TIMEOUT")?;
        if request_timeout == Some(0) {
            return Err(ConfigError::InvalidValue {
                var: "AGENDA_REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            server_url,
            request_timeout,
            log_level,
        })
    }

    /// Parse an optional environment variable as u64.
    fn parse_env_u64(var_name: &str) -> ConfigResult<Option<u64>> {
        match env::var(var_name) {
            Ok(val) => val
                .parse::<u64>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a positive number, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout: None,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
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
        assert_eq!(config.server_url, "http://localhost:8888/agenda");
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("AGENDA_SERVER_URL");
        env::remove_var("AGENDA_REQUEST_TIMEOUT");

        let config = Config::from_env().unwrap();
        assert_eq!(config.request_timeout, None);
        assert!(config.server_url.starts_with("http"));
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("AGENDA_SERVER_URL", "localhost:8888/agenda");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "AGENDA_SERVER_URL");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("AGENDA_SERVER_URL", "https://agenda.example.com/agenda");
        guard.set("AGENDA_REQUEST_TIMEOUT", "5");

        let config = Config::from_env().unwrap();
        assert_eq!(config.server_url, "https://agenda.example.com/agenda");
        assert_eq!(config.request_timeout, Some(5));
    }

    #[test]
    #[serial]
    fn test_config_zero_timeout_rejected() {
        let mut guard = EnvGuard::new();
        guard.set("AGENDA_SERVER_URL", "http://localhost:8888/agenda");
        guard.set("AGENDA_REQUEST_TIMEOUT", "0");

        let result = Config::from_env();
        assert!(result.is_err(), "Zero timeout should be rejected");
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_AGENDA_U64", "42");

        assert_eq!(Config::parse_env_u64("TEST_AGENDA_U64").unwrap(), Some(42));
        assert_eq!(Config::parse_env_u64("NONEXISTENT_AGENDA").unwrap(), None);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_AGENDA_U64_INVALID", "not-a-number");

        assert!(Config::parse_env_u64("TEST_AGENDA_U64_INVALID").is_err());
    }
}
