//! Configuration management for the kata binary.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Every variable has a default, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default upper bound for numbers counted by the calculator.
pub const DEFAULT_UPPER_BOUND: i64 = 1000;

/// Configuration for the kata binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the user API
    pub user_api_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// How long fetched users stay cached, in seconds (default: 300)
    pub user_cache_ttl_secs: u64,

    /// Largest number the calculator still sums (default: 1000)
    pub upper_bound: i64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `USER_API_BASE_URL`: Base URL for the user API (default: `http://localhost:3000`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `USER_CACHE_TTL_SECONDS`: User cache TTL in seconds (default: 300)
    /// - `CALCULATOR_UPPER_BOUND`: Largest summed value (default: 1000)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout, a missing file is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let user_api_url = env::var("USER_API_BASE_URL").unwrap_or(defaults.user_api_url);
        if !user_api_url.starts_with("http://") && !user_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "USER_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", defaults.request_timeout)?;
        let user_cache_ttl_secs =
            Self::parse_env_u64("USER_CACHE_TTL_SECONDS", defaults.user_cache_ttl_secs)?;
        let upper_bound = Self::parse_env_i64("CALCULATOR_UPPER_BOUND", defaults.upper_bound)?;

        if upper_bound < 0 {
            return Err(ConfigError::InvalidValue {
                var: "CALCULATOR_UPPER_BOUND".to_string(),
                reason: "Must not be negative".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            user_api_url,
            request_timeout,
            user_cache_ttl_secs,
            upper_bound,
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

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be an integer, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            user_api_url: "http://localhost:3000".to_string(),
            request_timeout: 10,
            user_cache_ttl_secs: 300,
            upper_bound: DEFAULT_UPPER_BOUND,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const ALL_VARS: [&str; 5] = [
        "USER_API_BASE_URL",
        "REQUEST_TIMEOUT",
        "USER_CACHE_TTL_SECONDS",
        "CALCULATOR_UPPER_BOUND",
        "LOG_LEVEL",
    ];

    // Sets env vars for one test and removes them on drop
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in ALL_VARS {
                env::remove_var(var);
            }
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
        assert_eq!(config.user_api_url, "http://localhost:3000");
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.user_cache_ttl_secs, 300);
        assert_eq!(config.upper_bound, 1000);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();

        let config = Config::from_env().unwrap();
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.upper_bound, DEFAULT_UPPER_BOUND);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("USER_API_BASE_URL", "https://users.example.com");
        guard.set("REQUEST_TIMEOUT", "3");
        guard.set("USER_CACHE_TTL_SECONDS", "60");
        guard.set("CALCULATOR_UPPER_BOUND", "500");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.user_api_url, "https://users.example.com");
        assert_eq!(config.request_timeout, 3);
        assert_eq!(config.user_cache_ttl_secs, 60);
        assert_eq!(config.upper_bound, 500);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("USER_API_BASE_URL", "not-a-url");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "USER_API_BASE_URL");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_negative_upper_bound() {
        let mut guard = EnvGuard::new();
        guard.set("CALCULATOR_UPPER_BOUND", "-1");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CALCULATOR_UPPER_BOUND");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64", "42");

        assert_eq!(Config::parse_env_u64("TEST_U64", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u64("NONEXISTENT", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U64_INVALID", "not-a-number");

        assert!(Config::parse_env_u64("TEST_U64_INVALID", 10).is_err());
    }
}
