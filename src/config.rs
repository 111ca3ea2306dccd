//! Runtime configuration.
//!
//! Everything has a default; environment variables override:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `FLICKS_LIST_URL` | list endpoint | YTS `list_movies.json`, rating ≥ 8.8, newest first |
//! | `FLICKS_DETAIL_URL` | detail endpoint template, must contain `{id}` | YTS `movie_details.json` |
//! | `FLICKS_SUMMARY_LIMIT` | characters of summary shown in the list | 235 |
//! | `FLICKS_MIN_SEARCH_LEN` | shortest keyword that triggers a search | 1 |
//! | `FLICKS_TIMEOUT_SECS` | per-request timeout | none |

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::fetch::Endpoints;

pub const DEFAULT_LIST_URL: &str =
    "https://yts.mx/api/v2/list_movies.json?minimum_rating=8.8&sort_by=year";
pub const DEFAULT_DETAIL_URL: &str = "https://yts.mx/api/v2/movie_details.json?movie_id={id}";
pub const DEFAULT_SUMMARY_LIMIT: usize = 235;
pub const DEFAULT_MIN_SEARCH_LEN: usize = 1;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Application configuration.
///
/// # Example
///
/// ```
/// use flicks::config::FlicksConfig;
///
/// let config = FlicksConfig::default()
///     .with_summary_limit(120)
///     .with_min_search_len(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FlicksConfig {
    pub endpoints: Endpoints,
    /// Summaries longer than this many characters are cut and marked with "...".
    pub summary_limit: usize,
    /// Keywords shorter than this (after trimming) show the full catalog.
    pub min_search_len: usize,
    /// Applied around every fetch when set.
    pub request_timeout: Option<Duration>,
}

impl Default for FlicksConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::new(DEFAULT_LIST_URL, DEFAULT_DETAIL_URL),
            summary_limit: DEFAULT_SUMMARY_LIMIT,
            min_search_len: DEFAULT_MIN_SEARCH_LEN,
            request_timeout: None,
        }
    }
}

impl FlicksConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.list_url = url.into();
        self
    }

    pub fn with_detail_url(mut self, template: impl Into<String>) -> Self {
        self.endpoints.detail_url = template.into();
        self
    }

    pub fn with_summary_limit(mut self, limit: usize) -> Self {
        self.summary_limit = limit;
        self
    }

    pub fn with_min_search_len(mut self, len: usize) -> Self {
        self.min_search_len = len;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the configuration from `FLICKS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = read_var("FLICKS_LIST_URL") {
            config = config.with_list_url(url);
        }
        if let Some(template) = read_var("FLICKS_DETAIL_URL") {
            config = config.with_detail_url(template);
        }
        if let Some(limit) = parse_var::<usize>("FLICKS_SUMMARY_LIMIT")? {
            config = config.with_summary_limit(limit);
        }
        if let Some(len) = parse_var::<usize>("FLICKS_MIN_SEARCH_LEN")? {
            config = config.with_min_search_len(len);
        }
        if let Some(secs) = parse_var::<u64>("FLICKS_TIMEOUT_SECS")? {
            config = config.with_request_timeout(Some(Duration::from_secs(secs)));
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - both endpoints are http(s) URLs
    /// - the detail template has an `{id}` placeholder
    /// - the summary limit and timeout are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        for url in [&self.endpoints.list_url, &self.endpoints.detail_url] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError {
                    message: format!("'{}' is not an http(s) URL", url),
                });
            }
        }

        if !self.endpoints.detail_url.contains(Endpoints::ID_PLACEHOLDER) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "detail URL '{}' has no {} placeholder",
                    self.endpoints.detail_url,
                    Endpoints::ID_PLACEHOLDER
                ),
            });
        }

        if self.summary_limit == 0 {
            return Err(ConfigError::ValidationError {
                message: "summary limit must be at least 1".to_string(),
            });
        }

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(ConfigError::ValidationError {
                message: "request timeout must be at least 1 second".to_string(),
            });
        }

        Ok(())
    }
}

fn read_var(var: &'static str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_var<T>(var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    read_var(var)
        .map(|value| {
            value.parse::<T>().map_err(|e| ConfigError::InvalidValue {
                var,
                value: value.clone(),
                reason: e.to_string(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "FLICKS_LIST_URL",
        "FLICKS_DETAIL_URL",
        "FLICKS_SUMMARY_LIMIT",
        "FLICKS_MIN_SEARCH_LEN",
        "FLICKS_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let config = FlicksConfig::default();
        assert_eq!(config.summary_limit, 235);
        assert_eq!(config.min_search_len, 1);
        assert_eq!(config.request_timeout, None);
        assert!(config.endpoints.list_url.contains("list_movies.json"));
        assert!(config.endpoints.detail_url.contains("{id}"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = FlicksConfig::new()
            .with_list_url("http://localhost:9000/movies")
            .with_detail_url("http://localhost:9000/movies/{id}")
            .with_summary_limit(80)
            .with_min_search_len(3)
            .with_request_timeout(Some(Duration::from_secs(5)));

        assert_eq!(config.endpoints.list_url, "http://localhost:9000/movies");
        assert_eq!(config.summary_limit, 80);
        assert_eq!(config.min_search_len, 3);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_template_without_placeholder() {
        let config = FlicksConfig::new().with_detail_url("https://example.com/movie");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let config = FlicksConfig::new().with_list_url("ftp://example.com/list");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        assert!(FlicksConfig::new().with_summary_limit(0).validate().is_err());
        assert!(FlicksConfig::new()
            .with_request_timeout(Some(Duration::ZERO))
            .validate()
            .is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = FlicksConfig::from_env().unwrap();
        assert_eq!(config, FlicksConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("FLICKS_LIST_URL", "http://127.0.0.1:8080/list");
        std::env::set_var("FLICKS_DETAIL_URL", "http://127.0.0.1:8080/detail/{id}");
        std::env::set_var("FLICKS_SUMMARY_LIMIT", "100");
        std::env::set_var("FLICKS_MIN_SEARCH_LEN", "6");
        std::env::set_var("FLICKS_TIMEOUT_SECS", "12");

        let config = FlicksConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.endpoints.list_url, "http://127.0.0.1:8080/list");
        assert_eq!(config.endpoints.detail_url, "http://127.0.0.1:8080/detail/{id}");
        assert_eq!(config.summary_limit, 100);
        assert_eq!(config.min_search_len, 6);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(12)));
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_number() {
        clear_env();
        std::env::set_var("FLICKS_SUMMARY_LIMIT", "lots");
        let result = FlicksConfig::from_env();
        clear_env();

        match result {
            Err(ConfigError::InvalidValue { var, value, .. }) => {
                assert_eq!(var, "FLICKS_SUMMARY_LIMIT");
                assert_eq!(value, "lots");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_from_env_blank_values_ignored() {
        clear_env();
        std::env::set_var("FLICKS_LIST_URL", "   ");
        let config = FlicksConfig::from_env().unwrap();
        clear_env();
        assert_eq!(config.endpoints.list_url, DEFAULT_LIST_URL);
    }
}
