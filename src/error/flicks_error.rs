//! Unified error type for the application.

use std::fmt;

use super::fetch::{FetchError, FetchErrorKind};
use super::route::{RouteError, ValidationError};
use crate::config::ConfigError;

/// Unified error type.
#[derive(Debug)]
pub enum FlicksError {
    /// A remote fetch failed.
    Fetch(FetchError),

    /// Routing failed or the route table is misconfigured.
    Route(RouteError),

    /// A route parameter was malformed.
    Validation(ValidationError),

    /// Configuration could not be loaded.
    Config(ConfigError),

    /// Terminal or filesystem I/O failed.
    Io(std::io::Error),
}

impl FlicksError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FlicksError::Fetch(err) => err.user_message(),
            FlicksError::Route(RouteError::NoMatch { path }) => {
                format!("Nothing lives at '{}'.", path)
            }
            FlicksError::Route(err) => format!("The route table is misconfigured: {}", err),
            FlicksError::Validation(err) => err.user_message(),
            FlicksError::Config(err) => format!("Configuration error: {}", err),
            FlicksError::Io(err) => format!("I/O error: {}", err),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FlicksError::Fetch(err) => err.error_code(),
            FlicksError::Route(err) => err.error_code(),
            FlicksError::Validation(_) => "E_VALIDATION",
            FlicksError::Config(_) => "E_CONFIG",
            FlicksError::Io(_) => "E_IO",
        }
    }
}

impl fmt::Display for FlicksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlicksError::Fetch(err) => write!(f, "{}", err),
            FlicksError::Route(err) => write!(f, "{}", err),
            FlicksError::Validation(err) => write!(f, "{}", err),
            FlicksError::Config(err) => write!(f, "{}", err),
            FlicksError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FlicksError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlicksError::Fetch(err) => Some(err),
            FlicksError::Route(err) => Some(err),
            FlicksError::Validation(err) => Some(err),
            FlicksError::Config(err) => Some(err),
            FlicksError::Io(err) => Some(err),
        }
    }
}

impl From<FetchError> for FlicksError {
    fn from(err: FetchError) -> Self {
        FlicksError::Fetch(err)
    }
}

impl From<RouteError> for FlicksError {
    fn from(err: RouteError) -> Self {
        FlicksError::Route(err)
    }
}

impl From<ValidationError> for FlicksError {
    fn from(err: ValidationError) -> Self {
        FlicksError::Validation(err)
    }
}

impl From<ConfigError> for FlicksError {
    fn from(err: ConfigError) -> Self {
        FlicksError::Config(err)
    }
}

impl From<std::io::Error> for FlicksError {
    fn from(err: std::io::Error) -> Self {
        FlicksError::Io(err)
    }
}

/// Result type alias using [`FlicksError`].
pub type FlicksResult<T> = Result<T, FlicksError>;

/// The error a view keeps in its `error` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    Fetch(FetchError),
    Validation(ValidationError),
}

impl ViewError {
    /// The fetch error kind, if this came from the fetch pipeline.
    pub fn fetch_kind(&self) -> Option<FetchErrorKind> {
        match self {
            ViewError::Fetch(err) => Some(err.kind),
            ViewError::Validation(_) => None,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ViewError::Fetch(err) => err.user_message(),
            ViewError::Validation(err) => err.user_message(),
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::Fetch(err) => write!(f, "{}", err),
            ViewError::Validation(err) => write!(f, "{}", err),
        }
    }
}

impl From<FetchError> for ViewError {
    fn from(err: FetchError) -> Self {
        ViewError::Fetch(err)
    }
}

impl From<ValidationError> for ViewError {
    fn from(err: ValidationError) -> Self {
        ViewError::Validation(err)
    }
}
