//! Routing and route-parameter error types.

use std::fmt;

/// Route table and resolution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No pattern matched and the table has no fallback view.
    NoMatch { path: String },

    /// A pattern could not be parsed.
    InvalidPattern { pattern: String, reason: String },

    /// The same pattern was registered twice.
    DuplicatePattern { pattern: String },

    /// The table has no fallback view; unmatched paths would have nowhere to go.
    MissingFallback,

    /// The table has no routes at all.
    EmptyTable,
}

impl RouteError {
    /// Configuration problems are detected at startup, not at navigation time.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, RouteError::NoMatch { .. })
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RouteError::NoMatch { .. } => "E_ROUTE_NOMATCH",
            RouteError::InvalidPattern { .. } => "E_ROUTE_PATTERN",
            RouteError::DuplicatePattern { .. } => "E_ROUTE_DUP",
            RouteError::MissingFallback => "E_ROUTE_FALLBACK",
            RouteError::EmptyTable => "E_ROUTE_EMPTY",
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::NoMatch { path } => write!(f, "No route matches '{}'", path),
            RouteError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid route pattern '{}': {}", pattern, reason)
            }
            RouteError::DuplicatePattern { pattern } => {
                write!(f, "Route pattern '{}' registered twice", pattern)
            }
            RouteError::MissingFallback => write!(f, "Route table has no fallback view"),
            RouteError::EmptyTable => write!(f, "Route table has no routes"),
        }
    }
}

impl std::error::Error for RouteError {}

/// A route parameter could not be converted to the type a view needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub param: String,
    /// The raw value, empty when the parameter was missing.
    pub value: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(
        param: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            param: param.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(param: impl Into<String>) -> Self {
        Self::new(param, "", "parameter is missing")
    }

    pub fn user_message(&self) -> String {
        if self.value.is_empty() {
            format!("The link is missing its '{}'.", self.param)
        } else {
            format!("'{}' is not a valid {}.", self.value, self.param)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Malformed route parameter '{}' = '{}': {}",
            self.param, self.value, self.reason
        )
    }
}

impl std::error::Error for ValidationError {}
