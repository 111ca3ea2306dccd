//! Fetch pipeline error types.

use std::fmt;

use crate::traits::HttpError;

/// Why a fetch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    /// Transport failure: connection, DNS, timeout.
    Network,
    /// The server answered with a non-2xx status.
    HttpStatus,
    /// The body could not be mapped onto the expected payload.
    ParseFailure,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchErrorKind::Network => "network",
            FetchErrorKind::HttpStatus => "http status",
            FetchErrorKind::ParseFailure => "parse failure",
        };
        f.write_str(name)
    }
}

/// A failed fetch. Returned to the caller, never panicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub detail: String,
    /// HTTP status, set for [`FetchErrorKind::HttpStatus`].
    pub status: Option<u16>,
}

impl FetchError {
    pub fn network(detail: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Network,
            detail: detail.into(),
            status: None,
        }
    }

    pub fn http_status(status: u16, detail: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::HttpStatus,
            detail: detail.into(),
            status: Some(status),
        }
    }

    pub fn parse_failure(detail: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::ParseFailure,
            detail: detail.into(),
            status: None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self.kind {
            FetchErrorKind::Network => {
                "Unable to reach the movie service. Check your connection and press r to retry."
                    .to_string()
            }
            FetchErrorKind::HttpStatus => match self.status {
                Some(404) => "That movie could not be found.".to_string(),
                Some(429) => "Too many requests. Wait a moment and press r to retry.".to_string(),
                Some(status @ 500..=599) => {
                    format!("The movie service is having trouble (HTTP {}).", status)
                }
                Some(status) => format!("The movie service returned HTTP {}.", status),
                None => "The movie service returned an error.".to_string(),
            },
            FetchErrorKind::ParseFailure => {
                "The movie service sent data this client does not understand.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::Network => "E_FETCH_NET",
            FetchErrorKind::HttpStatus => "E_FETCH_HTTP",
            FetchErrorKind::ParseFailure => "E_FETCH_PARSE",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} error (HTTP {}): {}", self.kind, status, self.detail),
            None => write!(f, "{} error: {}", self.kind, self.detail),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        FetchError::network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::parse_failure(err.to_string())
    }
}
