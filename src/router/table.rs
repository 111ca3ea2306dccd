//! Ordered route table.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::{RouteError, ValidationError};

use super::pattern::{normalize_path, path_segments, RoutePattern};

/// The result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<V> {
    pub view: V,
    /// Normalized form of the resolved path
    pub path: String,
    /// Matched pattern, `None` when the fallback was used
    pub pattern: Option<String>,
    pub params: BTreeMap<String, String>,
}

impl<V> RouteMatch<V> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Convert a parameter, failing with a [`ValidationError`] when it is
    /// missing or malformed.
    pub fn parse_param<T>(&self, name: &str) -> Result<T, ValidationError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self
            .param(name)
            .ok_or_else(|| ValidationError::missing(name))?;
        parse_param_value(name, raw)
    }

    pub fn is_fallback(&self) -> bool {
        self.pattern.is_none()
    }
}

/// Convert a raw parameter value. Surrounding whitespace is not accepted.
pub fn parse_param_value<T>(name: &str, raw: &str) -> Result<T, ValidationError>
where
    T: FromStr,
    T::Err: Display,
{
    if raw.is_empty() {
        return Err(ValidationError::missing(name));
    }
    raw.parse::<T>()
        .map_err(|e| ValidationError::new(name, raw, e.to_string()))
}

/// Patterns checked in declaration order; the first match wins.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<(RoutePattern, V)>,
    fallback: Option<V>,
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            fallback: None,
        }
    }
}

impl<V: Clone> RouteTable<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route. Patterns equal after canonicalization are rejected.
    pub fn route(mut self, pattern: &str, view: V) -> Result<Self, RouteError> {
        let parsed = RoutePattern::parse(pattern)?;
        if self.routes.iter().any(|(p, _)| p == &parsed) {
            return Err(RouteError::DuplicatePattern {
                pattern: parsed.as_str().to_string(),
            });
        }
        self.routes.push((parsed, view));
        Ok(self)
    }

    /// The view for paths no pattern matches.
    pub fn fallback(mut self, view: V) -> Self {
        self.fallback = Some(view);
        self
    }

    /// Startup check: at least one route and a fallback.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.routes.is_empty() {
            return Err(RouteError::EmptyTable);
        }
        if self.fallback.is_none() {
            return Err(RouteError::MissingFallback);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(p, _)| p.as_str())
    }

    pub fn resolve(&self, path: &str) -> Result<RouteMatch<V>, RouteError> {
        let parts = path_segments(path);
        let normalized = normalize_path(path);

        for (pattern, view) in &self.routes {
            if let Some(params) = pattern.match_segments(&parts) {
                tracing::debug!("Resolved {} via {}", normalized, pattern);
                return Ok(RouteMatch {
                    view: view.clone(),
                    path: normalized,
                    pattern: Some(pattern.as_str().to_string()),
                    params,
                });
            }
        }

        match &self.fallback {
            Some(view) => {
                tracing::debug!("No route for {}; using fallback", normalized);
                Ok(RouteMatch {
                    view: view.clone(),
                    path: normalized,
                    pattern: None,
                    params: BTreeMap::new(),
                })
            }
            None => Err(RouteError::NoMatch { path: normalized }),
        }
    }
}
