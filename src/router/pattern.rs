//! Route patterns and path normalization.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::RouteError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Exact(String),
    Param(String),
}

/// A parsed pattern such as `/movie/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        };

        if !pattern.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }
        if pattern.contains(['?', '#']) {
            return Err(invalid("must not contain a query or fragment"));
        }

        let mut segments = Vec::new();
        for part in pattern.split('/').filter(|p| !p.is_empty()) {
            match part.strip_prefix(':') {
                Some(name) => {
                    if name.is_empty() {
                        return Err(invalid("parameter name is empty"));
                    }
                    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                        return Err(invalid("parameter names use [A-Za-z0-9_]"));
                    }
                    if segments.contains(&Segment::Param(name.to_string())) {
                        return Err(invalid("parameter name repeated"));
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Exact(part.to_string())),
            }
        }

        Ok(Self {
            raw: canonical(&segments),
            segments,
        })
    }

    /// The pattern in canonical form (no doubled or trailing slashes).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Exact(_) => None,
        })
    }

    /// Match normalized path segments, returning decoded parameter values.
    pub(crate) fn match_segments(&self, parts: &[&str]) -> Option<BTreeMap<String, String>> {
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Exact(text) if text == part => {}
                Segment::Exact(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), decode(part));
                }
            }
        }
        Some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn canonical(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }
    segments
        .iter()
        .map(|s| match s {
            Segment::Exact(text) => format!("/{}", text),
            Segment::Param(name) => format!("/:{}", name),
        })
        .collect()
}

/// Percent-decode one segment; undecodable input is kept as written.
fn decode(part: &str) -> String {
    match urlencoding::decode(part) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => part.to_string(),
    }
}

/// Split `path` into its non-empty segments, ignoring any query string or
/// fragment.
pub fn path_segments(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|p| !p.is_empty()).collect()
}

/// The canonical form of `path`: leading slash, no empty segments, no
/// trailing slash, no query or fragment.
pub fn normalize_path(path: &str) -> String {
    let segments = path_segments(path);
    if segments.is_empty() {
        "/".to_string()
    } else {
        segments.iter().map(|s| format!("/{}", s)).collect()
    }
}
