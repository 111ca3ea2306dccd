//! Response body mapping.
//!
//! Accepts the YTS envelope (`{"status":"ok","data":{...}}`) or the bare
//! record(s). Any mismatch becomes a parse failure.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::error::FetchError;
use crate::models::{DetailItem, Item};

#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    status_message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ListData {
    /// Absent when the query matched nothing
    #[serde(default)]
    movies: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct DetailData {
    movie: DetailItem,
}

/// Open the envelope, or hand back the document itself when there is none.
fn unwrap_envelope(document: Value) -> Result<Value, FetchError> {
    if !(document.is_object() && document.get("status").is_some()) {
        return Ok(document);
    }

    let envelope: Envelope = serde_json::from_value(document)?;
    if envelope.status != "ok" {
        return Err(FetchError::parse_failure(format!(
            "API reported status '{}': {}",
            envelope.status,
            envelope.status_message.unwrap_or_default()
        )));
    }
    envelope
        .data
        .ok_or_else(|| FetchError::parse_failure("envelope has no data"))
}

/// Parse a list response into items, keeping the first of any duplicate ids.
pub fn parse_list(body: &[u8]) -> Result<Vec<Item>, FetchError> {
    let data = unwrap_envelope(serde_json::from_slice(body)?)?;

    let items: Vec<Item> = if data.is_array() {
        serde_json::from_value(data)?
    } else {
        serde_json::from_value::<ListData>(data)?.movies
    };

    let mut seen = HashSet::with_capacity(items.len());
    let total = items.len();
    let unique: Vec<Item> = items.into_iter().filter(|item| seen.insert(item.id)).collect();
    if unique.len() != total {
        tracing::warn!(
            "List response repeated {} id(s); kept first occurrences",
            total - unique.len()
        );
    }
    Ok(unique)
}

/// Parse a detail response.
pub fn parse_detail(body: &[u8]) -> Result<DetailItem, FetchError> {
    let data = unwrap_envelope(serde_json::from_slice(body)?)?;

    if data.get("movie").is_some() {
        Ok(serde_json::from_value::<DetailData>(data)?.movie)
    } else {
        Ok(serde_json::from_value(data)?)
    }
}
