//! Common test utilities for integration tests.
//!
//! Fixtures for movie payloads, a configuration pointing at fake endpoints,
//! and helpers for driving an [`App`] against a [`MockHttpClient`].

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use flicks::adapters::MockHttpClient;
use flicks::app::{App, AppMessage};
use flicks::config::FlicksConfig;
use serde_json::{json, Value};
use tokio::sync::mpsc::UnboundedReceiver;

pub const LIST_URL: &str = "http://movies.test/api/list";
pub const DETAIL_TEMPLATE: &str = "http://movies.test/api/detail?movie_id={id}";

/// How long a test waits for a spawned fetch to report back.
pub const MESSAGE_WAIT: Duration = Duration::from_secs(5);

pub fn list_url_for(term: &str) -> String {
    format!("{}?query_term={}", LIST_URL, term)
}

pub fn detail_url_for(id: u64) -> String {
    DETAIL_TEMPLATE.replace("{id}", &id.to_string())
}

pub fn item_json(id: u64, title: &str, summary: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "medium_cover_image": format!("https://img.test/{}.jpg", id),
        "summary": summary,
        "genres": ["Drama"]
    })
}

/// A list response in the YTS envelope.
pub fn list_body(items: Vec<Value>) -> Value {
    json!({
        "status": "ok",
        "status_message": "Query was successful",
        "data": {"movie_count": items.len(), "movies": items}
    })
}

pub fn detail_body(id: u64, title: &str) -> Value {
    json!({
        "status": "ok",
        "data": {"movie": {
            "id": id,
            "title": title,
            "year": 1995,
            "rating": 8.3,
            "runtime": 170,
            "genres": ["Crime"],
            "description_full": "Robbers and the detective chasing them."
        }}
    })
}

pub fn test_config() -> FlicksConfig {
    FlicksConfig::new()
        .with_list_url(LIST_URL)
        .with_detail_url(DETAIL_TEMPLATE)
}

/// Build an app over `client` and take its message receiver so the test
/// decides when results are delivered.
pub fn test_app(client: &MockHttpClient) -> (App, UnboundedReceiver<AppMessage>) {
    test_app_with(client, test_config())
}

pub fn test_app_with(
    client: &MockHttpClient,
    config: FlicksConfig,
) -> (App, UnboundedReceiver<AppMessage>) {
    let mut app = App::new(config, Arc::new(client.clone())).unwrap();
    let rx = app.message_rx.take().unwrap();
    (app, rx)
}

pub async fn next_message(rx: &mut UnboundedReceiver<AppMessage>) -> AppMessage {
    tokio::time::timeout(MESSAGE_WAIT, rx.recv())
        .await
        .expect("timed out waiting for a fetch result")
        .expect("message channel closed")
}

/// Deliver the next `count` results to the app; returns how many applied.
pub async fn deliver(
    app: &mut App,
    rx: &mut UnboundedReceiver<AppMessage>,
    count: usize,
) -> usize {
    let mut applied = 0;
    for _ in 0..count {
        let message = next_message(rx).await;
        if app.handle_message(message) {
            applied += 1;
        }
    }
    applied
}
