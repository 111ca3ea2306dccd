//! Mock HTTP client for testing.
//!
//! Returns configured responses per URL, records every request, and can hold
//! a response behind a [`ResponseGate`] so a test decides when (and in which
//! order) in-flight fetches complete.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

/// Handle that releases one held response.
///
/// Releasing before the request arrives is fine: the permit is stored and the
/// request passes straight through.
#[derive(Debug, Clone)]
pub struct ResponseGate {
    notify: Arc<Notify>,
}

impl ResponseGate {
    /// Let the held request complete.
    pub fn release(&self) {
        self.notify.notify_one();
    }
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use flicks::adapters::mock::{MockHttpClient, MockResponse};
/// use flicks::traits::{HttpClient, Response, Headers};
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "https://yts.mx/api/v2/list_movies.json",
///     MockResponse::Success(Response::new(200, "[]")),
/// );
/// let gate = client.hold("https://yts.mx/api/v2/list_movies.json");
///
/// let pending = tokio::spawn({
///     let client = client.clone();
///     async move { client.get("https://yts.mx/api/v2/list_movies.json", &Headers::new()).await }
/// });
/// gate.release();
/// assert_eq!(pending.await.unwrap().unwrap().status, 200);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by URL
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Gates holding responses for specific URLs
    gates: Arc<Mutex<HashMap<String, Arc<Notify>>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a specific URL.
    ///
    /// Exact matches win; otherwise the longest configured prefix of the
    /// requested URL is used.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        lock(&self.responses).insert(url.to_string(), response);
    }

    /// Set a JSON body with status 200 for a URL.
    pub fn set_json(&self, url: &str, value: serde_json::Value) {
        self.set_response(url, MockResponse::Success(Response::json_ok(&value)));
    }

    /// Set a bare status response for a URL.
    pub fn set_status(&self, url: &str, status: u16) {
        self.set_response(url, MockResponse::Success(Response::new(status, "")));
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    /// Hold responses for `url` (exact match) until the returned gate is
    /// released. Each release lets one request through.
    pub fn hold(&self, url: &str) -> ResponseGate {
        let notify = Arc::clone(
            lock(&self.gates)
                .entry(url.to_string())
                .or_insert_with(|| Arc::new(Notify::new())),
        );
        ResponseGate { notify }
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// URLs of all recorded requests, in arrival order.
    pub fn requested_urls(&self) -> Vec<String> {
        lock(&self.requests).iter().map(|r| r.url.clone()).collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers) {
        lock(&self.requests).push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
        });
    }

    fn gate_for(&self, url: &str) -> Option<Arc<Notify>> {
        lock(&self.gates).get(url).cloned()
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = lock(&self.responses);

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        lock(&self.default_response).clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers);

        if let Some(gate) = self.gate_for(url) {
            gate.notified().await;
        }

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_get_with_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/test",
            MockResponse::Success(Response::new(200, "Hello")),
        );

        let response = client
            .get("https://example.com/test", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.text().unwrap(), "Hello");

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].url, "https://example.com/test");
    }

    #[tokio::test]
    async fn test_get_with_error() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/down",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let result = client.get("https://example.com/down", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_longest_prefix_wins() {
        let client = MockHttpClient::new();
        client.set_status("https://example.com/", 500);
        client.set_status("https://example.com/movies", 204);

        let response = client
            .get("https://example.com/movies?page=2", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 204);
    }

    #[tokio::test]
    async fn test_no_response_configured() {
        let client = MockHttpClient::new();
        let result = client
            .get("https://example.com/missing", &Headers::new())
            .await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_default_response() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(404, "Not Found")));

        let response = client
            .get("https://example.com/anything", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_gate_holds_until_released() {
        let client = MockHttpClient::new();
        client.set_status("https://example.com/slow", 200);
        let gate = client.hold("https://example.com/slow");

        let pending = tokio::spawn({
            let client = client.clone();
            async move { client.get("https://example.com/slow", &Headers::new()).await }
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!pending.is_finished());
        assert_eq!(client.requested_urls(), vec!["https://example.com/slow"]);

        gate.release();
        let response = pending.await.unwrap().unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_gate_released_before_request_passes_through() {
        let client = MockHttpClient::new();
        client.set_status("https://example.com/early", 200);
        client.hold("https://example.com/early").release();

        let response = client
            .get("https://example.com/early", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);
    }

    #[test]
    fn test_clear_requests() {
        let client = MockHttpClient::new();
        client.record_request("GET", "https://example.com", &Headers::new());
        assert_eq!(client.get_requests().len(), 1);

        client.clear_requests();
        assert!(client.get_requests().is_empty());
    }
}
