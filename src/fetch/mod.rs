//! Fetch pipeline: one GET, one parse, one result.
//!
//! The pipeline never touches view state. Callers get a `Result` back and
//! decide where it goes; there is no retry.

mod endpoints;
mod payload;

pub use endpoints::{detail_url, Endpoints};
pub use payload::{parse_detail, parse_list};

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::error::FetchError;
use crate::models::{DetailItem, Item};
use crate::traits::{Headers, HttpClient, Response};

/// Performs list and detail fetches through an injected [`HttpClient`].
#[derive(Clone)]
pub struct FetchPipeline {
    client: Arc<dyn HttpClient>,
    headers: Headers,
}

impl FetchPipeline {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        Self { client, headers }
    }

    /// Fetch the list at `endpoint`.
    pub async fn fetch_list(&self, endpoint: &str) -> Result<Vec<Item>, FetchError> {
        let response = self.get(endpoint).await?;
        let items = parse_list(&response.body)?;
        tracing::debug!("Fetched {} item(s) from {}", items.len(), endpoint);
        Ok(items)
    }

    /// Fetch the detail for `id`, substituting it into `endpoint_template`.
    pub async fn fetch_detail(
        &self,
        endpoint_template: &str,
        id: u64,
    ) -> Result<DetailItem, FetchError> {
        let url = detail_url(endpoint_template, id);
        let response = self.get(&url).await?;
        let detail = parse_detail(&response.body)?;

        if detail.id != id {
            return Err(FetchError::parse_failure(format!(
                "requested movie {} but received {}",
                id, detail.id
            )));
        }
        Ok(detail)
    }

    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        let response = self.client.get(url, &self.headers).await?;

        if !response.is_success() {
            let detail = response
                .text()
                .ok()
                .map(|body| body.trim().chars().take(200).collect::<String>())
                .filter(|body| !body.is_empty())
                .unwrap_or_else(|| format!("GET {} failed", url));
            tracing::debug!("GET {} returned HTTP {}", url, response.status);
            return Err(FetchError::http_status(response.status, detail));
        }

        Ok(response)
    }
}

/// Bound a pipeline call by `timeout`; `None` waits indefinitely.
///
/// Expiry is reported as a network failure.
pub async fn with_timeout<T, F>(timeout: Option<Duration>, fetch: F) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    match timeout {
        Some(duration) => tokio::time::timeout(duration, fetch).await.map_err(|_| {
            FetchError::network(format!("timed out after {}s", duration.as_secs_f32()))
        })?,
        None => fetch.await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::error::FetchErrorKind;
    use crate::traits::HttpError;
    use serde_json::json;

    const LIST: &str = "http://movies.test/list";
    const DETAIL: &str = "http://movies.test/detail?id={id}";

    fn pipeline(client: &MockHttpClient) -> FetchPipeline {
        FetchPipeline::new(Arc::new(client.clone()))
    }

    #[tokio::test]
    async fn test_fetch_list_success() {
        let client = MockHttpClient::new();
        client.set_json(
            LIST,
            json!([{
                "id": 1,
                "title": "X",
                "coverImg": "x.jpg",
                "summary": "s",
                "genres": ["a", "b"]
            }]),
        );

        let items = pipeline(&client).fetch_list(LIST).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].genres, vec!["a", "b"]);

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_fetch_list_transport_error_is_network() {
        let client = MockHttpClient::new();
        client.set_response(
            LIST,
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let err = pipeline(&client).fetch_list(LIST).await.unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::Network);
    }

    #[tokio::test]
    async fn test_fetch_list_server_error_is_http_status() {
        let client = MockHttpClient::new();
        client.set_response(
            LIST,
            MockResponse::Success(Response::new(503, "upstream unavailable")),
        );

        let err = pipeline(&client).fetch_list(LIST).await.unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::HttpStatus);
        assert_eq!(err.status, Some(503));
        assert_eq!(err.detail, "upstream unavailable");
    }

    #[tokio::test]
    async fn test_fetch_detail_substitutes_id() {
        let client = MockHttpClient::new();
        client.set_json(
            "http://movies.test/detail?id=42",
            json!({"status": "ok", "data": {"movie": {"id": 42, "title": "Heat"}}}),
        );

        let detail = pipeline(&client).fetch_detail(DETAIL, 42).await.unwrap();
        assert_eq!(detail.title, "Heat");
        assert_eq!(client.requested_urls(), vec!["http://movies.test/detail?id=42"]);
    }

    #[tokio::test]
    async fn test_fetch_detail_not_found() {
        let client = MockHttpClient::new();
        client.set_status("http://movies.test/detail?id=42", 404);

        let err = pipeline(&client).fetch_detail(DETAIL, 42).await.unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::HttpStatus);
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_fetch_detail_mismatched_id_is_parse_failure() {
        let client = MockHttpClient::new();
        client.set_json(
            "http://movies.test/detail?id=42",
            json!({"status": "ok", "data": {"movie": {"id": 0, "title": ""}}}),
        );

        let err = pipeline(&client).fetch_detail(DETAIL, 42).await.unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::ParseFailure);
    }

    #[tokio::test]
    async fn test_single_attempt_per_call() {
        let client = MockHttpClient::new();
        client.set_status(LIST, 500);

        let _ = pipeline(&client).fetch_list(LIST).await;
        assert_eq!(client.get_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_with_timeout_expires_as_network() {
        let client = MockHttpClient::new();
        client.set_json(LIST, json!([]));
        let _gate = client.hold(LIST);

        let pipeline = pipeline(&client);
        let err = with_timeout(
            Some(Duration::from_millis(20)),
            pipeline.fetch_list(LIST),
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::Network);
        assert!(err.detail.contains("timed out"));
    }

    #[tokio::test]
    async fn test_with_timeout_none_waits() {
        let client = MockHttpClient::new();
        client.set_json(LIST, json!([]));

        let pipeline = pipeline(&client);
        let items = with_timeout(None, pipeline.fetch_list(LIST)).await.unwrap();
        assert!(items.is_empty());
    }
}
