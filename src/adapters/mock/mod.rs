//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable, gateable responses

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest, ResponseGate};
