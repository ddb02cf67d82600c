//! GitHub GraphQL transport implementation using reqwest.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};

use super::error::TransportError;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// Sends one GraphQL request body and returns the raw response body.
///
/// Implementations report non-success HTTP statuses as errors; decoding
/// the body is left to the caller.
pub trait Transport {
    fn post(&self, body: Vec<u8>) -> impl Future<Output = Result<Vec<u8>, TransportError>>;
}

/// Production transport: bearer-authenticated POSTs to a GraphQL endpoint.
pub struct GitHubClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for `endpoint`, failing each request that takes
    /// longer than `page_timeout`.
    pub fn new(endpoint: &str, token: &str, page_timeout: Duration) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("opinion/", env!("CARGO_PKG_VERSION"))),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(page_timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        })
    }
}

impl Transport for GitHubClient {
    async fn post(&self, body: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(status = status.as_u16(), len = bytes.len(), "GraphQL response");

        if !status.is_success() {
            return Err(TransportError::from_status(status, &bytes));
        }

        Ok(bytes.to_vec())
    }
}
