//! wiremock-based GraphQL mock server for testing.
//!
//! ```ignore
//! let mock = GraphQLMockServer::start().await;
//! mock.page(None).respond(&first_page).await;
//! mock.page(Some("X")).respond(&second_page).await;
//! mock.page(Some("X")).respond_raw(500, "oops").await;
//! let client = mock.client();
//! ```

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::GitHubClient;

const TEST_TOKEN: &str = "test-token";

/// HTTP-level stand-in for the GitHub GraphQL endpoint.
pub struct GraphQLMockServer {
    server: MockServer,
}

impl GraphQLMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn endpoint(&self) -> String {
        format!("{}/graphql", self.server.uri())
    }

    /// A GitHubClient pointed at this server.
    pub fn client(&self) -> GitHubClient {
        GitHubClient::new(&self.endpoint(), TEST_TOKEN, Duration::from_secs(5)).unwrap()
    }

    /// Mock builder for the request that carries `cursor`
    /// (`None` matches the first page).
    pub fn page(&self, cursor: Option<&str>) -> PageMock<'_> {
        PageMock {
            server: &self.server,
            cursor: cursor.map(str::to_string),
            times: 1,
        }
    }
}

/// Builder for one mocked page request.
pub struct PageMock<'a> {
    server: &'a MockServer,
    cursor: Option<String>,
    times: u64,
}

impl PageMock<'_> {
    /// Number of matching requests expected before the server is dropped.
    pub fn times(mut self, times: u64) -> Self {
        self.times = times;
        self
    }

    /// Respond with a 200 JSON body.
    pub async fn respond(self, body: &serde_json::Value) {
        let template = ResponseTemplate::new(200).set_body_json(body);
        self.mount(template).await;
    }

    /// Respond with an arbitrary status and raw body.
    pub async fn respond_raw(self, status: u16, body: &str) {
        let template = ResponseTemplate::new(status).set_body_string(body);
        self.mount(template).await;
    }

    async fn mount(self, template: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
            .and(body_partial_json(json!({
                "variables": { "cursor": self.cursor }
            })))
            .respond_with(template)
            .expect(self.times)
            .mount(self.server)
            .await;
    }
}
