//! Test factories, wire fixtures and fake transports for the issue module.
//!
//! # Example
//! ```ignore
//! use crate::issue::testing::{factories, fixtures, transport::ScriptedTransport};
//!
//! let issue = factories::issue_with(|i| i.closed = true);
//! let transport = ScriptedTransport::new()
//!     .page(fixtures::page(1..101, Some("X")))
//!     .page(fixtures::page(101..106, None));
//! ```

pub mod factories {
    use crate::issue::models::{Author, Comment, Issue, IssueMetadata};

    /// Create IssueMetadata with default test values.
    pub fn metadata() -> IssueMetadata {
        IssueMetadata {
            id: "I_1".to_string(),
            title: "Test Issue".to_string(),
            body: "Test body".to_string(),
            closed: false,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            author: author("testuser"),
            viewer_can_update: false,
        }
    }

    /// Create an Issue with default test values and no comments.
    pub fn issue() -> Issue {
        Issue::assemble("owner/repo#1".parse().unwrap(), metadata(), vec![])
    }

    /// Create an Issue with customizations applied via closure.
    pub fn issue_with(f: impl FnOnce(&mut Issue)) -> Issue {
        let mut i = issue();
        f(&mut i);
        i
    }

    /// Create a Comment with default test values.
    pub fn comment() -> Comment {
        Comment {
            id: "IC_1".to_string(),
            body: "Test comment".to_string(),
            created_at: "2024-01-02T00:00:00Z".to_string(),
            author: author("commenter"),
            viewer_can_delete: false,
            viewer_can_update: false,
        }
    }

    /// Create a Comment with customizations applied via closure.
    pub fn comment_with(f: impl FnOnce(&mut Comment)) -> Comment {
        let mut c = comment();
        f(&mut c);
        c
    }

    /// Create an Author with the given login.
    pub fn author(login: &str) -> Author {
        Author {
            login: login.to_string(),
        }
    }
}

/// JSON bodies shaped like GitHub's GraphQL responses.
pub mod fixtures {
    use std::ops::Range;

    use serde_json::{Value, json};

    pub const ISSUE_TITLE: &str = "Test Issue";

    pub fn comment_id(n: usize) -> String {
        format!("IC_{n}")
    }

    pub fn comment_node(n: usize) -> Value {
        json!({
            "id": comment_id(n),
            "body": format!("Comment {n}"),
            "createdAt": "2024-01-02T00:00:00Z",
            "author": {"login": format!("user{n}")},
            "viewerCanDelete": false,
            "viewerCanUpdate": false
        })
    }

    /// A page holding comments `ids`; `end_cursor` set means another page
    /// follows.
    pub fn page(ids: Range<usize>, end_cursor: Option<&str>) -> Value {
        let nodes: Vec<Value> = ids.map(comment_node).collect();
        json!({
            "data": {
                "repository": {
                    "issue": {
                        "id": "I_1",
                        "title": ISSUE_TITLE,
                        "body": "Test body",
                        "closed": false,
                        "createdAt": "2024-01-01T00:00:00Z",
                        "author": {"login": "testuser"},
                        "viewerCanUpdate": true,
                        "comments": {
                            "pageInfo": {
                                "endCursor": end_cursor,
                                "hasNextPage": end_cursor.is_some()
                            },
                            "nodes": nodes
                        }
                    }
                }
            }
        })
    }
}

pub mod transport {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use serde_json::Value;

    use crate::infra::github::{Transport, TransportError};

    /// Replays canned responses in order and records every request body.
    #[derive(Default)]
    pub struct ScriptedTransport {
        responses: Mutex<VecDeque<Result<Vec<u8>, TransportError>>>,
        requests: Mutex<Vec<Value>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn page(self, body: Value) -> Self {
            self.raw(&serde_json::to_vec(&body).unwrap())
        }

        pub fn raw(self, body: &[u8]) -> Self {
            self.responses.lock().unwrap().push_back(Ok(body.to_vec()));
            self
        }

        pub fn fail(self, error: TransportError) -> Self {
            self.responses.lock().unwrap().push_back(Err(error));
            self
        }

        /// Request bodies in the order they were sent.
        pub fn requests(&self) -> Vec<Value> {
            self.requests.lock().unwrap().clone()
        }

        /// The `cursor` variable of every request sent.
        pub fn cursors(&self) -> Vec<Option<String>> {
            self.requests()
                .iter()
                .map(|r| r["variables"]["cursor"].as_str().map(str::to_string))
                .collect()
        }
    }

    impl Transport for ScriptedTransport {
        async fn post(&self, body: Vec<u8>) -> Result<Vec<u8>, TransportError> {
            self.requests
                .lock()
                .unwrap()
                .push(serde_json::from_slice(&body).unwrap());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| {
                    Err(TransportError::Status {
                        status: 418,
                        body: "no scripted response left".to_string(),
                    })
                })
        }
    }

    /// Never answers.
    pub struct HangingTransport;

    impl Transport for HangingTransport {
        async fn post(&self, _body: Vec<u8>) -> Result<Vec<u8>, TransportError> {
            std::future::pending().await
        }
    }
}
