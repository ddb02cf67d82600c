//! Typed decoding of GraphQL issue-page responses.

use serde::{Deserialize, Deserializer};

use super::error::{FetchError, Result};
use super::models::{Author, Comment, IssueMetadata};

/// `errors[].type` GitHub uses for missing or inaccessible resources.
const NOT_FOUND_ERROR_TYPE: &str = "NOT_FOUND";

/// Continuation state of the comments connection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

impl PageInfo {
    /// Cursor for the next request, or `None` on the last page.
    pub fn next_cursor(self) -> Option<String> {
        if self.has_next_page {
            self.end_cursor
        } else {
            None
        }
    }
}

/// One decoded page: issue metadata, a slice of the comment thread, and
/// where to continue.
#[derive(Debug)]
pub struct PageResult {
    pub issue: IssueMetadata,
    pub comments: Vec<Comment>,
    pub page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Data>,
    #[serde(default)]
    errors: Vec<GraphQLError>,
}

#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
    #[serde(rename = "type")]
    kind: Option<String>,
}

// `nullable` makes the field required while still accepting `null`:
// an absent key is a shape error, a `null` one means "not found".
#[derive(Debug, Deserialize)]
struct Data {
    #[serde(deserialize_with = "nullable")]
    repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
struct RepositoryNode {
    #[serde(deserialize_with = "nullable")]
    issue: Option<IssueNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueNode {
    id: String,
    title: String,
    body: String,
    closed: bool,
    created_at: String,
    author: Option<Author>,
    viewer_can_update: bool,
    comments: CommentConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentConnection {
    page_info: PageInfo,
    nodes: Vec<CommentNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentNode {
    id: String,
    body: String,
    created_at: String,
    author: Option<Author>,
    viewer_can_delete: bool,
    viewer_can_update: bool,
}

fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

impl From<CommentNode> for Comment {
    fn from(node: CommentNode) -> Self {
        Self {
            id: node.id,
            body: node.body,
            created_at: node.created_at,
            author: node.author.into(),
            viewer_can_delete: node.viewer_can_delete,
            viewer_can_update: node.viewer_can_update,
        }
    }
}

/// Decode one response body into a `PageResult`.
///
/// Invalid JSON or an unexpected shape is `MalformedResponse`; a `null`
/// repository or issue (or a `NOT_FOUND` GraphQL error) is `NotFound`;
/// any other GraphQL error is `Remote`.
pub fn decode_page(bytes: &[u8]) -> Result<PageResult> {
    let envelope: Envelope = serde_json::from_slice(bytes)
        .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    if let Some(not_found) = envelope
        .errors
        .iter()
        .find(|e| e.kind.as_deref() == Some(NOT_FOUND_ERROR_TYPE))
    {
        return Err(FetchError::NotFound(not_found.message.clone()));
    }
    if !envelope.errors.is_empty() {
        let messages: Vec<&str> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(FetchError::Remote(messages.join(", ")));
    }

    let data = envelope
        .data
        .ok_or_else(|| FetchError::MalformedResponse("no data in response".to_string()))?;
    let repository = data
        .repository
        .ok_or_else(|| FetchError::NotFound("repository is null".to_string()))?;
    let issue = repository
        .issue
        .ok_or_else(|| FetchError::NotFound("issue is null".to_string()))?;

    let page_info = issue.comments.page_info;
    if page_info.has_next_page && page_info.end_cursor.is_none() {
        return Err(FetchError::MalformedResponse(
            "hasNextPage is true but endCursor is missing".to_string(),
        ));
    }

    Ok(PageResult {
        issue: IssueMetadata {
            id: issue.id,
            title: issue.title,
            body: issue.body,
            closed: issue.closed,
            created_at: issue.created_at,
            author: issue.author.into(),
            viewer_can_update: issue.viewer_can_update,
        },
        comments: issue.comments.nodes.into_iter().map(Comment::from).collect(),
        page_info,
    })
}
