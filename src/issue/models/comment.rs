use serde::Serialize;

use super::author::Author;

/// Snapshot of one issue comment at fetch time.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// GraphQL node ID
    pub id: String,
    pub body: String,
    /// ISO 8601 timestamp exactly as the API reported it
    pub created_at: String,
    pub author: Author,
    pub viewer_can_delete: bool,
    pub viewer_can_update: bool,
}
