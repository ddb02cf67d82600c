use serde::Serialize;

use super::author::Author;
use super::comment::Comment;
use crate::issue::reference::IssueRef;

/// Issue fields carried by every page of the comments connection.
///
/// Pages repeat these identically; only the first page's copy is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueMetadata {
    pub id: String,
    pub title: String,
    pub body: String,
    pub closed: bool,
    pub created_at: String,
    pub author: Author,
    pub viewer_can_update: bool,
}

/// A GitHub issue together with its complete comment thread.
///
/// `comments` holds every comment in the order the API supplied them,
/// across all pages, without gaps or duplicates.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub reference: IssueRef,
    pub id: String,
    pub title: String,
    pub body: String,
    pub closed: bool,
    pub created_at: String,
    pub author: Author,
    pub viewer_can_update: bool,
    pub comments: Vec<Comment>,
}

impl Issue {
    /// Builds the final aggregate from the first page's metadata and the
    /// comments accumulated over all pages.
    pub fn assemble(reference: IssueRef, metadata: IssueMetadata, comments: Vec<Comment>) -> Self {
        let IssueMetadata {
            id,
            title,
            body,
            closed,
            created_at,
            author,
            viewer_can_update,
        } = metadata;

        Self {
            reference,
            id,
            title,
            body,
            closed,
            created_at,
            author,
            viewer_can_update,
            comments,
        }
    }

    pub fn status(&self) -> &'static str {
        if self.closed { "closed" } else { "open" }
    }
}
