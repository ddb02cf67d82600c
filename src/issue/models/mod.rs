mod author;
mod comment;
mod issue;

pub use author::Author;
pub use comment::Comment;
pub use issue::{Issue, IssueMetadata};
