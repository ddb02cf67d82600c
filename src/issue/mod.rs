//! Fetch-and-aggregate engine for one GitHub issue.
//!
//! `reference` parses `owner/repo#number`, `query` builds page requests,
//! `decode` turns response bodies into typed pages and `fetch` drives the
//! cursor loop that merges them into a single `Issue`.

pub mod decode;
pub mod error;
pub mod fetch;
pub mod models;
pub mod query;
pub mod reference;
#[cfg(test)]
pub mod testing;

pub use error::FetchError;
pub use fetch::{FetchOptions, fetch_issue};
pub use models::Issue;
pub use reference::IssueRef;
