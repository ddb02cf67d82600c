//! GitHub GraphQL transport.
//!
//! Provides the `Transport` seam used by the fetch engine and its
//! reqwest-backed implementation, `GitHubClient`.

mod client;
mod error;
#[cfg(test)]
mod mock;

pub use client::{DEFAULT_ENDPOINT, GitHubClient, Transport};
pub use error::TransportError;
#[cfg(test)]
pub use mock::GraphQLMockServer;
