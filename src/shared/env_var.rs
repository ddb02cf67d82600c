//! Centralized reader for the environment variables opinion consults.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

use crate::issue::FetchError;

const GITHUB_TOKEN: &str = "OPINION_GITHUB_TOKEN";
const FALLBACK_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
const GRAPHQL_ENDPOINT: &str = "OPINION_GRAPHQL_ENDPOINT";

/// Snapshot of the relevant environment variables at load time.
pub struct EnvVars {
    /// Token sent as `Authorization: Bearer`.
    /// OPINION_GITHUB_TOKEN wins over GITHUB_TOKEN.
    pub github_token: Option<String>,

    /// Overrides the configured GraphQL endpoint.
    pub graphql_endpoint: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read the variables from the current process.
    pub fn load() -> Self {
        Self {
            github_token: non_empty_var(GITHUB_TOKEN).or_else(|| non_empty_var(FALLBACK_GITHUB_TOKEN)),
            graphql_endpoint: non_empty_var(GRAPHQL_ENDPOINT),
        }
    }

    /// The token, or `MissingCredential` naming the variables to set.
    pub fn require_token(&self) -> Result<&str, FetchError> {
        self.github_token.as_deref().ok_or_else(|| {
            FetchError::MissingCredential(format!("{GITHUB_TOKEN} or {FALLBACK_GITHUB_TOKEN}"))
        })
    }
}
