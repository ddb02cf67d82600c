//! Errors of the fetch-and-aggregate engine.

use thiserror::Error;

use crate::infra::github::TransportError;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("No GitHub token found; set {0}")]
    MissingCredential(String),

    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No such issue or repository, or the token cannot read it ({0})")]
    NotFound(String),

    #[error("GitHub API error: {0}")]
    Remote(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
