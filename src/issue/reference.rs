//! Compact `owner/repo#number` issue references.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use lazy_regex::regex_captures;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("no match for `owner/repo#nnn' format: {0:?}")]
    InvalidFormat(String),

    #[error("issue number is too large: {0}")]
    NumberOutOfRange(String),

    #[error("bug: reference grammar accepted a non-numeric issue number: {0:?}")]
    Internal(String),
}

/// Structured identifier of one issue: `owner/repo#number`.
///
/// Fields are private so every value in circulation went through
/// validation: `owner` and `repo` match `[-a-zA-Z0-9]+` and
/// `number >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IssueRef {
    owner: String,
    repo: String,
    number: u64,
}

impl IssueRef {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn number(&self) -> u64 {
        self.number
    }
}

impl FromStr for IssueRef {
    type Err = ReferenceError;

    /// Parses `owner<sep>repo<sep>number`.
    ///
    /// Any single character outside `[-a-zA-Z0-9]` works as a separator,
    /// so `owner/repo#12`, `owner/repo/12` and `owner/repo:12` all parse.
    /// Shells want `#` quoted even interactively, hence the laxity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, owner, repo, number) = regex_captures!(
            r"^([-a-zA-Z0-9]+)[^-a-zA-Z0-9]([-a-zA-Z0-9]+)[^-a-zA-Z0-9]([1-9][0-9]*)$",
            s
        )
        .ok_or_else(|| ReferenceError::InvalidFormat(s.to_string()))?;

        let number = number.parse::<u64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => ReferenceError::NumberOutOfRange(number.to_string()),
            _ => ReferenceError::Internal(number.to_string()),
        })?;

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
        })
    }
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}
