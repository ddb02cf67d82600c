use serde::{Deserialize, Serialize};

/// Login GitHub shows for comments whose author account was deleted.
const GHOST_LOGIN: &str = "ghost";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub login: String,
}

impl Author {
    /// Author of content whose account no longer exists.
    pub fn ghost() -> Self {
        Self {
            login: GHOST_LOGIN.to_string(),
        }
    }
}

/// The API reports `author: null` for deleted accounts.
impl From<Option<Author>> for Author {
    fn from(author: Option<Author>) -> Self {
        author.unwrap_or_else(Self::ghost)
    }
}
