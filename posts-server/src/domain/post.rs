use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct PostId(Uuid);

impl PostId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns `None` for anything that is not a well-formed id; such a value
    /// can never name a stored post.
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }

    pub(crate) fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for PostId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Author {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
}

impl Author {
    pub(crate) fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.first_name.is_empty() && self.last_name.is_empty()
    }

    /// Splits free text at the first whitespace run: `"Anna Maria K"` becomes
    /// first name `Anna`, last name `Maria K`.
    pub(crate) fn from_text(text: &str) -> Self {
        match text.trim().split_once(char::is_whitespace) {
            Some((first, last)) => Self::new(first, last),
            None => Self::new(text, ""),
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (_, true) => f.write_str(&self.first_name),
            (true, false) => f.write_str(&self.last_name),
            (false, false) => write!(f, "{} {}", self.first_name, self.last_name),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: PostId,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author: Author,
    pub(crate) publish_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub(crate) struct CreatePostRequest {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author: Author,
    pub(crate) publish_date: Option<DateTime<Utc>>,
}

/// Body of a partial update. `None` fields stay untouched on the stored post.
#[derive(Debug, Clone, Default)]
pub(crate) struct UpdatePostRequest {
    pub(crate) id: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
    pub(crate) author: Option<Author>,
}

impl UpdatePostRequest {
    pub(crate) fn validate(self, path_id: &str) -> Result<Self, DomainError> {
        if let Some(body_id) = &self.id
            && body_id != path_id
        {
            return Err(DomainError::IdMismatch {
                path: path_id.to_string(),
                body: body_id.clone(),
            });
        }
        Ok(self)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}
