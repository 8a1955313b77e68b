use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::error::DomainError;
use crate::domain::post::{Author, Post, PostId};

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author: Author,
    pub(crate) publish_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PostPatch {
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
    pub(crate) author: Option<Author>,
}

/// Document storage for posts. Implementations assign ids on create and apply
/// patches field by field.
#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError>;
    async fn get_post(&self, id: PostId) -> Result<Option<Post>, DomainError>;
    async fn update_post(&self, id: PostId, patch: PostPatch)
    -> Result<Option<Post>, DomainError>;
    /// Returns `false` when nothing was stored under `id`.
    async fn delete_post(&self, id: PostId) -> Result<bool, DomainError>;
    async fn list_posts(&self) -> Result<Vec<Post>, DomainError>;
}
