use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostId};

/// Process-local post store, kept in insertion order. Contents are lost on
/// restart.
#[derive(Debug, Default)]
pub(crate) struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let post = Post {
            id: PostId::new(),
            title: input.title,
            content: input.content,
            author: input.author,
            publish_date: input.publish_date,
        };

        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn get_post(&self, id: PostId) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|post| post.id == id).cloned())
    }

    async fn update_post(
        &self,
        id: PostId,
        patch: PostPatch,
    ) -> Result<Option<Post>, DomainError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|post| post.id == id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(author) = patch.author {
            post.author = author;
        }

        Ok(Some(post.clone()))
    }

    async fn delete_post(&self, id: PostId) -> Result<bool, DomainError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|post| post.id != id);
        Ok(posts.len() < before)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.read().await.clone())
    }
}
