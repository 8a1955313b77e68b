use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post, PostId, UpdatePostRequest};

pub(crate) struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub(crate) fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub(crate) async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.list_posts().await
    }

    pub(crate) async fn get_post(&self, raw_id: &str) -> Result<Post, DomainError> {
        let id = parse_id(raw_id)?;
        self.repo
            .get_post(id)
            .await?
            .ok_or_else(|| not_found(raw_id))
    }

    pub(crate) async fn create_post(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        let new_post = NewPost {
            title: req.title,
            content: req.content,
            author: req.author,
            publish_date: req.publish_date.unwrap_or_else(Utc::now),
        };
        self.repo.create_post(new_post).await
    }

    pub(crate) async fn update_post(
        &self,
        raw_id: &str,
        req: UpdatePostRequest,
    ) -> Result<Post, DomainError> {
        let req = req.validate(raw_id)?;
        let id = parse_id(raw_id)?;

        if req.is_empty() {
            warn!(post_id = %id, "update request carries no updatable fields");
            return self.repo.get_post(id).await?.ok_or_else(|| not_found(raw_id));
        }

        let patch = PostPatch {
            title: req.title,
            content: req.content,
            author: req.author,
        };
        self.repo
            .update_post(id, patch)
            .await?
            .ok_or_else(|| not_found(raw_id))
    }

    /// Deleting an absent or malformed id is not an error.
    pub(crate) async fn delete_post(&self, raw_id: &str) -> Result<(), DomainError> {
        let Some(id) = PostId::parse(raw_id) else {
            return Ok(());
        };

        if !self.repo.delete_post(id).await? {
            warn!(post_id = %id, "delete requested for missing post");
        }
        Ok(())
    }
}

fn parse_id(raw_id: &str) -> Result<PostId, DomainError> {
    PostId::parse(raw_id).ok_or_else(|| not_found(raw_id))
}

fn not_found(raw_id: &str) -> DomainError {
    DomainError::NotFound(format!("post id: {raw_id}"))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use super::PostService;
    use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
    use crate::domain::error::DomainError;
    use crate::domain::post::{Author, CreatePostRequest, Post, PostId, UpdatePostRequest};

    #[derive(Clone, Default)]
    struct FakePostRepo {
        created_input: Arc<Mutex<Option<NewPost>>>,
        post_for_get: Arc<Mutex<Option<Post>>>,
        update_result: Arc<Mutex<Option<Post>>>,
        update_call: Arc<Mutex<Option<(PostId, PostPatch)>>>,
        delete_calls: Arc<Mutex<Vec<PostId>>>,
        list_result: Arc<Mutex<Vec<Post>>>,
    }

    #[async_trait]
    impl PostRepository for FakePostRepo {
        async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
            *self
                .created_input
                .lock()
                .expect("created_input mutex poisoned") = Some(input.clone());
            Ok(Post {
                id: PostId::new(),
                title: input.title,
                content: input.content,
                author: input.author,
                publish_date: input.publish_date,
            })
        }

        async fn get_post(&self, _id: PostId) -> Result<Option<Post>, DomainError> {
            Ok(self
                .post_for_get
                .lock()
                .expect("post_for_get mutex poisoned")
                .clone())
        }

        async fn update_post(
            &self,
            id: PostId,
            patch: PostPatch,
        ) -> Result<Option<Post>, DomainError> {
            *self.update_call.lock().expect("update_call mutex poisoned") = Some((id, patch));
            Ok(self
                .update_result
                .lock()
                .expect("update_result mutex poisoned")
                .clone())
        }

        async fn delete_post(&self, id: PostId) -> Result<bool, DomainError> {
            self.delete_calls
                .lock()
                .expect("delete_calls mutex poisoned")
                .push(id);
            Ok(false)
        }

        async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
            Ok(self
                .list_result
                .lock()
                .expect("list_result mutex poisoned")
                .clone())
        }
    }

    fn service(repo: &FakePostRepo) -> PostService {
        PostService::new(Arc::new(repo.clone()))
    }

    fn sample_post(title: &str) -> Post {
        Post {
            id: PostId::new(),
            title: title.to_string(),
            content: "body".to_string(),
            author: Author::new("Anna", "K"),
            publish_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_post_defaults_publish_date_to_now() {
        let repo = FakePostRepo::default();
        let before = Utc::now();

        let created = service(&repo)
            .create_post(CreatePostRequest {
                title: "A".to_string(),
                content: "B".to_string(),
                author: Author::from_text("C"),
                publish_date: None,
            })
            .await
            .expect("create_post must succeed");

        assert_eq!(created.title, "A");
        assert!(created.publish_date >= before);
        assert!(created.publish_date <= Utc::now());
    }

    #[tokio::test]
    async fn create_post_passes_publish_date_through() {
        let repo = FakePostRepo::default();
        let date = Utc
            .with_ymd_and_hms(2017, 9, 9, 0, 0, 0)
            .single()
            .expect("valid date");

        service(&repo)
            .create_post(CreatePostRequest {
                title: "A".to_string(),
                content: "B".to_string(),
                author: Author::from_text("C"),
                publish_date: Some(date),
            })
            .await
            .expect("create_post must succeed");

        let input = repo
            .created_input
            .lock()
            .expect("created_input mutex poisoned")
            .clone()
            .expect("repo input must be captured");
        assert_eq!(input.publish_date, date);
    }

    #[tokio::test]
    async fn get_post_returns_not_found_when_missing() {
        let repo = FakePostRepo::default();
        let err = service(&repo)
            .get_post(&PostId::new().to_string())
            .await
            .expect_err("post must be missing");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_post_treats_malformed_id_as_not_found() {
        let repo = FakePostRepo::default();
        *repo.post_for_get.lock().expect("post_for_get mutex poisoned") =
            Some(sample_post("never reached"));

        let err = service(&repo)
            .get_post("12345")
            .await
            .expect_err("malformed id must not resolve");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_post_rejects_id_mismatch_before_repo_call() {
        let repo = FakePostRepo::default();
        let path_id = PostId::new().to_string();

        let err = service(&repo)
            .update_post(
                &path_id,
                UpdatePostRequest {
                    id: Some(PostId::new().to_string()),
                    title: Some("new".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect_err("must be rejected");

        assert!(matches!(err, DomainError::IdMismatch { .. }));
        assert!(
            repo.update_call
                .lock()
                .expect("update_call mutex poisoned")
                .is_none()
        );
    }

    #[tokio::test]
    async fn update_post_sends_only_present_fields() {
        let repo = FakePostRepo::default();
        let existing = sample_post("new");
        *repo.update_result.lock().expect("update_result mutex poisoned") =
            Some(existing.clone());

        let path_id = existing.id.to_string();
        service(&repo)
            .update_post(
                &path_id,
                UpdatePostRequest {
                    id: Some(path_id.clone()),
                    title: Some("new".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("update must succeed");

        let (id, patch) = repo
            .update_call
            .lock()
            .expect("update_call mutex poisoned")
            .clone()
            .expect("update call must be captured");
        assert_eq!(id, existing.id);
        assert_eq!(patch.title.as_deref(), Some("new"));
        assert!(patch.content.is_none());
        assert!(patch.author.is_none());
    }

    #[tokio::test]
    async fn update_post_reports_missing_post_as_not_found() {
        let repo = FakePostRepo::default();
        let err = service(&repo)
            .update_post(
                &PostId::new().to_string(),
                UpdatePostRequest {
                    title: Some("new".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect_err("missing post");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn empty_update_checks_existence_without_writing() {
        let repo = FakePostRepo::default();
        let existing = sample_post("kept");
        *repo.post_for_get.lock().expect("post_for_get mutex poisoned") =
            Some(existing.clone());

        let post = service(&repo)
            .update_post(&existing.id.to_string(), UpdatePostRequest::default())
            .await
            .expect("empty update of existing post succeeds");

        assert_eq!(post.title, "kept");
        assert!(
            repo.update_call
                .lock()
                .expect("update_call mutex poisoned")
                .is_none()
        );
    }

    #[tokio::test]
    async fn delete_post_is_idempotent() {
        let repo = FakePostRepo::default();
        let id = PostId::new();

        service(&repo)
            .delete_post(&id.to_string())
            .await
            .expect("deleting a missing post succeeds");
        service(&repo)
            .delete_post("not-an-id")
            .await
            .expect("deleting a malformed id succeeds");

        let calls = repo.delete_calls.lock().expect("delete_calls mutex poisoned");
        assert_eq!(calls.as_slice(), [id]);
    }

    #[tokio::test]
    async fn list_posts_returns_repo_contents() {
        let repo = FakePostRepo::default();
        *repo.list_result.lock().expect("list_result mutex poisoned") =
            vec![sample_post("a"), sample_post("b")];

        let posts = service(&repo).list_posts().await.expect("list must succeed");
        assert_eq!(posts.len(), 2);
    }
}
