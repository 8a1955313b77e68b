use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::post::{Author, CreatePostRequest, Post, UpdatePostRequest};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;

/// Author as sent by clients: either free text or a first/last name pair.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum AuthorDto {
    Text(String),
    Name {
        #[serde(rename = "firstName")]
        first_name: String,
        #[serde(rename = "lastName")]
        last_name: String,
    },
}

impl AuthorDto {
    /// An author without any name text counts as absent.
    fn into_author(self) -> Result<Author, DomainError> {
        let author = Author::from(self);
        if author.is_empty() {
            return Err(DomainError::MissingField("author"));
        }
        Ok(author)
    }
}

impl From<AuthorDto> for Author {
    fn from(dto: AuthorDto) -> Self {
        match dto {
            AuthorDto::Text(text) => Author::from_text(&text),
            AuthorDto::Name {
                first_name,
                last_name,
            } => Author::new(first_name, last_name),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePostDto {
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
    pub(crate) author: Option<AuthorDto>,
    pub(crate) publish_date: Option<DateTime<Utc>>,
}

impl CreatePostDto {
    /// Required fields are checked in a fixed order; the first absent one is
    /// reported.
    fn into_request(self) -> Result<CreatePostRequest, DomainError> {
        let title = self.title.ok_or(DomainError::MissingField("title"))?;
        let content = self.content.ok_or(DomainError::MissingField("content"))?;
        let author = self.author.ok_or(DomainError::MissingField("author"))?;

        Ok(CreatePostRequest {
            title,
            content,
            author: author.into_author()?,
            publish_date: self.publish_date,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdatePostDto {
    pub(crate) id: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
    pub(crate) author: Option<AuthorDto>,
}

impl UpdatePostDto {
    fn into_request(self) -> Result<UpdatePostRequest, DomainError> {
        Ok(UpdatePostRequest {
            id: self.id,
            title: self.title,
            content: self.content,
            author: self.author.map(AuthorDto::into_author).transpose()?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostDto {
    pub(crate) id: Uuid,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) author: String,
    pub(crate) publish_date: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.as_uuid(),
            title: post.title,
            content: post.content,
            author: post.author.to_string(),
            publish_date: post.publish_date,
        }
    }
}

#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    responses(
        (status = 200, description = "Posts listed", body = [PostDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_posts(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<PostDto>>)> {
    let posts = state.post_service.list_posts().await?;

    Ok((
        StatusCode::OK,
        Json(posts.into_iter().map(PostDto::from).collect()),
    ))
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post found", body = PostDto),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let post = state.post_service.get_post(&id).await?;

    Ok((StatusCode::OK, Json(PostDto::from(post))))
}

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Missing required field or malformed body"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let Json(dto) = payload?;
    let req = dto.into_request()?;

    let post = state.post_service.create_post(req).await?;
    Ok((StatusCode::CREATED, Json(PostDto::from(post))))
}

#[utoipa::path(
    put,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post id")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 204, description = "Post updated"),
        (status = 400, description = "Path and body ids differ or malformed body"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePostDto>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(dto) = payload?;
    let req = dto.into_request()?;

    state.post_service.update_post(&id, req).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = String, Path, description = "Post id")
    ),
    responses(
        (status = 204, description = "Post deleted or never existed"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.post_service.delete_post(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
