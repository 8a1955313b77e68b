use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{Author, Post, PostId};

#[derive(Debug, Clone)]
pub(crate) struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    author_first_name: String,
    author_last_name: String,
    publish_date: DateTime<Utc>,
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (id, title, content, author_first_name, author_last_name, publish_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, content, author_first_name, author_last_name, publish_date
            "#,
        )
        .bind(PostId::new().as_uuid())
        .bind(input.title)
        .bind(input.content)
        .bind(input.author.first_name)
        .bind(input.author.last_name)
        .bind(input.publish_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(map_row_to_post(row))
    }

    async fn get_post(&self, id: PostId) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                id,
                title,
                content,
                author_first_name,
                author_last_name,
                publish_date
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(row.map(map_row_to_post))
    }

    async fn update_post(
        &self,
        id: PostId,
        patch: PostPatch,
    ) -> Result<Option<Post>, DomainError> {
        let (first_name, last_name) = match patch.author {
            Some(author) => (Some(author.first_name), Some(author.last_name)),
            None => (None, None),
        };

        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                author_first_name = COALESCE($4, author_first_name),
                author_last_name = COALESCE($5, author_last_name)
            WHERE id = $1
            RETURNING id, title, content, author_first_name, author_last_name, publish_date
            "#,
        )
        .bind(id.as_uuid())
        .bind(patch.title)
        .bind(patch.content)
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(row.map(map_row_to_post))
    }

    async fn delete_post(&self, id: PostId) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                id,
                title,
                content,
                author_first_name,
                author_last_name,
                publish_date
            FROM posts
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(rows.into_iter().map(map_row_to_post).collect())
    }
}

fn map_row_to_post(row: PostRow) -> Post {
    Post {
        id: PostId::from(row.id),
        title: row.title,
        content: row.content,
        author: Author::new(row.author_first_name, row.author_last_name),
        publish_date: row.publish_date,
    }
}

fn map_post_db_error(err: sqlx::Error) -> DomainError {
    DomainError::Unexpected(err.to_string())
}
