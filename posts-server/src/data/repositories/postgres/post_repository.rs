use async_trait::async_trait;
use sqlx::PgPool;

use crate::data::post_repository::{NewPost, Pagination, PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Debug, Clone)]
pub(crate) struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: i32,
    user_id: i32,
    title: String,
    content: String,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            content: row.content,
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_posts(&self, page: Pagination) -> Result<Vec<Post>, DomainError> {
        // No ORDER BY: row order is inherited from the database, not a
        // designed-in guarantee, and may differ between calls.
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, user_id, title, content
            FROM posts
            LIMIT $1
            OFFSET $2
            "#,
        )
        .bind(page.count)
        .bind(page.start)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn get_post(&self, id: i32) -> Result<Post, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, user_id, title, content
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Post::from).ok_or(DomainError::NotFound)
    }

    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (user_id, title, content)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, content
            "#,
        )
        .bind(input.user_id)
        .bind(&input.title)
        .bind(&input.content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Post::from(row))
    }

    async fn update_post(&self, id: i32, patch: PostPatch) -> Result<(), DomainError> {
        // user_id is deliberately absent from the statement, so a PUT can
        // never reassign a post to another author. Zero affected rows is
        // not an error.
        sqlx::query(
            r#"
            UPDATE posts
            SET title = $1,
                content = $2
            WHERE id = $3
            "#,
        )
        .bind(&patch.title)
        .bind(&patch.content)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn delete_post(&self, id: i32) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

fn map_db_error(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::RowNotFound => DomainError::NotFound,
        other => DomainError::Database(other.to_string()),
    }
}
