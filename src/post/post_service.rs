use crate::post::post_model::{NewPost, Post};
use crate::utils::error::CustomError;
use sqlx::SqlitePool;

pub struct PostService {
    pool: SqlitePool,
}

impl PostService {
    pub fn new(pool: SqlitePool) -> Self {
        PostService { pool }
    }

    /// Insert a post as a single statement; `createdAt` and `updatedAt`
    /// are assigned by the database. Either the whole row is committed or
    /// the error propagates and nothing is written.
    pub async fn create_post(&self, post: NewPost) -> Result<(), CustomError> {
        sqlx::query("INSERT INTO Post(id, title, tags, content) VALUES(?, ?, ?, ?)")
            .bind(&post.id)
            .bind(&post.title)
            .bind(&post.tags)
            .bind(&post.content)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// All posts in storage order.
    pub async fn list_posts(&self) -> Result<Vec<Post>, CustomError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"SELECT id, title, tags, content, "createdAt", "updatedAt" FROM Post"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }
}
