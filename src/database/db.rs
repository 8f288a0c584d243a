use crate::utils::helpers::generate_post_id;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

const CREATE_POSTS_TABLE: &str = r#"CREATE TABLE IF NOT EXISTS "Post" (
    "id" TEXT NOT NULL PRIMARY KEY,
    "title" TEXT NOT NULL,
    "tags" TEXT,
    "content" TEXT NOT NULL,
    "createdAt" DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
    "updatedAt" DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
)"#;

pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    pub async fn init() -> Result<Self, sqlx::Error> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://db/dev.db?mode=rwc".to_string());

        let pool = SqlitePoolOptions::new().connect(&database_url).await?;

        init_schema(&pool).await?;
        seed_posts(&pool).await?;

        println!("Connected successfully to SQLite");

        Ok(Self { pool })
    }
}

/// Create the Post table when it does not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_POSTS_TABLE).execute(pool).await?;
    Ok(())
}

/// Put a couple of sample posts into a fresh database.
async fn seed_posts(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM Post")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let samples = [
        ("Post 1", "tag 1,tag 2,tag 3", "Lorem ipsum"),
        ("Post 2", "tag 1", "Lorem ipsum"),
    ];
    for (title, tags, content) in samples {
        sqlx::query("INSERT INTO Post(id, title, tags, content) VALUES(?, ?, ?, ?)")
            .bind(generate_post_id())
            .bind(title)
            .bind(tags)
            .bind(content)
            .execute(pool)
            .await?;
    }

    Ok(())
}

// This function is a convenience wrapper around Database::init()
pub async fn connect_to_sqlite() -> Result<SqlitePool, sqlx::Error> {
    let database = Database::init().await.map_err(|e| {
        eprintln!("Failed to initialize database: {:?}", e);
        e
    })?;
    Ok(database.pool)
}
