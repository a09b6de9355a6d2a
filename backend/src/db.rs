use crate::config::AppConfig;
use crate::models::{Post, PostRow};
use crate::store::{PostStore, StoreError, TextPattern};
use crate::trend::{Granularity, TrendBucket, TrendCounter};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

// Connect to the database and execute any migrations
pub async fn setup_database(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Migrations executed");
    }

    Ok(pool)
}

pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn like_operator(pattern: &TextPattern) -> &'static str {
    if pattern.is_case_sensitive() {
        "LIKE"
    } else {
        "ILIKE"
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn find_posts(&self, pattern: &TextPattern) -> Result<Vec<Post>, StoreError> {
        let query = format!(
            r#"SELECT
                id,
                user_handle,
                text,
                created_at,
                lat,
                lon
            FROM
                tweets
            WHERE
                text {} $1 ESCAPE '\'
            ORDER BY
                created_at ASC, id ASC"#,
            like_operator(pattern)
        );

        let posts = sqlx::query_as::<_, PostRow>(&query)
            .bind(pattern.to_like())
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Post::from)
            .collect();

        Ok(posts)
    }

    async fn trend(
        &self,
        granularity: Granularity,
        filter: Option<&TextPattern>,
    ) -> Result<Vec<TrendBucket>, StoreError> {
        let operator = filter.map(like_operator).unwrap_or("ILIKE");
        let query = format!(
            r#"SELECT
                created_at
            FROM
                tweets
            WHERE
                ($1::TEXT IS NULL OR text {} $1 ESCAPE '\')"#,
            operator
        );

        let mut rows = sqlx::query_scalar::<_, DateTime<Utc>>(&query)
            .bind(filter.map(TextPattern::to_like))
            .fetch(&self.pool);

        let mut counter = TrendCounter::new(granularity);
        while let Some(created_at) = rows.try_next().await? {
            counter.add(&created_at);
        }

        Ok(counter.finish())
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}
