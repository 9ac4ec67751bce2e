use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, PgPool, Row};
use uuid::Uuid;

use super::DocumentStore;

/// Postgres-backed document store. Everything lives in one `documents`
/// table keyed by (collection, id) with a JSONB payload.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .context("connect to database")?;

        if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
            tracing::warn!(error = %e, "migrations folder not found or migration failed; continuing");
        }

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> anyhow::Result<Option<Value>> {
        let row = sqlx::query(
            r#"
            SELECT data
            FROM documents
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| r.get::<Value, _>("data")))
    }

    async fn set(&self, collection: &str, id: &str, doc: Value) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, id) DO UPDATE SET data = EXCLUDED.data
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(doc)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn insert(&self, collection: &str, doc: Value) -> anyhow::Result<String> {
        let id = Uuid::new_v4().to_string();
        self.set(collection, &id, doc).await?;
        Ok(id)
    }

    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        limit: i64,
    ) -> anyhow::Result<Vec<Value>> {
        let rows = sqlx::query(
            r#"
            SELECT data
            FROM documents
            WHERE collection = $1 AND data ->> $2 = $3
            ORDER BY id
            LIMIT $4
            "#,
        )
        .bind(collection)
        .bind(field)
        .bind(value)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|r| r.get::<Value, _>("data")).collect())
    }

    async fn list(&self, collection: &str) -> anyhow::Result<Vec<(String, Value)>> {
        let rows = sqlx::query(
            r#"
            SELECT id, data
            FROM documents
            WHERE collection = $1
            ORDER BY id
            "#,
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| (r.get::<String, _>("id"), r.get::<Value, _>("data")))
            .collect())
    }
}
