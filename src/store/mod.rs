mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;

use async_trait::async_trait;
use serde_json::Value;

/// Document-store contract the rest of the app is written against.
///
/// Collections are flat; sub-collections are expressed as path-shaped
/// collection names (e.g. `users/{user_id}/meal_plans`). All writes are
/// last-write-wins; there are no transactions or multi-document atomicity.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a single document by id.
    async fn get(&self, collection: &str, id: &str) -> anyhow::Result<Option<Value>>;

    /// Overwrite-or-create a document under an explicit id.
    async fn set(&self, collection: &str, id: &str, doc: Value) -> anyhow::Result<()>;

    /// Create a document under a freshly generated id; returns the id.
    async fn insert(&self, collection: &str, doc: Value) -> anyhow::Result<String>;

    /// Equality match on a top-level field, capped at `limit` documents.
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        limit: i64,
    ) -> anyhow::Result<Vec<Value>>;

    /// All documents in a collection, paired with their ids.
    async fn list(&self, collection: &str) -> anyhow::Result<Vec<(String, Value)>>;
}
