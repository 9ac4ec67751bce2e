use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::DocumentStore;

/// In-process store used by `AppState::fake()` and unit tests.
#[derive(Default)]
pub struct MemoryStore {
    // (collection, id) -> document; BTreeMap keeps listing order stable.
    docs: RwLock<BTreeMap<(String, String), Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> anyhow::Result<Option<Value>> {
        let docs = self.docs.read().await;
        Ok(docs.get(&(collection.to_string(), id.to_string())).cloned())
    }

    async fn set(&self, collection: &str, id: &str, doc: Value) -> anyhow::Result<()> {
        let mut docs = self.docs.write().await;
        docs.insert((collection.to_string(), id.to_string()), doc);
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
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .filter(|((c, _), _)| c == collection)
            .filter(|(_, doc)| doc.get(field).and_then(Value::as_str) == Some(value))
            .take(limit.max(0) as usize)
            .map(|(_, doc)| doc.clone())
            .collect())
    }

    async fn list(&self, collection: &str) -> anyhow::Result<Vec<(String, Value)>> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .filter(|((c, _), _)| c == collection)
            .map(|((_, id), doc)| (id.clone(), doc.clone()))
            .collect())
    }
}
