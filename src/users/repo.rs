use anyhow::Context;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::store::DocumentStore;

pub const USERS: &str = "users";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub diet: String,
    pub excluded_ingredients: Vec<String>,
    pub cuisine: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub preferences: Preferences,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Create a user with a freshly generated id and store their preferences.
pub async fn create(
    store: &dyn DocumentStore,
    name: String,
    email: String,
    diet: Option<String>,
    excluded_ingredients: Vec<String>,
    cuisine: Vec<String>,
) -> anyhow::Result<User> {
    let user = User {
        user_id: Uuid::new_v4().to_string(),
        name,
        email,
        preferences: Preferences {
            diet: diet.unwrap_or_else(|| "none".into()),
            excluded_ingredients,
            cuisine,
        },
        created_at: OffsetDateTime::now_utc(),
    };

    let doc = serde_json::to_value(&user).context("serialize user")?;
    store.set(USERS, &user.user_id, doc).await?;
    Ok(user)
}

pub async fn get(store: &dyn DocumentStore, user_id: &str) -> anyhow::Result<Option<User>> {
    let doc = store.get(USERS, user_id).await?;
    doc.map(|d| serde_json::from_value(d).context("deserialize user"))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn create_generates_unique_nonempty_ids() {
        let store = MemoryStore::new();
        let a = create(&store, "Ana".into(), "ana@example.com".into(), None, vec![], vec![])
            .await
            .unwrap();
        let b = create(&store, "Ben".into(), "ben@example.com".into(), None, vec![], vec![])
            .await
            .unwrap();

        assert!(!a.user_id.is_empty());
        assert!(!b.user_id.is_empty());
        assert_ne!(a.user_id, b.user_id);
    }

    #[tokio::test]
    async fn create_defaults_diet_to_none() {
        let store = MemoryStore::new();
        let user = create(
            &store,
            "Ana".into(),
            "ana@example.com".into(),
            None,
            vec!["peanuts".into()],
            vec!["thai".into()],
        )
        .await
        .unwrap();

        let fetched = get(&store, &user.user_id).await.unwrap().unwrap();
        assert_eq!(fetched.preferences.diet, "none");
        assert_eq!(fetched.preferences.excluded_ingredients, vec!["peanuts"]);
        assert_eq!(fetched.preferences.cuisine, vec!["thai"]);
    }

    #[tokio::test]
    async fn get_unknown_user_is_none() {
        let store = MemoryStore::new();
        assert!(get(&store, "nope").await.unwrap().is_none());
    }
}
