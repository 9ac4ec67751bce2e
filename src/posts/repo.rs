use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

use crate::store::DocumentStore;

pub const POSTS: &str = "posts";
pub const RECIPES: &str = "recipes";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Follow,
    Explore,
    Community,
}

impl PostType {
    pub const ALL: [PostType; 3] = [PostType::Follow, PostType::Explore, PostType::Community];
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub user_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    // Set by the seeder to link a post to the meal it was generated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_id: Option<String>,
    pub post_type: PostType,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub like_count: u64,
}

/// A post as returned to clients: its generated id plus, when the post's
/// `recipe_id` resolves, the embedded recipe document.
#[derive(Debug, Serialize)]
pub struct PostWithRecipe {
    pub post_id: String,
    #[serde(flatten)]
    pub post: Post,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Value>,
}

pub async fn create(store: &dyn DocumentStore, post: &Post) -> anyhow::Result<String> {
    let doc = serde_json::to_value(post).context("serialize post")?;
    store.insert(POSTS, doc).await
}

async fn embed_recipe(
    store: &dyn DocumentStore,
    post_id: String,
    post: Post,
) -> anyhow::Result<PostWithRecipe> {
    let recipe = match &post.recipe_id {
        Some(recipe_id) => store.get(RECIPES, recipe_id).await?,
        None => None,
    };
    Ok(PostWithRecipe {
        post_id,
        post,
        recipe,
    })
}

pub async fn get_with_recipe(
    store: &dyn DocumentStore,
    post_id: &str,
) -> anyhow::Result<Option<PostWithRecipe>> {
    let Some(doc) = store.get(POSTS, post_id).await? else {
        return Ok(None);
    };
    let post: Post = serde_json::from_value(doc).context("deserialize post")?;
    Ok(Some(embed_recipe(store, post_id.to_string(), post).await?))
}

pub async fn list_with_recipes(store: &dyn DocumentStore) -> anyhow::Result<Vec<PostWithRecipe>> {
    let docs = store.list(POSTS).await?;
    let mut posts = Vec::with_capacity(docs.len());
    for (id, doc) in docs {
        let post: Post =
            serde_json::from_value(doc).with_context(|| format!("deserialize post {id}"))?;
        posts.push(embed_recipe(store, id, post).await?);
    }
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn post(recipe_id: Option<&str>) -> Post {
        Post {
            user_id: "u1".into(),
            title: "Dinner win".into(),
            description: Some("So good".into()),
            image_url: None,
            location: None,
            recipe_id: recipe_id.map(String::from),
            meal_id: None,
            post_type: PostType::Explore,
            created_at: OffsetDateTime::UNIX_EPOCH,
            likes: vec!["ana".into()],
            like_count: 1,
        }
    }

    #[tokio::test]
    async fn get_embeds_recipe_when_reference_resolves() {
        let store = MemoryStore::new();
        store
            .set(RECIPES, "r1", json!({"strMeal": "Laksa"}))
            .await
            .unwrap();
        let id = create(&store, &post(Some("r1"))).await.unwrap();

        let found = get_with_recipe(&store, &id).await.unwrap().unwrap();
        assert_eq!(found.post_id, id);
        assert_eq!(found.recipe.as_ref().unwrap()["strMeal"], "Laksa");
    }

    #[tokio::test]
    async fn no_recipe_field_without_reference() {
        let store = MemoryStore::new();
        let id = create(&store, &post(None)).await.unwrap();

        let found = get_with_recipe(&store, &id).await.unwrap().unwrap();
        assert!(found.recipe.is_none());

        let json = serde_json::to_value(&found).unwrap();
        assert!(json.get("recipe").is_none());
    }

    #[tokio::test]
    async fn dangling_recipe_reference_is_not_embedded() {
        let store = MemoryStore::new();
        let id = create(&store, &post(Some("missing"))).await.unwrap();
        let found = get_with_recipe(&store, &id).await.unwrap().unwrap();
        assert!(found.recipe.is_none());
    }

    #[tokio::test]
    async fn list_returns_all_posts() {
        let store = MemoryStore::new();
        create(&store, &post(None)).await.unwrap();
        create(&store, &post(None)).await.unwrap();
        assert_eq!(list_with_recipes(&store).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_post_is_none() {
        let store = MemoryStore::new();
        assert!(get_with_recipe(&store, "nope").await.unwrap().is_none());
    }

    #[test]
    fn post_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(PostType::Community).unwrap(),
            json!("community")
        );
    }
}
