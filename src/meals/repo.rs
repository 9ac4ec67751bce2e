use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::store::DocumentStore;

pub const MEALS: &str = "meals";

/// A stored meal, kept in the MealDB wire shape so seeded documents stay
/// compatible with what the recipe API returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: String,
    #[serde(rename = "strInstructions", default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Store a meal keyed by its external id; re-seeding the same id overwrites.
pub async fn upsert(store: &dyn DocumentStore, meal: &Meal) -> anyhow::Result<()> {
    let doc = serde_json::to_value(meal).context("serialize meal")?;
    store.set(MEALS, &meal.id, doc).await
}

/// The full meal pool used as plan-generation input.
pub async fn fetch_all(store: &dyn DocumentStore) -> anyhow::Result<Vec<Meal>> {
    let docs = store.list(MEALS).await?;
    docs.into_iter()
        .map(|(id, doc)| {
            serde_json::from_value(doc).with_context(|| format!("deserialize meal {id}"))
        })
        .collect()
}

/// Look a meal up by its external id field.
pub async fn get_by_id(store: &dyn DocumentStore, meal_id: &str) -> anyhow::Result<Option<Meal>> {
    let mut hits = store.query_eq(MEALS, "idMeal", meal_id, 1).await?;
    hits.pop()
        .map(|doc| serde_json::from_value(doc).context("deserialize meal"))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn meal(id: &str, name: &str) -> Meal {
        Meal {
            id: id.into(),
            name: name.into(),
            thumbnail: format!("https://themealdb.com/images/{id}.jpg"),
            instructions: None,
        }
    }

    #[tokio::test]
    async fn upsert_is_idempotent_by_external_id() {
        let store = MemoryStore::new();
        upsert(&store, &meal("52772", "Teriyaki")).await.unwrap();
        upsert(&store, &meal("52772", "Teriyaki Chicken Casserole"))
            .await
            .unwrap();

        let all = fetch_all(&store).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Teriyaki Chicken Casserole");
    }

    #[tokio::test]
    async fn get_by_id_queries_the_wire_field() {
        let store = MemoryStore::new();
        upsert(&store, &meal("52772", "Teriyaki")).await.unwrap();
        upsert(&store, &meal("52804", "Poutine")).await.unwrap();

        let hit = get_by_id(&store, "52804").await.unwrap().unwrap();
        assert_eq!(hit.name, "Poutine");
        assert!(get_by_id(&store, "99999").await.unwrap().is_none());
    }

    #[test]
    fn meal_serializes_in_mealdb_shape() {
        let json = serde_json::to_value(meal("1", "Soup")).unwrap();
        assert_eq!(json["idMeal"], "1");
        assert_eq!(json["strMeal"], "Soup");
        assert!(json.get("strInstructions").is_none());
    }
}
