use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use crate::meals::Meal;

/// Source of random meals for the seeder.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// One random meal, or `None` when the API replies with an empty set.
    async fn random_meal(&self) -> anyhow::Result<Option<Meal>>;
}

/// TheMealDB client (`{base}/random.php`).
#[derive(Clone)]
pub struct MealDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RandomMealResponse {
    // The API returns `"meals": null` when it has nothing to offer.
    meals: Option<Vec<Meal>>,
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn random_meal(&self) -> anyhow::Result<Option<Meal>> {
        let url = format!("{}/random.php", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("fetch random meal")?
            .error_for_status()
            .context("random meal request failed")?;
        let body: RandomMealResponse = response.json().await.context("decode random meal")?;
        Ok(body.meals.and_then(|mut meals| {
            if meals.is_empty() {
                None
            } else {
                Some(meals.swap_remove(0))
            }
        }))
    }
}
