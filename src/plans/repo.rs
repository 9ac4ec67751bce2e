use std::collections::BTreeMap;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::store::DocumentStore;

use super::generator::WeeklyMealPlan;
use super::week::{iso_date, monday_of, week_key};

fn meal_plans_collection(user_id: &str) -> String {
    format!("users/{user_id}/meal_plans")
}

/// Plan document as persisted under `users/{id}/meal_plans/week_{date}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMealPlan {
    pub week_start: String,
    #[serde(rename = "mealPlan")]
    pub plan: WeeklyMealPlan,
}

/// Persist a plan under the week key for `reference_date`; storing twice in
/// the same week overwrites the earlier document. Returns the week-start
/// ISO date.
pub async fn store_for_week(
    store: &dyn DocumentStore,
    user_id: &str,
    reference_date: Date,
    plan: WeeklyMealPlan,
) -> anyhow::Result<String> {
    let week_start = iso_date(monday_of(reference_date));
    let stored = StoredMealPlan {
        week_start: week_start.clone(),
        plan,
    };
    let doc = serde_json::to_value(&stored).context("serialize meal plan")?;
    store
        .set(&meal_plans_collection(user_id), &week_key(reference_date), doc)
        .await?;
    Ok(week_start)
}

/// All stored plans for a user, keyed by their `week_...` document ids.
pub async fn list_for_user(
    store: &dyn DocumentStore,
    user_id: &str,
) -> anyhow::Result<BTreeMap<String, StoredMealPlan>> {
    let docs = store.list(&meal_plans_collection(user_id)).await?;
    docs.into_iter()
        .map(|(id, doc)| {
            let plan = serde_json::from_value(doc)
                .with_context(|| format!("deserialize meal plan {id}"))?;
            Ok((id, plan))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meals::Meal;
    use crate::plans::generator::generate_weekly_plan;
    use crate::store::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use time::macros::date;

    fn plan() -> WeeklyMealPlan {
        let pool = vec![Meal {
            id: "A".into(),
            name: "Meal A".into(),
            thumbnail: String::new(),
            instructions: None,
        }];
        generate_weekly_plan(&pool, &mut StdRng::seed_from_u64(0)).unwrap()
    }

    #[tokio::test]
    async fn storing_twice_in_one_week_overwrites() {
        let store = MemoryStore::new();
        let day1 = date!(2026 - 08 - 25);
        let day2 = date!(2026 - 08 - 28); // same week

        store_for_week(&store, "u1", day1, plan()).await.unwrap();
        store_for_week(&store, "u1", day2, plan()).await.unwrap();

        let plans = list_for_user(&store, "u1").await.unwrap();
        assert_eq!(plans.len(), 1);
        let stored = plans.get("week_2026-08-24").expect("keyed by monday");
        assert_eq!(stored.week_start, "2026-08-24");
    }

    #[tokio::test]
    async fn different_weeks_get_separate_documents() {
        let store = MemoryStore::new();
        store_for_week(&store, "u1", date!(2026 - 08 - 25), plan())
            .await
            .unwrap();
        store_for_week(&store, "u1", date!(2026 - 09 - 02), plan())
            .await
            .unwrap();

        let plans = list_for_user(&store, "u1").await.unwrap();
        assert_eq!(plans.len(), 2);
        assert!(plans.contains_key("week_2026-08-24"));
        assert!(plans.contains_key("week_2026-08-31"));
    }

    #[tokio::test]
    async fn plans_are_scoped_per_user() {
        let store = MemoryStore::new();
        store_for_week(&store, "u1", date!(2026 - 08 - 25), plan())
            .await
            .unwrap();
        assert!(list_for_user(&store, "u2").await.unwrap().is_empty());
    }
}
