use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::meals::Meal;

pub const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const MEAL_SLOTS: [&str; 3] = ["Breakfast", "Lunch", "Dinner"];

pub const PLAN_SUMMARY: &str = "They are the curated easy meals for your busy week!";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("No meals found in database.")]
pub struct EmptyMealPool;

/// Canonical meal-summary shape used in every generated plan cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Meal> for MealSummary {
    fn from(meal: &Meal) -> Self {
        Self {
            id: meal.id.clone(),
            name: meal.name.clone(),
            image_url: meal.thumbnail.clone(),
            description: meal.instructions.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyMealPlan {
    pub summary: String,
    #[serde(rename = "mealPlan")]
    pub meal_plan: BTreeMap<String, BTreeMap<String, MealSummary>>,
}

/// Build a full week's plan from the meal pool: one uniform pick per cell,
/// with replacement, so the same meal may show up in several cells.
pub fn generate_weekly_plan<R: Rng + ?Sized>(
    pool: &[Meal],
    rng: &mut R,
) -> Result<WeeklyMealPlan, EmptyMealPool> {
    if pool.is_empty() {
        return Err(EmptyMealPool);
    }

    let mut grid = BTreeMap::new();
    for day in DAYS {
        let mut slots = BTreeMap::new();
        for slot in MEAL_SLOTS {
            let Some(meal) = pool.choose(rng) else {
                return Err(EmptyMealPool);
            };
            slots.insert(slot.to_string(), MealSummary::from(meal));
        }
        grid.insert(day.to_string(), slots);
    }

    Ok(WeeklyMealPlan {
        summary: PLAN_SUMMARY.into(),
        meal_plan: grid,
    })
}
