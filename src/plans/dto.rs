use std::collections::BTreeMap;

use serde::Serialize;

use super::repo::StoredMealPlan;

#[derive(Debug, Serialize)]
pub struct StoreMealPlanResponse {
    pub message: String,
    pub week_start: String,
}

/// Either the map of week-keyed plans or an explicit "none found" message.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MealPlansResponse {
    Found(BTreeMap<String, StoredMealPlan>),
    Empty { message: String },
}
