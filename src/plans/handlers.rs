use axum::{
    extract::{Path, State},
    Json,
};
use time::OffsetDateTime;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;
use crate::{meals, users};

use super::dto::{MealPlansResponse, StoreMealPlanResponse};
use super::generator::{generate_weekly_plan, EmptyMealPool, WeeklyMealPlan};
use super::repo;

impl From<EmptyMealPool> for AppError {
    fn from(_: EmptyMealPool) -> Self {
        AppError::EmptyMealPool
    }
}

/// Generates and persists the current week's plan for a user.
#[instrument(skip(state))]
pub async fn store_meal_plan(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<StoreMealPlanResponse>, AppError> {
    let store = state.store.as_ref();

    if users::repo::get(store, &user_id).await?.is_none() {
        return Err(AppError::UserNotFound);
    }

    let pool = meals::repo::fetch_all(store).await?;
    let plan = {
        let mut rng = rand::thread_rng();
        generate_weekly_plan(&pool, &mut rng)?
    };

    let today = OffsetDateTime::now_utc().date();
    let week_start = repo::store_for_week(store, &user_id, today, plan).await?;

    Ok(Json(StoreMealPlanResponse {
        message: "Full weekly meal plan stored successfully!".into(),
        week_start,
    }))
}

#[instrument(skip(state))]
pub async fn get_user_meal_plans(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<MealPlansResponse>, AppError> {
    let plans = repo::list_for_user(state.store.as_ref(), &user_id).await?;
    if plans.is_empty() {
        return Ok(Json(MealPlansResponse::Empty {
            message: "No meal plans found for this user".into(),
        }));
    }
    Ok(Json(MealPlansResponse::Found(plans)))
}

/// A freshly generated plan; nothing is persisted.
#[instrument(skip(state))]
pub async fn get_meal_plan(
    State(state): State<AppState>,
) -> Result<Json<WeeklyMealPlan>, AppError> {
    let pool = meals::repo::fetch_all(state.store.as_ref()).await?;
    let plan = {
        let mut rng = rand::thread_rng();
        generate_weekly_plan(&pool, &mut rng)?
    };
    Ok(Json(plan))
}
