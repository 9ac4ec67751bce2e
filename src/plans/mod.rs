mod dto;
pub mod generator;
pub mod handlers;
pub mod repo;
pub mod week;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/store-meal-plan/:user_id", post(handlers::store_meal_plan))
        .route("/user/:user_id/meal-plans", get(handlers::get_user_meal_plans))
        .route("/meal-plan", get(handlers::get_meal_plan))
}
