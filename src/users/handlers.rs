use axum::{extract::State, Json};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

use super::dto::{CreateUserRequest, CreateUserResponse};
use super::repo;

#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, AppError> {
    let user = repo::create(
        state.store.as_ref(),
        body.name,
        body.email,
        body.diet,
        body.excluded_ingredients,
        body.cuisine,
    )
    .await?;

    Ok(Json(CreateUserResponse {
        message: "User created successfully!".into(),
        user_id: user.user_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_user_returns_generated_id() {
        let state = AppState::fake();
        let body = CreateUserRequest {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            diet: Some("vegan".into()),
            excluded_ingredients: vec![],
            cuisine: vec![],
        };

        let Json(res) = create_user(State(state.clone()), Json(body)).await.unwrap();
        assert_eq!(res.message, "User created successfully!");
        assert!(!res.user_id.is_empty());

        let stored = repo::get(state.store.as_ref(), &res.user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.preferences.diet, "vegan");
    }
}
