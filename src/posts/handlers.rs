use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use time::OffsetDateTime;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

use super::dto::{CreatePostRequest, CreatedPostResponse};
use super::repo::{self, Post, PostWithRecipe};

#[instrument(skip(state, body))]
pub async fn create_post(
    State(state): State<AppState>,
    Json(body): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<CreatedPostResponse>), AppError> {
    let like_count = body.likes.len() as u64;
    let post = Post {
        user_id: body.user_id,
        title: body.title,
        description: body.description,
        image_url: body.image_url,
        location: body.location,
        recipe_id: body.recipe_id,
        meal_id: None,
        post_type: body.post_type,
        created_at: OffsetDateTime::now_utc(),
        likes: body.likes,
        like_count,
    };

    let post_id = repo::create(state.store.as_ref(), &post).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedPostResponse { post_id, post }),
    ))
}

#[instrument(skip(state))]
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<PostWithRecipe>, AppError> {
    let post = repo::get_with_recipe(state.store.as_ref(), &post_id)
        .await?
        .ok_or(AppError::PostNotFound)?;
    Ok(Json(post))
}

#[instrument(skip(state))]
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostWithRecipe>>, AppError> {
    let posts = repo::list_with_recipes(state.store.as_ref()).await?;
    Ok(Json(posts))
}
