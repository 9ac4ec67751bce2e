mod dto;
pub mod handlers;
pub mod repo;

pub use repo::{Location, Post, PostType};

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", post(handlers::create_post).get(handlers::list_posts))
        .route("/posts/:post_id", get(handlers::get_post))
}
