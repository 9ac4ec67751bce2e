use serde::{Deserialize, Serialize};

use super::repo::{Location, Post, PostType};

/// Request body for creating a post; `created_at` is always set server-side.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub recipe_id: Option<String>,
    pub post_type: PostType,
    #[serde(default)]
    pub likes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedPostResponse {
    pub post_id: String,
    #[serde(flatten)]
    pub post: Post,
}
