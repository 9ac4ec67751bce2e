use serde::{Deserialize, Serialize};

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub excluded_ingredients: Vec<String>,
    #[serde(default)]
    pub cuisine: Vec<String>,
}

/// Response returned after registration with the generated id.
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub user_id: String,
}
