pub mod mealdb;
pub mod openai;

pub use mealdb::{MealDbClient, RecipeSource};
pub use openai::{OpenAiClient, TextGenerator};
