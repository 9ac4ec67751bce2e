//! Demo-content seeder.
//!
//! Pulls random meals from TheMealDB, stores them, and publishes synthetic
//! posts with AI-generated authors, captions and like lists.
//!
//! Usage:
//!   DATABASE_URL=... OPENAI_API_KEY=... ./seed-posts
//!
//! Environment variables:
//!   DATABASE_URL    — PostgreSQL connection string (required)
//!   OPENAI_API_KEY  — text-generation API key (required)
//!   SEED_COUNT      — iterations to run (default: 5)
//!   SEED_DELAY_MS   — pause between iterations (default: 1000)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;

use kitchen_copilot::clients::{MealDbClient, OpenAiClient, RecipeSource, TextGenerator};
use kitchen_copilot::config::AppConfig;
use kitchen_copilot::seed::{SeedOptions, Seeder};
use kitchen_copilot::store::{DocumentStore, PgDocumentStore};

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "seed_posts=info,kitchen_copilot=info".to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;
    let api_key = config
        .openai
        .api_key
        .clone()
        .context("OPENAI_API_KEY required")?;

    let count = env_usize("SEED_COUNT", 5);
    let delay = Duration::from_millis(env_usize("SEED_DELAY_MS", 1000) as u64);

    let store = Arc::new(PgDocumentStore::connect(&config.database_url).await?)
        as Arc<dyn DocumentStore>;
    let http = reqwest::Client::new();
    let recipes = Arc::new(MealDbClient::new(http.clone(), config.mealdb_base_url.clone()))
        as Arc<dyn RecipeSource>;
    let textgen = Arc::new(OpenAiClient::new(http, api_key, config.openai.model.clone()))
        as Arc<dyn TextGenerator>;

    let seeder = Seeder::new(store, recipes, textgen);
    let opts = SeedOptions { count, delay };

    tracing::info!(count, delay_ms = delay.as_millis() as u64, "seeding meals and posts");
    let mut rng = StdRng::from_entropy();
    seeder.run(&opts, &mut rng).await?;
    tracing::info!("seeding finished");
    Ok(())
}
