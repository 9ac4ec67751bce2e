use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub mealdb_base_url: String,
    pub openai: OpenAiConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let mealdb_base_url = std::env::var("MEALDB_BASE_URL")
            .unwrap_or_else(|_| "https://www.themealdb.com/api/json/v1/1".into());
        let openai = OpenAiConfig {
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".into()),
        };
        Ok(Self {
            database_url,
            mealdb_base_url,
            openai,
        })
    }
}
