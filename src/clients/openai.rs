use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const FALLBACK_TITLE: &str = "Delicious Meal";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    pub title: String,
    pub description: String,
}

/// Synthetic-text source for the seeder.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// A single short username (spaces replaced with underscores).
    async fn username(&self) -> anyhow::Result<String>;

    /// A title/description pair for a post about `meal_name`.
    async fn post_content(&self, meal_name: &str) -> anyhow::Result<PostContent>;

    /// One bulk call returning at most `n` usernames.
    async fn username_batch(&self, n: usize) -> anyhow::Result<Vec<String>>;
}

/// OpenAI chat-completions client.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

impl OpenAiClient {
    pub fn new(http: reqwest::Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            model: model.into(),
            base_url: "https://api.openai.com/v1".into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn complete(
        &self,
        role: &str,
        prompt: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> anyhow::Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role,
                content: prompt,
            }],
            temperature,
            max_tokens,
        };
        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("chat completion request")?
            .error_for_status()
            .context("chat completion failed")?;
        let body: ChatResponse = response.json().await.context("decode chat completion")?;
        let choice = body
            .choices
            .into_iter()
            .next()
            .context("chat completion returned no choices")?;
        Ok(choice.message.content)
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn username(&self) -> anyhow::Result<String> {
        let text = self
            .complete(
                "user",
                "Generate a unique and fun username under 15 characters. Do not type reaction.",
                0.8,
                15,
            )
            .await?;
        Ok(sanitize_username(&text))
    }

    async fn post_content(&self, meal_name: &str) -> anyhow::Result<PostContent> {
        let prompt = format!(
            "Write a catchy social media post title and a short description about '{meal_name}', \
             separating them with '|'. Keep it fun and engaging."
        );
        let text = self.complete("user", &prompt, 0.7, 100).await?;
        Ok(parse_post_content(&text))
    }

    async fn username_batch(&self, n: usize) -> anyhow::Result<Vec<String>> {
        let text = self
            .complete(
                "system",
                "Generate a list of unique, fun usernames (comma-separated). \
                 Each username should be under 15 characters.",
                0.8,
                200,
            )
            .await?;
        Ok(parse_username_batch(&text, n))
    }
}

pub fn sanitize_username(raw: &str) -> String {
    raw.trim().replace(' ', "_")
}

/// Split a `title | description` reply; replies without the delimiter keep
/// their full text as the description under a stock title.
pub fn parse_post_content(raw: &str) -> PostContent {
    match raw.split_once('|') {
        Some((title, description)) => PostContent {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
        },
        None => PostContent {
            title: FALLBACK_TITLE.into(),
            description: raw.trim().to_string(),
        },
    }
}

pub fn parse_username_batch(raw: &str, n: usize) -> Vec<String> {
    raw.split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .take(n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_content_splits_on_the_delimiter() {
        let content = parse_post_content("Laksa Love | Spice up your Tuesday.");
        assert_eq!(content.title, "Laksa Love");
        assert_eq!(content.description, "Spice up your Tuesday.");
    }

    #[test]
    fn post_content_without_delimiter_falls_back_to_default_title() {
        let content = parse_post_content("Just a plain caption about noodles.");
        assert_eq!(content.title, FALLBACK_TITLE);
        assert_eq!(content.description, "Just a plain caption about noodles.");
    }

    #[test]
    fn usernames_lose_their_spaces() {
        assert_eq!(sanitize_username("  Noodle Ninja \n"), "Noodle_Ninja");
    }

    #[test]
    fn username_batch_is_truncated_and_trimmed() {
        let names = parse_username_batch("a, b , c,, d", 3);
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
