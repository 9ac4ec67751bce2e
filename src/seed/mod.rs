use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::clients::{RecipeSource, TextGenerator};
use crate::meals::{self, Meal};
use crate::posts::{self, Location, Post, PostType};
use crate::store::DocumentStore;

pub const SINGAPORE_LAT_RANGE: (f64, f64) = (1.24, 1.45);
pub const SINGAPORE_LON_RANGE: (f64, f64) = (103.7, 104.0);

const USERNAME_BATCH_SIZE: usize = 500;
const MAX_LIKES: usize = 500;

#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub count: usize,
    /// Fixed pause between iterations; client-side rate limiting only.
    pub delay: Duration,
}

/// Sequential demo-content pipeline: fetch a random meal, store it, then
/// publish a synthetic post referencing it.
pub struct Seeder {
    store: Arc<dyn DocumentStore>,
    recipes: Arc<dyn RecipeSource>,
    textgen: Arc<dyn TextGenerator>,
}

impl Seeder {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        recipes: Arc<dyn RecipeSource>,
        textgen: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            store,
            recipes,
            textgen,
        }
    }

    /// Run `count` iterations. A failed or empty meal fetch skips the
    /// iteration; text-generation and store failures abort the run.
    pub async fn run<R: Rng>(&self, opts: &SeedOptions, rng: &mut R) -> anyhow::Result<()> {
        for i in 1..=opts.count {
            match self.recipes.random_meal().await {
                Ok(Some(meal)) => {
                    meals::repo::upsert(self.store.as_ref(), &meal).await?;
                    let post_id = self.create_post_for_meal(&meal, rng).await?;
                    info!(
                        iteration = i,
                        total = opts.count,
                        meal_id = %meal.id,
                        %post_id,
                        "seeded meal and post"
                    );
                }
                Ok(None) => warn!(iteration = i, "no meal returned, skipping"),
                Err(e) => warn!(iteration = i, error = %e, "failed to fetch meal, skipping"),
            }

            if !opts.delay.is_zero() {
                tokio::time::sleep(opts.delay).await;
            }
        }
        Ok(())
    }

    async fn create_post_for_meal<R: Rng>(
        &self,
        meal: &Meal,
        rng: &mut R,
    ) -> anyhow::Result<String> {
        let author = self.textgen.username().await?;
        let content = self.textgen.post_content(&meal.name).await?;

        let usernames = self.textgen.username_batch(USERNAME_BATCH_SIZE).await?;
        let likes = random_likes(rng, &usernames);
        let like_count = likes.len() as u64;

        let post = Post {
            user_id: author,
            title: content.title,
            description: Some(content.description),
            image_url: Some(meal.thumbnail.clone()),
            location: Some(random_location(rng)),
            recipe_id: None,
            meal_id: Some(meal.id.clone()),
            post_type: random_post_type(rng),
            created_at: OffsetDateTime::now_utc(),
            likes,
            like_count,
        };

        posts::repo::create(self.store.as_ref(), &post).await
    }
}

pub fn random_location<R: Rng + ?Sized>(rng: &mut R) -> Location {
    Location {
        latitude: rng.gen_range(SINGAPORE_LAT_RANGE.0..=SINGAPORE_LAT_RANGE.1),
        longitude: rng.gen_range(SINGAPORE_LON_RANGE.0..=SINGAPORE_LON_RANGE.1),
    }
}

pub fn random_post_type<R: Rng + ?Sized>(rng: &mut R) -> PostType {
    PostType::ALL[rng.gen_range(0..PostType::ALL.len())]
}

/// Draw a like count in [0, 500] and sample that many distinct usernames
/// (without replacement) from the pre-generated batch.
pub fn random_likes<R: Rng + ?Sized>(rng: &mut R, usernames: &[String]) -> Vec<String> {
    let num_likes = rng.gen_range(0..=MAX_LIKES);
    usernames
        .choose_multiple(rng, num_likes.min(usernames.len()))
        .cloned()
        .collect()
}
