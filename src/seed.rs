use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::Client;

use crate::model::Recipe;

const BUNDLED_DATA: &str = include_str!("../assets/data.json");
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "Mozilla/5.0 (compatible; RecipeBox/0.1)";

/// Where the initial recipe collection comes from
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Short name used in log lines
    fn source_name(&self) -> &str;

    /// Load the seed collection. Failures are logged and yield an empty list.
    async fn load(&self) -> Vec<Recipe>;
}

/// Seed collection compiled into the binary
pub struct BundledSeed;

#[async_trait]
impl SeedSource for BundledSeed {
    fn source_name(&self) -> &str {
        "bundled"
    }

    async fn load(&self) -> Vec<Recipe> {
        bundled_seed()
    }
}

/// Seed collection served as a static JSON document
pub struct RemoteSeed {
    url: String,
    client: Client,
}

impl RemoteSeed {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(RemoteSeed {
            url: url.into(),
            client,
        })
    }

    async fn try_fetch(&self) -> Result<Vec<Recipe>, reqwest::Error> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        response.json::<Vec<Recipe>>().await
    }
}

#[async_trait]
impl SeedSource for RemoteSeed {
    fn source_name(&self) -> &str {
        &self.url
    }

    async fn load(&self) -> Vec<Recipe> {
        debug!("Fetching seed recipes from {}", self.url);
        match self.try_fetch().await {
            Ok(recipes) => {
                info!("Fetched {} recipes from {}", recipes.len(), self.url);
                recipes
            }
            Err(e) => {
                error!("Failed to fetch recipes from {}: {}", self.url, e);
                Vec::new()
            }
        }
    }
}

/// Parse the bundled seed collection.
pub fn bundled_seed() -> Vec<Recipe> {
    match serde_json::from_str(BUNDLED_DATA) {
        Ok(recipes) => recipes,
        Err(e) => {
            error!("Bundled seed data is invalid: {}", e);
            Vec::new()
        }
    }
}

/// Fetch a static recipe document over HTTP.
///
/// Best effort: any failure is logged and an empty list is returned. There is
/// no retry and no caching.
pub async fn fetch_seed(url: &str, timeout: Option<Duration>) -> Vec<Recipe> {
    match RemoteSeed::new(url, timeout) {
        Ok(source) => source.load().await,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{MIN_INGREDIENTS, MIN_STEPS};

    #[test]
    fn test_bundled_seed_parses() {
        let recipes = bundled_seed();
        assert_eq!(recipes.len(), 3);
        assert_eq!(recipes[0].title, "Spaghetti Carbonara");
    }

    #[test]
    fn test_bundled_seed_respects_record_invariants() {
        for recipe in bundled_seed() {
            assert!(!recipe.title.trim().is_empty());
            assert!(recipe.ingredients.len() >= MIN_INGREDIENTS);
            assert!(recipe.instructions.len() >= MIN_STEPS);
            assert!(recipe.summary.chars().count() <= 120);
        }
    }

    #[test]
    fn test_bundled_seed_ids_are_unique() {
        let recipes = bundled_seed();
        let mut ids: Vec<u64> = recipes.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), recipes.len());
    }

    #[tokio::test]
    async fn test_bundled_source() {
        let source = BundledSeed;
        assert_eq!(source.source_name(), "bundled");
        assert_eq!(source.load().await, bundled_seed());
    }
}
