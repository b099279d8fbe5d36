use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::FinderConfig;
use crate::error::SearchError;
use crate::model::Recipe;

/// Source of recipes for a single ingredient
#[async_trait]
pub trait RecipeLookup: Send + Sync {
    /// Recipes containing `ingredient`, in the order the source returns them.
    /// An ingredient without matches yields an empty list.
    async fn lookup(&self, ingredient: &str) -> Result<Vec<Recipe>, SearchError>;
}

#[derive(Debug, Deserialize)]
struct FilterResponse {
    // TheMealDB answers `{"meals": null}` when nothing matches
    #[serde(default)]
    meals: Option<Vec<Recipe>>,
}

/// Client for TheMealDB's filter-by-ingredient endpoint
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a client from configuration
    pub fn new(config: &FinderConfig) -> Result<Self, SearchError> {
        Self::with_base_url(
            config.api_base_url.clone(),
            config.timeout_duration(),
            &config.user_agent,
        )
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(SearchError::ClientError)?;

        Ok(MealDbClient {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, ingredient: &str) -> Result<Vec<Recipe>, reqwest::Error> {
        let response = self
            .client
            .get(format!("{}/filter.php", self.base_url))
            .query(&[("i", ingredient)])
            .send()
            .await?
            .error_for_status()?;

        let body: FilterResponse = response.json().await?;
        Ok(body.meals.unwrap_or_default())
    }
}

#[async_trait]
impl RecipeLookup for MealDbClient {
    async fn lookup(&self, ingredient: &str) -> Result<Vec<Recipe>, SearchError> {
        let recipes = self
            .fetch(ingredient)
            .await
            .map_err(|e| SearchError::LookupFailure {
                ingredient: ingredient.to_string(),
                source: Box::new(e),
            })?;

        debug!("'{}' matched {} recipe(s)", ingredient, recipes.len());
        Ok(recipes)
    }
}
