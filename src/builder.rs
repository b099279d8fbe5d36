use log::{debug, info};
use std::time::Duration;

use crate::config::FinderConfig;
use crate::dedupe::dedupe;
use crate::error::SearchError;
use crate::ingredients;
use crate::intersection::intersect_all;
use crate::lookup::{MealDbClient, RecipeLookup};
use crate::model::Recipe;

/// Outcome of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Validated ingredient tokens, in input order
    pub ingredients: Vec<String>,
    /// Deduplicated recipes containing every ingredient, in first-ingredient order
    pub recipes: Vec<Recipe>,
    /// Number of matches before duplicates were collapsed
    pub matched_before_dedupe: usize,
}

/// Runs ingredient searches against a [`RecipeLookup`]
pub struct RecipeFinder {
    lookup: Box<dyn RecipeLookup>,
}

impl RecipeFinder {
    /// Creates a new builder for a recipe finder
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder();
    /// ```
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }

    pub fn with_lookup(lookup: impl RecipeLookup + 'static) -> Self {
        RecipeFinder {
            lookup: Box::new(lookup),
        }
    }

    /// Find the recipes containing every ingredient in `raw`
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_finder::RecipeFinder;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let finder = RecipeFinder::builder().build()?;
    /// let result = finder.search("chicken, rice").await?;
    /// println!("{} recipes", result.recipes.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, raw: &str) -> Result<SearchResult, SearchError> {
        self.search_with_progress(raw, |_, _| {}).await
    }

    /// Like [`RecipeFinder::search`], calling `on_fetched` after each ingredient's lookup.
    ///
    /// Lookups run one at a time in ingredient order. The first failing lookup
    /// ends the search and the remaining ingredients are not requested.
    pub async fn search_with_progress<F>(
        &self,
        raw: &str,
        mut on_fetched: F,
    ) -> Result<SearchResult, SearchError>
    where
        F: FnMut(&str, &[Recipe]) + Send,
    {
        let ingredients = ingredients::parse_and_validate(raw)?;
        info!("Searching recipes for: {}", ingredients.join(", "));

        let mut lists = Vec::with_capacity(ingredients.len());
        for ingredient in &ingredients {
            let recipes = self.lookup.lookup(ingredient).await?;
            on_fetched(ingredient, &recipes);
            lists.push(recipes);
        }

        let matched = intersect_all(&lists);
        let matched_before_dedupe = matched.len();
        let recipes = dedupe(matched);
        debug!(
            "{} match(es), {} after removing duplicates",
            matched_before_dedupe,
            recipes.len()
        );

        Ok(SearchResult {
            ingredients,
            recipes,
            matched_before_dedupe,
        })
    }
}

/// Builder for configuring a [`RecipeFinder`]
#[derive(Default)]
pub struct RecipeFinderBuilder {
    config: FinderConfig,
    lookup: Option<Box<dyn RecipeLookup>>,
}

impl RecipeFinderBuilder {
    /// Start from a loaded configuration instead of the defaults
    pub fn config(mut self, config: FinderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the base URL of the recipe database
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into();
        self
    }

    /// Set a timeout for each lookup request
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.config.timeout = duration.as_secs().max(1);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Use a custom lookup instead of the HTTP client. Connection settings are then ignored.
    pub fn lookup(mut self, lookup: impl RecipeLookup + 'static) -> Self {
        self.lookup = Some(Box::new(lookup));
        self
    }

    /// Build the finder
    ///
    /// # Errors
    /// Returns [`SearchError::ClientError`] if the HTTP client cannot be created.
    pub fn build(self) -> Result<RecipeFinder, SearchError> {
        let lookup = match self.lookup {
            Some(lookup) => lookup,
            None => {
                debug!("Using recipe database at {}", self.config.api_base_url);
                Box::new(MealDbClient::new(&self.config)?)
            }
        };
        Ok(RecipeFinder { lookup })
    }
}
