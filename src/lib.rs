pub mod builder;
pub mod config;
pub mod dedupe;
pub mod error;
pub mod ingredients;
pub mod intersection;
pub mod lookup;
pub mod model;
pub mod presenter;
pub mod session;
pub mod terminal;

pub use builder::{RecipeFinder, RecipeFinderBuilder, SearchResult};
pub use config::FinderConfig;
pub use error::SearchError;
pub use lookup::{MealDbClient, RecipeLookup};
pub use model::Recipe;
pub use presenter::SearchSummary;
pub use session::{Session, SessionState};
pub use terminal::{StdTerminal, Terminal};

/// Find recipes containing every ingredient in `raw` using the default configuration.
///
/// Configuration is read from `config.toml` and `RECIPE_FINDER__*` environment variables.
pub async fn find_recipes(raw: &str) -> Result<Vec<Recipe>, SearchError> {
    let config = FinderConfig::load()?;
    let finder = RecipeFinder::builder().config(config).build()?;
    Ok(finder.search(raw).await?.recipes)
}
