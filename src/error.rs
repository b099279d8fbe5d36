use thiserror::Error;

/// Errors that can occur while searching for recipes
#[derive(Error, Debug)]
pub enum SearchError {
    /// Ingredient tokens were not in parsed form
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No usable ingredients after parsing
    #[error("Please enter at least one ingredient")]
    EmptyIngredientList,

    /// More ingredients than a single search allows
    #[error("Too many ingredients: {count} given, at most {max} allowed")]
    TooManyIngredients { count: usize, max: usize },

    /// An ingredient shorter than the minimum length
    #[error("Ingredient '{0}' is too short, use at least 2 characters")]
    IngredientTooShort(String),

    /// The recipe database could not be queried for an ingredient
    #[error("Failed to look up recipes for '{ingredient}': {source}")]
    LookupFailure {
        ingredient: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to build the HTTP client
    #[error("Failed to create HTTP client: {0}")]
    ClientError(#[source] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Terminal input/output error
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// Whether the session can recover from this error by prompting again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidInput(_)
                | SearchError::EmptyIngredientList
                | SearchError::TooManyIngredients { .. }
                | SearchError::IngredientTooShort(_)
                | SearchError::LookupFailure { .. }
        )
    }
}
