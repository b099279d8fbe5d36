use crate::error::SearchError;

/// Maximum number of ingredients in one search. Each one costs a sequential request.
pub const MAX_INGREDIENTS: usize = 6;

/// Minimum length of an ingredient, in characters.
pub const MIN_INGREDIENT_LEN: usize = 2;

/// Split raw user input into ingredient tokens.
///
/// Pieces are split on commas, trimmed and lower-cased. Empty pieces are
/// dropped; the remaining tokens keep their input order and are not deduplicated.
pub fn parse(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|piece| piece.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Check a list of ingredient tokens before any lookup is made.
///
/// Rules are applied in order and the first failing one is reported.
pub fn validate(tokens: &[String]) -> Result<(), SearchError> {
    if let Some(token) = tokens.iter().find(|t| !is_normalized(t)) {
        return Err(SearchError::InvalidInput(format!(
            "'{}' is not a parsed ingredient",
            token
        )));
    }

    if tokens.is_empty() {
        return Err(SearchError::EmptyIngredientList);
    }

    if tokens.len() > MAX_INGREDIENTS {
        return Err(SearchError::TooManyIngredients {
            count: tokens.len(),
            max: MAX_INGREDIENTS,
        });
    }

    if let Some(token) = tokens
        .iter()
        .find(|t| t.chars().count() < MIN_INGREDIENT_LEN)
    {
        return Err(SearchError::IngredientTooShort(token.clone()));
    }

    Ok(())
}

/// Parse raw input and validate the resulting tokens.
pub fn parse_and_validate(raw: &str) -> Result<Vec<String>, SearchError> {
    let tokens = parse(raw);
    validate(&tokens)?;
    Ok(tokens)
}

fn is_normalized(token: &str) -> bool {
    !token.is_empty()
        && !token.contains(',')
        && token.trim() == token
        && token.to_lowercase() == token
}
