use indexmap::IndexMap;

use crate::model::Recipe;

/// Collapse recipes sharing an id, keeping the first one seen and its position.
pub fn dedupe(recipes: Vec<Recipe>) -> Vec<Recipe> {
    let mut by_id: IndexMap<String, Recipe> = IndexMap::with_capacity(recipes.len());
    for recipe in recipes {
        by_id.entry(recipe.id.clone()).or_insert(recipe);
    }
    by_id.into_values().collect()
}
