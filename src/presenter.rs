use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::model::Recipe;

/// Maximum number of recipes listed after a search.
pub const MAX_DISPLAYED: usize = 10;

pub const NO_MATCHES_MESSAGE: &str = "No recipes contain all of those ingredients.";

/// Sort recipes for display, ascending by name.
///
/// Names are compared by their letters first, ignoring case and accents, so
/// "apple" sorts before "Beef" and "Éclair" sorts among the E's. Names that
/// only differ in accents or case are then ordered accent-first, lower-case
/// before upper-case. Fully equal names keep their order.
pub fn sort_for_display(recipes: &mut [Recipe]) {
    recipes.sort_by_cached_key(|r| collation_key(&r.name));
}

fn collation_key(name: &str) -> (String, String, Vec<bool>) {
    let decomposed: String = name.nfd().collect();
    let base: String = decomposed
        .chars()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();
    let accents: String = decomposed.to_lowercase();
    let case: Vec<bool> = decomposed.chars().map(char::is_uppercase).collect();
    (base, accents, case)
}

/// Format a result set as lines for the terminal.
///
/// Recipes are listed in display order, at most [`MAX_DISPLAYED`] of them,
/// followed by a count of the ones left out.
pub fn present(recipes: &[Recipe]) -> Vec<String> {
    if recipes.is_empty() {
        return vec![NO_MATCHES_MESSAGE.to_string()];
    }

    let mut sorted = recipes.to_vec();
    sort_for_display(&mut sorted);

    let mut lines = Vec::with_capacity(MAX_DISPLAYED + 2);
    lines.push(format!("Found {} recipe(s):", sorted.len()));
    for (index, recipe) in sorted.iter().take(MAX_DISPLAYED).enumerate() {
        lines.push(format_recipe(index + 1, recipe));
    }

    let hidden = sorted.len().saturating_sub(MAX_DISPLAYED);
    if hidden > 0 {
        lines.push(format!("...and {} more", hidden));
    }

    lines
}

fn format_recipe(position: usize, recipe: &Recipe) -> String {
    if recipe.thumbnail.is_empty() {
        format!("{:>2}. {} (id {})", position, recipe.name, recipe.id)
    } else {
        format!(
            "{:>2}. {} (id {}) {}",
            position, recipe.name, recipe.id, recipe.thumbnail
        )
    }
}

/// Statistics about one search, derived from its ingredients and deduplicated results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    pub ingredient_count: usize,
    pub ingredients: Vec<String>,
    pub recipe_count: usize,
    /// Sum of recipe name lengths in characters, over the whole result set
    pub total_name_length: usize,
    pub used_three_or_more: bool,
    pub has_results: bool,
}

impl SearchSummary {
    pub fn lines(&self) -> Vec<String> {
        vec![
            "Summary:".to_string(),
            format!("  Ingredients ({}): {}", self.ingredient_count, self.ingredients.join(", ")),
            format!("  Recipes found: {}", self.recipe_count),
            format!("  Total length of recipe names: {}", self.total_name_length),
            format!("  Used 3 or more ingredients: {}", yes_no(self.used_three_or_more)),
            format!("  Any results: {}", yes_no(self.has_results)),
        ]
    }
}

pub fn summarize(ingredients: &[String], recipes: &[Recipe]) -> SearchSummary {
    SearchSummary {
        ingredient_count: ingredients.len(),
        ingredients: ingredients.to_vec(),
        recipe_count: recipes.len(),
        total_name_length: recipes.iter().map(|r| r.name.chars().count()).sum(),
        used_three_or_more: ingredients.len() >= 3,
        has_results: !recipes.is_empty(),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<Recipe> {
        (0..count)
            .map(|i| Recipe::new(i.to_string(), format!("Recipe {:02}", i), ""))
            .collect()
    }

    fn sorted_names(names: &[&str]) -> Vec<String> {
        let mut recipes: Vec<Recipe> = names
            .iter()
            .enumerate()
            .map(|(i, name)| Recipe::new(i.to_string(), *name, ""))
            .collect();
        sort_for_display(&mut recipes);
        recipes.into_iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_sort_interleaves_cases() {
        assert_eq!(
            sorted_names(&["beef stew", "Apple Pie", "Banana Bread"]),
            vec!["Apple Pie", "Banana Bread", "beef stew"]
        );
        assert_eq!(
            sorted_names(&["Beef Wellington", "apple frangipan tart"]),
            vec!["apple frangipan tart", "Beef Wellington"]
        );
    }

    #[test]
    fn test_sort_accented_names_among_their_letter() {
        assert_eq!(
            sorted_names(&["Éclair", "Zucchini Fritters", "apple frangipan tart", "Beef Wellington"]),
            vec!["apple frangipan tart", "Beef Wellington", "Éclair", "Zucchini Fritters"]
        );
    }

    #[test]
    fn test_sort_breaks_ties_by_accent_then_case() {
        assert_eq!(
            sorted_names(&["Pâté", "pate", "Pate", "pâté"]),
            vec!["pate", "Pate", "pâté", "Pâté"]
        );
    }

    #[test]
    fn test_sort_keeps_order_of_equal_names() {
        let mut recipes = vec![
            Recipe::new("2", "Laksa", ""),
            Recipe::new("1", "Laksa", ""),
        ];
        sort_for_display(&mut recipes);
        assert_eq!(recipes[0].id, "2");
        assert_eq!(recipes[1].id, "1");
    }

    #[test]
    fn test_present_truncates_to_ten() {
        let lines = present(&numbered(15));
        assert_eq!(lines[0], "Found 15 recipe(s):");
        let entries = lines.iter().filter(|l| l.contains("(id ")).count();
        assert_eq!(entries, 10);
        assert_eq!(lines.last().unwrap(), "...and 5 more");
    }

    #[test]
    fn test_present_exactly_ten_has_no_remainder() {
        let lines = present(&numbered(10));
        assert_eq!(lines.len(), 11);
        assert!(!lines.iter().any(|l| l.contains("more")));
    }

    #[test]
    fn test_present_mixed_case_and_accents() {
        let recipes = vec![
            Recipe::new("1", "apple frangipan tart", ""),
            Recipe::new("2", "Beef Wellington", ""),
            Recipe::new("3", "Éclair", ""),
        ];
        let lines = present(&recipes);
        assert_eq!(lines[1], " 1. apple frangipan tart (id 1)");
        assert_eq!(lines[2], " 2. Beef Wellington (id 2)");
        assert_eq!(lines[3], " 3. Éclair (id 3)");
    }

    #[test]
    fn test_present_empty_says_so() {
        assert_eq!(present(&[]), vec![NO_MATCHES_MESSAGE.to_string()]);
    }

    #[test]
    fn test_present_lists_in_name_order() {
        let recipes = vec![
            Recipe::new("2", "Teriyaki Chicken", "https://img/2.jpg"),
            Recipe::new("3", "Chicken Fried Rice", ""),
        ];
        let lines = present(&recipes);
        assert_eq!(lines[1], " 1. Chicken Fried Rice (id 3)");
        assert_eq!(lines[2], " 2. Teriyaki Chicken (id 2) https://img/2.jpg");
    }

    #[test]
    fn test_summarize() {
        let ingredients = vec!["egg".to_string(), "rice".to_string(), "peas".to_string()];
        let recipes = vec![Recipe::new("1", "Kedgeree", ""), Recipe::new("2", "Congee", "")];

        let summary = summarize(&ingredients, &recipes);
        assert_eq!(summary.ingredient_count, 3);
        assert_eq!(summary.recipe_count, 2);
        assert_eq!(summary.total_name_length, 14);
        assert!(summary.used_three_or_more);
        assert!(summary.has_results);
    }

    #[test]
    fn test_summarize_without_results() {
        let summary = summarize(&["okra".to_string()], &[]);
        assert_eq!(summary.total_name_length, 0);
        assert!(!summary.used_three_or_more);
        assert!(!summary.has_results);
        assert!(summary.lines().contains(&"  Any results: no".to_string()));
    }
}
