use std::collections::HashSet;

use crate::model::Recipe;

/// Recipes whose id appears in every one of `lists`.
///
/// The lists are reduced right to left: the last list seeds the accumulator and
/// each list to its left is filtered against it. The result therefore keeps the
/// order of the first list. Duplicate ids are passed through untouched; see
/// [`crate::dedupe::dedupe`].
pub fn intersect_all(lists: &[Vec<Recipe>]) -> Vec<Recipe> {
    match lists {
        [] => Vec::new(),
        [only] => only.clone(),
        [rest @ .., last] => rest
            .iter()
            .rev()
            .fold(last.clone(), |acc, list| intersect_pair(list, &acc)),
    }
}

/// Keep each recipe of `left`, in order, whose id also occurs in `right`.
pub fn intersect_pair(left: &[Recipe], right: &[Recipe]) -> Vec<Recipe> {
    let ids: HashSet<&str> = right.iter().map(|r| r.id.as_str()).collect();
    left.iter()
        .filter(|r| ids.contains(r.id.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(ids: &[&str]) -> Vec<Recipe> {
        ids.iter()
            .map(|id| Recipe::new(*id, format!("Recipe {}", id), ""))
            .collect()
    }

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_no_lists() {
        assert!(intersect_all(&[]).is_empty());
    }

    #[test]
    fn test_single_list_is_unchanged() {
        let only = list(&["3", "1", "3", "2"]);
        assert_eq!(intersect_all(&[only.clone()]), only);
    }

    #[test]
    fn test_three_lists() {
        let lists = vec![list(&["A", "B", "C"]), list(&["B", "C", "D"]), list(&["C", "B"])];
        assert_eq!(ids(&intersect_all(&lists)), vec!["B", "C"]);
    }

    #[test]
    fn test_order_follows_first_list() {
        let lists = vec![list(&["9", "4", "7", "1"]), list(&["1", "7", "4"])];
        assert_eq!(ids(&intersect_all(&lists)), vec!["4", "7", "1"]);
    }

    #[test]
    fn test_empty_list_empties_result() {
        let lists = vec![list(&["1", "2"]), Vec::new(), list(&["1", "2"])];
        assert!(intersect_all(&lists).is_empty());
    }

    #[test]
    fn test_duplicates_pass_through() {
        let lists = vec![list(&["1", "2", "1"]), list(&["1"])];
        assert_eq!(ids(&intersect_all(&lists)), vec!["1", "1"]);
    }

    #[test]
    fn test_membership_ignores_other_fields() {
        let left = vec![Recipe::new("7", "Pad Thai", "a.jpg")];
        let right = vec![Recipe::new("7", "Something Else", "b.jpg")];
        let result = intersect_pair(&left, &right);
        assert_eq!(result, left);
    }

    #[test]
    fn test_result_ids_match_set_intersection() {
        let lists = vec![
            list(&["1", "2", "3", "4", "5", "2"]),
            list(&["5", "4", "3", "2"]),
            list(&["2", "9", "5", "3"]),
            list(&["3", "5", "2", "8"]),
        ];

        let expected: HashSet<&str> = lists
            .iter()
            .map(|l| l.iter().map(|r| r.id.as_str()).collect::<HashSet<_>>())
            .reduce(|a, b| a.intersection(&b).copied().collect())
            .unwrap();

        let result = intersect_all(&lists);
        let actual: HashSet<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(actual, expected);
    }
}
