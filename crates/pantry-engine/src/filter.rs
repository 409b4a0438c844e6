use pantry_types::{ALL_CATEGORY, Catalog, IngredientSelection, Recipe, normalize_label};
use serde::Serialize;
use std::sync::Arc;

/// A recipe that survived filtering.
///
/// `matching_count` is only present when at least one ingredient was
/// selected; the recipe itself is the catalog's canonical value.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredRecipe {
    pub recipe: Arc<Recipe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_count: Option<usize>,
}

/// Filter the catalog by category, then by selected ingredients.
///
/// With a non-empty selection, recipes matching none of the selected
/// ingredients are dropped and the rest are ordered by match count,
/// highest first. Ties keep catalog order (`sort_by` is stable).
pub fn filter_recipes(
    catalog: &Catalog,
    selected: &IngredientSelection,
    category: &str,
) -> Vec<FilteredRecipe> {
    let category = normalize_label(category);
    let in_category = catalog
        .recipes()
        .iter()
        .filter(|recipe| category == ALL_CATEGORY || recipe.has_category(&category));

    if selected.is_empty() {
        return in_category
            .map(|recipe| FilteredRecipe {
                recipe: Arc::clone(recipe),
                matching_count: None,
            })
            .collect();
    }

    let mut matches: Vec<FilteredRecipe> = in_category
        .filter_map(|recipe| {
            let count = matching_count(recipe, selected);
            (count > 0).then(|| FilteredRecipe {
                recipe: Arc::clone(recipe),
                matching_count: Some(count),
            })
        })
        .collect();

    matches.sort_by(|a, b| b.matching_count.cmp(&a.matching_count));
    matches
}

/// Number of selected ingredients present in the recipe
fn matching_count(recipe: &Recipe, selected: &IngredientSelection) -> usize {
    let names: Vec<String> = recipe.ingredients.iter().map(|i| i.key()).collect();
    selected
        .iter()
        .filter(|wanted| names.iter().any(|name| name == wanted))
        .count()
}
