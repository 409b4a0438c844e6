use crate::presentation::formatters::{capitalize, recipe_count_label};
use crate::presentation::view_models::{
    CategoryTabViewModel, CommandResultViewModel, FacetsViewModel, IngredientGroupViewModel,
    LocaleEntryViewModel, LocaleListViewModel, StatusBadge,
};
use pantry_types::{ALL_CATEGORY, Facets, Locale};

pub const ALL_RECIPES_TITLE: &str = "All Recipes";

/// "All Recipes" first, then the other categories sorted; palette slots
/// follow that order and skip the sentinel
pub fn category_tabs(facets: &Facets) -> Vec<CategoryTabViewModel> {
    let mut slot = 0;
    facets
        .category_tabs()
        .into_iter()
        .map(|label| {
            if label == ALL_CATEGORY {
                CategoryTabViewModel {
                    label: label.to_string(),
                    title: ALL_RECIPES_TITLE.to_string(),
                    color: None,
                }
            } else {
                slot += 1;
                CategoryTabViewModel {
                    label: label.to_string(),
                    title: capitalize(label),
                    color: Some(slot - 1),
                }
            }
        })
        .collect()
}

pub fn ingredient_groups(facets: &Facets) -> Vec<IngredientGroupViewModel> {
    facets
        .ingredient_groups()
        .map(|(kind, names)| IngredientGroupViewModel {
            kind: kind.to_string(),
            title: capitalize(kind),
            ingredients: names.iter().cloned().collect(),
        })
        .collect()
}

pub fn present_facets(
    facets: &Facets,
    recipe_count: usize,
) -> CommandResultViewModel<FacetsViewModel> {
    CommandResultViewModel::new(FacetsViewModel {
        recipe_count,
        categories: category_tabs(facets),
        ingredient_groups: ingredient_groups(facets),
    })
    .with_badge(StatusBadge::info(recipe_count_label(recipe_count)))
}

pub fn present_locales(
    locales: &[Locale],
    current: Option<&Locale>,
) -> CommandResultViewModel<LocaleListViewModel> {
    let entries: Vec<LocaleEntryViewModel> = locales
        .iter()
        .map(|locale| LocaleEntryViewModel {
            tag: locale.as_str().to_string(),
            name: locale.display_name().to_string(),
            current: Some(locale) == current,
        })
        .collect();

    let result = CommandResultViewModel::new(LocaleListViewModel { locales: entries });
    if locales.is_empty() {
        result.with_badge(StatusBadge::info("No localized catalogs found"))
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_types::{Catalog, Ingredient, Recipe};

    fn facets() -> Facets {
        Catalog::new(vec![
            Recipe::new(1, "Soup")
                .with_categories(["lunch", "vegetarian"])
                .with_ingredient(Ingredient::new("Leek", "1", "vegetable"))
                .with_ingredient(Ingredient::new("salt", "", "")),
            Recipe::new(2, "Toast")
                .with_categories(["breakfast"])
                .with_ingredient(Ingredient::new("bread", "2", "bakery")),
        ])
        .facets()
        .clone()
    }

    #[test]
    fn test_tabs_put_all_recipes_first() {
        let titles: Vec<String> = category_tabs(&facets()).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["All Recipes", "Breakfast", "Lunch", "Vegetarian"]);
    }

    #[test]
    fn test_palette_slots_skip_sentinel() {
        let slots: Vec<Option<usize>> =
            category_tabs(&facets()).into_iter().map(|t| t.color).collect();
        assert_eq!(slots, vec![None, Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_ingredient_groups_sorted_by_type() {
        let groups = ingredient_groups(&facets());
        let kinds: Vec<&str> = groups.iter().map(|g| g.kind.as_str()).collect();
        assert_eq!(kinds, vec!["bakery", "other", "vegetable"]);
        assert_eq!(groups[2].title, "Vegetable");
        assert_eq!(groups[2].ingredients, vec!["leek"]);
    }

    #[test]
    fn test_locales_mark_current() {
        let locales = vec![Locale::new("en"), Locale::new("fr")];
        let result = present_locales(&locales, Some(&Locale::new("fr")));
        assert!(!result.content.locales[0].current);
        assert!(result.content.locales[1].current);
        assert_eq!(result.content.locales[1].name, "Français");
    }
}
