use pantry_engine::filter_recipes;
use pantry_types::{Catalog, Ingredient, IngredientSelection, Recipe};

const CATEGORIES: [&str; 3] = ["breakfast", "Dinner", "snack"];
const INGREDIENTS: [&str; 6] = ["egg", "Milk", "flour", "rice", "butter", "salt"];

// Deterministic catalog whose recipes cycle through categories and
// ingredient subsets, so every combination below has matches and ties.
fn generated_catalog() -> Catalog {
    let recipes = (0..24u32)
        .map(|i| {
            let category = CATEGORIES[i as usize % CATEGORIES.len()];
            INGREDIENTS
                .iter()
                .enumerate()
                .filter(|(bit, _)| (i >> bit) & 1 == 1)
                .fold(
                    Recipe::new(i + 1, format!("Recipe {}", i + 1)).with_categories([category]),
                    |r, (_, name)| r.with_ingredient(Ingredient::new(*name, "1", "misc")),
                )
        })
        .collect();
    Catalog::new(recipes)
}

fn catalog_position(catalog: &Catalog, id: u32) -> usize {
    catalog
        .recipes()
        .iter()
        .position(|r| r.id.get() == id)
        .expect("recipe from catalog")
}

#[test]
fn test_category_only_filter_preserves_relative_order() {
    let catalog = generated_catalog();

    for category in ["all", "breakfast", "DINNER", "snack", "unknown"] {
        let results = filter_recipes(&catalog, &IngredientSelection::new(), category);

        for result in &results {
            assert!(category == "all" || result.recipe.has_category(category));
            assert!(result.matching_count.is_none());
        }
        let positions: Vec<usize> = results
            .iter()
            .map(|r| catalog_position(&catalog, r.recipe.id.get()))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        if category == "all" {
            assert_eq!(results.len(), catalog.len());
        }
    }
}

#[test]
fn test_match_counts_are_exact_and_sorted_stably() {
    let catalog = generated_catalog();
    let selections = [
        vec!["egg"],
        vec!["egg", "milk"],
        vec!["FLOUR", "rice", "salt"],
        vec!["egg", "milk", "flour", "rice", "butter", "salt"],
    ];

    for names in selections {
        let selected = IngredientSelection::from_names(&names);
        let results = filter_recipes(&catalog, &selected, "all");
        assert!(!results.is_empty());

        for result in &results {
            let expected = selected
                .iter()
                .filter(|name| result.recipe.has_ingredient(name))
                .count();
            assert_eq!(result.matching_count, Some(expected));
            assert!(expected >= 1);
        }

        for pair in results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.matching_count >= b.matching_count);
            if a.matching_count == b.matching_count {
                assert!(
                    catalog_position(&catalog, a.recipe.id.get())
                        < catalog_position(&catalog, b.recipe.id.get())
                );
            }
        }
    }
}
