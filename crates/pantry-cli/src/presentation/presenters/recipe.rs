use crate::presentation::formatters::recipe_count_label;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, IngredientLineViewModel, RecipeListViewModel,
    RecipeViewModel, StatusBadge,
};
use pantry_engine::FilteredRecipe;
use pantry_types::{ALL_CATEGORY, Ingredient, IngredientSelection, Recipe};

pub(crate) fn present_ingredient(ingredient: &Ingredient) -> IngredientLineViewModel {
    IngredientLineViewModel {
        name: ingredient.name.trim().to_string(),
        amount: ingredient.amount.trim().to_string(),
        kind: ingredient.kind.trim().to_string(),
    }
}

pub fn present_recipe(recipe: &Recipe, matching_count: Option<usize>) -> RecipeViewModel {
    RecipeViewModel {
        id: recipe.id.get(),
        name: recipe.title(),
        description: recipe.description.clone(),
        image: recipe.image.clone(),
        prep_time: recipe.prep_time.clone(),
        cook_time: recipe.cook_time.clone(),
        servings: recipe.servings.clone(),
        categories: recipe.categories.clone(),
        ingredients: recipe
            .ingredients
            .iter()
            .filter(|i| !i.name.trim().is_empty())
            .map(present_ingredient)
            .collect(),
        instructions: recipe.instructions.clone(),
        matching_count,
    }
}

pub fn present_recipe_list(
    category: &str,
    selected: &IngredientSelection,
    filtered: &[FilteredRecipe],
) -> CommandResultViewModel<RecipeListViewModel> {
    let total_count = filtered.len();
    let content = RecipeListViewModel {
        category: category.to_string(),
        selected_ingredients: selected.iter().map(str::to_string).collect(),
        total_count,
        recipes: filtered
            .iter()
            .map(|f| present_recipe(&f.recipe, f.matching_count))
            .collect(),
    };

    let result = CommandResultViewModel::new(content);
    if total_count > 0 {
        return result.with_badge(StatusBadge::success(recipe_count_label(total_count)));
    }

    let mut result = result.with_badge(StatusBadge::info("No recipes match"));
    if !selected.is_empty() {
        result = result.with_suggestion(
            Guidance::new("Try fewer ingredients").with_command("pantry recipes --ingredient <name>"),
        );
    }
    if category != ALL_CATEGORY {
        result = result
            .with_suggestion(Guidance::new("List the categories").with_command("pantry facets"));
    }
    result
}

pub fn present_recipe_detail(recipe: &Recipe) -> CommandResultViewModel<RecipeViewModel> {
    CommandResultViewModel::new(present_recipe(recipe, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_types::Catalog;

    #[test]
    fn test_nameless_ingredients_are_hidden() {
        let recipe = Recipe::new(4, "")
            .with_ingredient(Ingredient::new(" ", "1", "x"))
            .with_ingredient(Ingredient::new("salt", " pinch ", ""));

        let vm = present_recipe(&recipe, None);
        assert_eq!(vm.name, "Recipe 4");
        assert_eq!(vm.ingredients.len(), 1);
        assert_eq!(vm.ingredients[0].amount, "pinch");
    }

    #[test]
    fn test_empty_result_suggests_next_steps() {
        let catalog = Catalog::new(vec![Recipe::new(1, "Toast").with_categories(["breakfast"])]);
        let selected = IngredientSelection::from_names(["caviar"]);
        let filtered = pantry_engine::filter_recipes(&catalog, &selected, "dinner");

        let result = present_recipe_list("dinner", &selected, &filtered);
        assert_eq!(result.badge.map(|b| b.label), Some("No recipes match".to_string()));
        assert_eq!(result.suggestions.len(), 2);
    }
}
