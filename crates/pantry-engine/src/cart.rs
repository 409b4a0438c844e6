use pantry_types::{Catalog, Ingredient, IngredientSelection, Recipe, RecipeId};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Export line for an entry whose ingredients are all already selected
pub const ALL_SET_LINE: &str = "(All set!)";

/// One recipe in the shopping list
#[derive(Debug, Clone, Serialize)]
pub struct CartEntry {
    pub recipe: Arc<Recipe>,
}

/// Ingredients still to buy for one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "ingredients", rename_all = "snake_case")]
pub enum CartLines {
    Ingredients(Vec<Ingredient>),
    /// Every ingredient is already selected
    AllSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: RecipeId,
    pub title: String,
    pub lines: CartLines,
}

/// Shopping list: distinct recipes in insertion order
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recipe unless it is already present.
    ///
    /// The stored value is the catalog's recipe with the same id; the passed
    /// recipe is only kept when the catalog no longer knows that id.
    pub fn add(&mut self, recipe: Arc<Recipe>, catalog: &Catalog) -> bool {
        if self.contains(recipe.id) {
            return false;
        }
        let canonical = catalog.get(recipe.id).cloned().unwrap_or(recipe);
        self.entries.push(CartEntry { recipe: canonical });
        true
    }

    /// Remove the entry for `id`; false when there was none
    pub fn remove(&mut self, id: RecipeId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.recipe.id != id);
        self.entries.len() != before
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.entries.iter().any(|entry| entry.recipe.id == id)
    }

    /// Ids currently in the cart, rebuilt from the entry list on every call
    pub fn ids(&self) -> BTreeSet<RecipeId> {
        self.entries.iter().map(|entry| entry.recipe.id).collect()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Point every entry at `catalog`'s recipe with the same id.
    /// Entries the catalog does not know keep their current recipe.
    pub fn rebase(&mut self, catalog: &Catalog) {
        for entry in &mut self.entries {
            if let Some(recipe) = catalog.get(entry.recipe.id) {
                entry.recipe = Arc::clone(recipe);
            }
        }
    }

    /// Newest-first view with ingredients the user already has removed
    pub fn render(&self, selected: &IngredientSelection) -> Vec<CartItemView> {
        self.entries
            .iter()
            .rev()
            .map(|entry| CartItemView {
                id: entry.recipe.id,
                title: entry.recipe.title(),
                lines: still_needed(&entry.recipe, selected),
            })
            .collect()
    }

    /// Plain-text shopping list, same content and order as [`Cart::render`]
    pub fn export_text(&self, selected: &IngredientSelection) -> String {
        self.render(selected)
            .iter()
            .map(|item| {
                let mut block = vec![item.title.clone()];
                match &item.lines {
                    CartLines::AllSet => block.push(ALL_SET_LINE.to_string()),
                    CartLines::Ingredients(ingredients) => {
                        block.extend(ingredients.iter().map(export_line));
                    }
                }
                block.join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn still_needed(recipe: &Recipe, selected: &IngredientSelection) -> CartLines {
    let remaining: Vec<Ingredient> = recipe
        .ingredients
        .iter()
        .filter(|ingredient| {
            let key = ingredient.key();
            !key.is_empty() && !selected.contains(&key)
        })
        .cloned()
        .collect();

    if remaining.is_empty() {
        CartLines::AllSet
    } else {
        CartLines::Ingredients(remaining)
    }
}

fn export_line(ingredient: &Ingredient) -> String {
    let amount = ingredient.amount.trim();
    if amount.is_empty() {
        format!("- {}", ingredient.name)
    } else {
        format!("- {} {}", amount, ingredient.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn omelette() -> Recipe {
        Recipe::new(1, "Omelette")
            .with_ingredient(Ingredient::new("egg", "2", "dairy"))
            .with_ingredient(Ingredient::new("milk", "50ml", "dairy"))
            .with_ingredient(Ingredient::new("flour", "", "pantry"))
    }

    fn toast() -> Recipe {
        Recipe::new(2, "Toast").with_ingredient(Ingredient::new("Bread", "2 slices", "bakery"))
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![omelette(), toast()])
    }

    fn names(lines: &CartLines) -> Vec<&str> {
        match lines {
            CartLines::Ingredients(list) => list.iter().map(|i| i.name.as_str()).collect(),
            CartLines::AllSet => Vec::new(),
        }
    }

    #[test]
    fn test_add_ignores_duplicates() {
        let catalog = catalog();
        let mut cart = Cart::new();

        assert!(cart.add(Arc::clone(&catalog.recipes()[0]), &catalog));
        assert!(!cart.add(Arc::clone(&catalog.recipes()[0]), &catalog));
        assert!(!cart.add(Arc::new(omelette()), &catalog));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_stores_canonical_catalog_recipe() {
        let catalog = catalog();
        let mut cart = Cart::new();

        let stale = Arc::new(Recipe::new(1, "Old omelette name"));
        cart.add(stale, &catalog);

        assert!(Arc::ptr_eq(&cart.entries()[0].recipe, &catalog.recipes()[0]));
        assert_eq!(cart.entries()[0].recipe.name, "Omelette");
    }

    #[test]
    fn test_add_falls_back_to_passed_recipe() {
        let catalog = catalog();
        let mut cart = Cart::new();

        assert!(cart.add(Arc::new(Recipe::new(99, "Unlisted")), &catalog));
        assert_eq!(cart.entries()[0].recipe.name, "Unlisted");
    }

    #[test]
    fn test_rebase_swaps_in_reloaded_recipes() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(Arc::clone(&catalog.recipes()[0]), &catalog);
        cart.add(Arc::new(Recipe::new(42, "Kept")), &catalog);

        let reloaded = Catalog::new(vec![Recipe::new(1, "Omelette (fr)")]);
        cart.rebase(&reloaded);

        assert_eq!(cart.entries()[0].recipe.name, "Omelette (fr)");
        assert_eq!(cart.entries()[1].recipe.name, "Kept");
    }

    #[test]
    fn test_remove_reports_whether_anything_changed() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(Arc::clone(&catalog.recipes()[1]), &catalog);

        assert!(!cart.remove(RecipeId::new(1)));
        assert!(cart.remove(RecipeId::new(2)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_then_add_restores_entry() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let recipe = Arc::clone(&catalog.recipes()[0]);

        cart.add(Arc::clone(&recipe), &catalog);
        cart.remove(recipe.id);
        cart.add(Arc::clone(&recipe), &catalog);

        assert_eq!(cart.ids(), BTreeSet::from([recipe.id]));
    }

    #[test]
    fn test_ids_never_contain_duplicates() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let ops: [(bool, usize); 7] = [
            (true, 0),
            (true, 1),
            (true, 0),
            (false, 1),
            (true, 1),
            (true, 1),
            (false, 0),
        ];

        for (add, index) in ops {
            let recipe = Arc::clone(&catalog.recipes()[index]);
            if add {
                cart.add(recipe, &catalog);
            } else {
                cart.remove(recipe.id);
            }
            assert_eq!(cart.ids().len(), cart.len());
        }
        assert_eq!(cart.ids(), BTreeSet::from([RecipeId::new(2)]));
    }

    #[test]
    fn test_render_filters_selected_ingredients() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(Arc::clone(&catalog.recipes()[0]), &catalog);

        let view = cart.render(&IngredientSelection::from_names(["egg"]));
        assert_eq!(names(&view[0].lines), vec!["milk", "flour"]);

        let view = cart.render(&IngredientSelection::from_names(["EGG", "milk", "Flour"]));
        assert_eq!(view[0].lines, CartLines::AllSet);
    }

    #[test]
    fn test_render_is_newest_first() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(Arc::clone(&catalog.recipes()[0]), &catalog);
        cart.add(Arc::clone(&catalog.recipes()[1]), &catalog);

        let titles: Vec<String> = cart
            .render(&IngredientSelection::new())
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(titles, vec!["Toast", "Omelette"]);
    }

    #[test]
    fn test_nameless_ingredients_are_not_listed() {
        let recipe = Recipe::new(5, "Mystery")
            .with_ingredient(Ingredient::new("", "1 cup", ""))
            .with_ingredient(Ingredient::new("sugar", "1 tbsp", "pantry"));
        let catalog = Catalog::new(vec![recipe]);
        let mut cart = Cart::new();
        cart.add(Arc::clone(&catalog.recipes()[0]), &catalog);

        let view = cart.render(&IngredientSelection::new());
        assert_eq!(names(&view[0].lines), vec!["sugar"]);
    }

    #[test]
    fn test_export_text() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(Arc::clone(&catalog.recipes()[0]), &catalog);
        cart.add(Arc::clone(&catalog.recipes()[1]), &catalog);

        let text = cart.export_text(&IngredientSelection::from_names(["egg"]));
        insta::assert_snapshot!(text, @r"
        Toast
        - 2 slices Bread

        Omelette
        - 50ml milk
        - flour
        ");
    }

    #[test]
    fn test_export_text_all_set() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(Arc::clone(&catalog.recipes()[1]), &catalog);

        let text = cart.export_text(&IngredientSelection::from_names(["bread"]));
        assert_eq!(text, "Toast\n(All set!)");
    }

    #[test]
    fn test_export_empty_cart() {
        assert_eq!(Cart::new().export_text(&IngredientSelection::new()), "");
    }
}
