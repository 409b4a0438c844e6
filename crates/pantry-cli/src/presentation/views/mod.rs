pub mod console;
pub mod tui;

pub use console::{FacetsView, LocaleListView, RecipeDetailView, RecipeListView, ShoppingListView};
