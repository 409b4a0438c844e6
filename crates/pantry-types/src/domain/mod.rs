pub mod catalog;
pub mod locale;
pub mod recipe;
pub mod selection;
pub mod view;

pub use catalog::{ALL_CATEGORY, Catalog, CatalogFile, Facets, UNTYPED_INGREDIENT};
pub use locale::Locale;
pub use recipe::{Ingredient, Recipe, RecipeId};
pub use selection::{IngredientSelection, SelectionState};
pub use view::ViewMode;
