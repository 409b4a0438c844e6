//! Pure conversions from domain values to view models.

pub mod cart;
pub mod catalog;
pub mod recipe;

pub use cart::{present_cart_entries, present_shopping_list};
pub use catalog::{
    ALL_RECIPES_TITLE, category_tabs, ingredient_groups, present_facets, present_locales,
};
pub use recipe::{present_recipe, present_recipe_detail, present_recipe_list};
