//! Plain-text views for one-shot commands. No colors here; the console
//! renderer styles the badge and tips around them.

mod cart;
mod catalog;
mod recipe;

pub use cart::{EMPTY_CART_TEXT, ShoppingListView};
pub use catalog::{FacetsView, LocaleListView};
pub(crate) use recipe::meta_line;
pub use recipe::{RecipeDetailView, RecipeListView};
